//! Complete point arithmetic for short Weierstrass curves with any
//! 𝒂-coefficient.

use crate::{ProjectivePoint, WeierstrassCurve};

/// Implements complete addition for any curve
///
/// Implements the complete addition formula from [Renes-Costello-Batina 2015]
/// (Algorithm 1). The comments after each line indicate which algorithm steps
/// are being performed.
///
/// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
pub(crate) fn add(
    curve: &WeierstrassCurve,
    lhs: &ProjectivePoint,
    rhs: &ProjectivePoint,
) -> ProjectivePoint {
    let a = curve.a;
    let b3 = curve.b.double() + curve.b;

    let t0 = lhs.x * rhs.x; // 1
    let t1 = lhs.y * rhs.y; // 2
    let t2 = lhs.z * rhs.z; // 3
    let t3 = lhs.x + lhs.y; // 4
    let t4 = rhs.x + rhs.y; // 5
    let t3 = t3 * t4; // 6
    let t4 = t0 + t1; // 7
    let t3 = t3 - t4; // 8
    let t4 = lhs.x + lhs.z; // 9
    let t5 = rhs.x + rhs.z; // 10
    let t4 = t4 * t5; // 11
    let t5 = t0 + t2; // 12
    let t4 = t4 - t5; // 13
    let t5 = lhs.y + lhs.z; // 14
    let x3 = rhs.y + rhs.z; // 15
    let t5 = t5 * x3; // 16
    let x3 = t1 + t2; // 17
    let t5 = t5 - x3; // 18
    let z3 = a * t4; // 19
    let x3 = b3 * t2; // 20
    let z3 = x3 + z3; // 21
    let x3 = t1 - z3; // 22
    let z3 = t1 + z3; // 23
    let y3 = x3 * z3; // 24
    let t1 = t0 + t0; // 25
    let t1 = t1 + t0; // 26
    let t2 = a * t2; // 27
    let t4 = b3 * t4; // 28
    let t1 = t1 + t2; // 29
    let t2 = t0 - t2; // 30
    let t2 = a * t2; // 31
    let t4 = t4 + t2; // 32
    let t0 = t1 * t4; // 33
    let y3 = y3 + t0; // 34
    let t0 = t5 * t4; // 35
    let x3 = t3 * x3; // 36
    let x3 = x3 - t0; // 37
    let t0 = t3 * t1; // 38
    let z3 = t5 * z3; // 39
    let z3 = z3 + t0; // 40

    ProjectivePoint {
        x: x3,
        y: y3,
        z: z3,
    }
}

/// Implements point doubling for curves with any `a`
///
/// Implements the exception-free point doubling formula from [Renes-Costello-Batina 2015]
/// (Algorithm 3). The comments after each line indicate which algorithm
/// steps are being performed.
///
/// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
pub(crate) fn double(curve: &WeierstrassCurve, point: &ProjectivePoint) -> ProjectivePoint {
    let a = curve.a;
    let b3 = curve.b.double() + curve.b;

    let t0 = point.x * point.x; // 1
    let t1 = point.y * point.y; // 2
    let t2 = point.z * point.z; // 3
    let t3 = point.x * point.y; // 4
    let t3 = t3 + t3; // 5
    let z3 = point.x * point.z; // 6
    let z3 = z3 + z3; // 7
    let x3 = a * z3; // 8
    let y3 = b3 * t2; // 9
    let y3 = x3 + y3; // 10
    let x3 = t1 - y3; // 11
    let y3 = t1 + y3; // 12
    let y3 = x3 * y3; // 13
    let x3 = t3 * x3; // 14
    let z3 = b3 * z3; // 15
    let t2 = a * t2; // 16
    let t3 = t0 - t2; // 17
    let t3 = a * t3; // 18
    let t3 = t3 + z3; // 19
    let z3 = t0 + t0; // 20
    let t0 = z3 + t0; // 21
    let t0 = t0 + t2; // 22
    let t0 = t0 * t3; // 23
    let y3 = y3 + t0; // 24
    let t2 = point.y * point.z; // 25
    let t2 = t2 + t2; // 26
    let t0 = t2 * t3; // 27
    let x3 = x3 - t0; // 28
    let z3 = t2 * t1; // 29
    let z3 = z3 + z3; // 30
    let z3 = z3 + z3; // 31

    ProjectivePoint {
        x: x3,
        y: y3,
        z: z3,
    }
}
