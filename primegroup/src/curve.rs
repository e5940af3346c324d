//! Short Weierstrass curve equation `y² = x³ + a·x + b` over a prime field.

use crate::{
    AffinePoint, Error, FieldElement, PrimeField, ProjectivePoint, Result, Uint, point_arithmetic,
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Elliptic curve `y² ≡ x³ + a·x + b (mod p)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WeierstrassCurve {
    pub(crate) field: PrimeField,

    /// Coefficient `a` in the curve equation.
    pub(crate) a: FieldElement,

    /// Coefficient `b` in the curve equation.
    pub(crate) b: FieldElement,
}

impl WeierstrassCurve {
    /// Create the curve with the given prime modulus and coefficients.
    ///
    /// `a` and `b` must be reduced modulo `prime`, and the curve must be
    /// non-singular: `4a³ + 27b² ≠ 0 (mod prime)`.
    pub fn new(prime: &Uint, a: &Uint, b: &Uint) -> Result<Self> {
        let field = PrimeField::new(prime)?;
        let a = Option::<FieldElement>::from(field.element(a)).ok_or(Error::InvalidParameters)?;
        let b = Option::<FieldElement>::from(field.element(b)).ok_or(Error::InvalidParameters)?;

        let discriminant = field.from_u64(4) * a.square() * a + field.from_u64(27) * b.square();
        if bool::from(discriminant.is_zero()) {
            log::debug!("rejecting singular curve over {prime:?}");
            return Err(Error::InvalidParameters);
        }

        Ok(Self { field, a, b })
    }

    /// Base field of the curve.
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Field modulus `p`.
    pub fn prime(&self) -> &Uint {
        self.field.modulus()
    }

    /// Coefficient `a`.
    pub fn a(&self) -> Uint {
        self.a.to_uint()
    }

    /// Coefficient `b`.
    pub fn b(&self) -> Uint {
        self.b.to_uint()
    }

    /// Right-hand side of the curve equation: `x³ + a·x + b`.
    fn rhs(&self, x: &FieldElement) -> FieldElement {
        x.square() * x + self.a * x + self.b
    }

    /// Does the given point satisfy the curve equation?
    ///
    /// The point at infinity is on every curve. Points over a different
    /// field never are.
    pub fn is_on_curve(&self, point: &AffinePoint) -> Choice {
        if point.x.field() != self.field || point.y.field() != self.field {
            return Choice::from(0);
        }

        let lhs = point.y.square();
        let rhs = self.rhs(&point.x);
        point.is_identity() | lhs.ct_eq(&rhs)
    }

    /// Build a finite point from its affine coordinates.
    pub fn point(&self, x: &Uint, y: &Uint) -> Result<AffinePoint> {
        let x = Option::<FieldElement>::from(self.field.element(x)).ok_or(Error::PointNotOnCurve)?;
        let y = Option::<FieldElement>::from(self.field.element(y)).ok_or(Error::PointNotOnCurve)?;
        let point = AffinePoint { x, y, infinity: 0 };

        if bool::from(self.is_on_curve(&point)) {
            Ok(point)
        } else {
            Err(Error::PointNotOnCurve)
        }
    }

    /// Recover the point with the given x-coordinate whose y-coordinate has
    /// the requested parity.
    pub fn decompress(&self, x: &Uint, y_is_odd: bool) -> Result<AffinePoint> {
        let x = Option::<FieldElement>::from(self.field.element(x)).ok_or(Error::PointNotOnCurve)?;
        let alpha = self.rhs(&x);
        let beta = Option::<FieldElement>::from(alpha.sqrt()).ok_or_else(|| {
            log::debug!("x³ + ax + b is a non-residue for x = {:?}", x.to_uint());
            Error::PointNotOnCurve
        })?;

        let y_is_odd = Choice::from(u8::from(y_is_odd));
        let y = FieldElement::conditional_select(&-beta, &beta, beta.is_odd().ct_eq(&y_is_odd));

        // y = 0 has no odd counterpart
        if !bool::from(y.is_odd().ct_eq(&y_is_odd)) {
            return Err(Error::PointNotOnCurve);
        }

        Ok(AffinePoint { x, y, infinity: 0 })
    }

    /// Returns `lhs + rhs`.
    pub fn add(&self, lhs: &ProjectivePoint, rhs: &ProjectivePoint) -> ProjectivePoint {
        point_arithmetic::add(self, lhs, rhs)
    }

    /// Returns `point + point`.
    pub fn double(&self, point: &ProjectivePoint) -> ProjectivePoint {
        point_arithmetic::double(self, point)
    }

    /// Returns `[k] point`.
    ///
    /// Left-to-right double-and-add over the bits of `k`; only the bit length
    /// of `k` leaks through timing.
    pub fn mul(&self, point: &ProjectivePoint, k: &Uint) -> ProjectivePoint {
        let mut acc = ProjectivePoint::identity(&self.field);

        for i in (0..k.bits_vartime()).rev() {
            acc = self.double(&acc);
            let sum = self.add(&acc, point);
            acc = ProjectivePoint::conditional_select(&acc, &sum, k.bit(i).into());
        }

        acc
    }
}

#[cfg(test)]
mod tests {
    use super::WeierstrassCurve;
    use crate::{AffinePoint, Error, ProjectivePoint, Uint, uint_from_be_slice};
    use hex_literal::hex;

    fn p256() -> WeierstrassCurve {
        WeierstrassCurve::new(
            &uint_from_be_slice(&hex!(
                "ffffffff 00000001 00000000 00000000 00000000 ffffffff ffffffff ffffffff"
            ))
            .unwrap(),
            &uint_from_be_slice(&hex!(
                "ffffffff 00000001 00000000 00000000 00000000 ffffffff ffffffff fffffffc"
            ))
            .unwrap(),
            &uint_from_be_slice(&hex!(
                "5ac635d8 aa3a93e7 b3ebbd55 769886bc 651d06b0 cc53b0f6 3bce3c3e 27d2604b"
            ))
            .unwrap(),
        )
        .unwrap()
    }

    fn p256_generator(curve: &WeierstrassCurve) -> AffinePoint {
        curve
            .point(
                &uint_from_be_slice(&hex!(
                    "6b17d1f2 e12c4247 f8bce6e5 63a440f2 77037d81 2deb33a0 f4a13945 d898c296"
                ))
                .unwrap(),
                &uint_from_be_slice(&hex!(
                    "4fe342e2 fe1a7f9b 8ee7eb4a 7c0f9e16 2bce3357 6b315ece cbb64068 37bf51f5"
                ))
                .unwrap(),
            )
            .unwrap()
    }

    #[test]
    fn singular_curve_is_rejected() {
        let p = Uint::from_u64(97);
        assert_eq!(
            WeierstrassCurve::new(&p, &Uint::ZERO, &Uint::ZERO),
            Err(Error::InvalidParameters)
        );
    }

    #[test]
    fn unreduced_coefficient_is_rejected() {
        let p = Uint::from_u64(97);
        assert_eq!(
            WeierstrassCurve::new(&p, &Uint::from_u64(97), &Uint::from_u64(3)),
            Err(Error::InvalidParameters)
        );
    }

    #[test]
    fn identity_is_on_curve() {
        let curve = p256();
        assert!(bool::from(curve.is_on_curve(&AffinePoint::identity(curve.field()))));
    }

    #[test]
    fn off_curve_point_is_rejected() {
        let curve = p256();
        assert_eq!(
            curve.point(&Uint::from_u64(1), &Uint::from_u64(1)),
            Err(Error::PointNotOnCurve)
        );
    }

    #[test]
    fn decompress_generator() {
        let curve = p256();
        let generator = p256_generator(&curve);
        assert_eq!(curve.decompress(&generator.x(), true), Ok(generator));
        assert_eq!(curve.decompress(&generator.x(), false), Ok(-generator));
    }

    #[test]
    fn decompress_rejects_unreduced_x() {
        let curve = p256();
        assert_eq!(
            curve.decompress(curve.prime(), false),
            Err(Error::PointNotOnCurve)
        );
    }

    #[test]
    fn affine_to_projective() {
        let curve = p256();
        let generator = p256_generator(&curve);
        let projective = ProjectivePoint::from(generator);

        assert_eq!(projective.to_affine(), generator);
        assert!(!bool::from(projective.to_affine().is_identity()));

        let identity = ProjectivePoint::identity(curve.field());
        assert!(bool::from(identity.to_affine().is_identity()));
        assert_eq!(
            ProjectivePoint::from(AffinePoint::identity(curve.field())),
            identity
        );
    }

    #[test]
    fn projective_identity_addition() {
        let curve = p256();
        let identity = ProjectivePoint::identity(curve.field());
        let generator = ProjectivePoint::from(p256_generator(&curve));

        assert_eq!(curve.add(&identity, &generator), generator);
        assert_eq!(curve.add(&generator, &identity), generator);
    }

    #[test]
    fn add_negation_is_identity() {
        let curve = p256();
        let generator = ProjectivePoint::from(p256_generator(&curve));
        assert!(bool::from(curve.add(&generator, &-generator).is_identity()));
    }

    #[test]
    fn double_matches_add() {
        let curve = p256();
        let generator = ProjectivePoint::from(p256_generator(&curve));
        let doubled = curve.double(&generator);

        assert_eq!(doubled, curve.add(&generator, &generator));
        assert!(bool::from(curve.is_on_curve(&doubled.to_affine())));
    }

    #[test]
    fn mul_small_scalars() {
        let curve = p256();
        let generator = ProjectivePoint::from(p256_generator(&curve));

        assert!(bool::from(curve.mul(&generator, &Uint::ZERO).is_identity()));
        assert_eq!(curve.mul(&generator, &Uint::ONE), generator);

        let three = curve.add(&curve.double(&generator), &generator);
        assert_eq!(curve.mul(&generator, &Uint::from_u8(3)), three);
    }

    #[test]
    fn mul_by_two_test_vector() {
        // 2G on P-256
        let curve = p256();
        let generator = ProjectivePoint::from(p256_generator(&curve));
        let expected = curve
            .point(
                &uint_from_be_slice(&hex!(
                    "7cf27b18 8d034f7e 8a523803 04b51ac3 c08969e2 77f21b35 a60b48fc 47669978"
                ))
                .unwrap(),
                &uint_from_be_slice(&hex!(
                    "07775510 db8ed040 293d9ac6 9f7430db ba7dade6 3ce98229 9e04b79d 227873d1"
                ))
                .unwrap(),
            )
            .unwrap();

        assert_eq!(curve.mul(&generator, &Uint::from_u8(2)).to_affine(), expected);
    }
}
