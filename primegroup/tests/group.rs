//! Group construction and validation tests.

use hex_literal::hex;
use primegroup::{
    CurveGroup, CurveParameters, Error, Nid, Uint, WeierstrassCurve, decompress,
    uint_from_be_slice,
};
use proptest::prelude::*;

fn p224_params() -> CurveParameters {
    CurveParameters::from_be_bytes(
        &hex!("ffffffffffffffffffffffffffffffff000000000000000000000001"),
        &hex!("fffffffffffffffffffffffffffffffefffffffffffffffffffffffe"),
        &hex!("b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4"),
        &hex!("b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21"),
        false,
        &hex!("ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d"),
        1,
    )
    .unwrap()
}

fn prime192v1_params() -> CurveParameters {
    CurveParameters::from_be_bytes(
        &hex!("fffffffffffffffffffffffffffffffeffffffffffffffff"),
        &hex!("fffffffffffffffffffffffffffffffefffffffffffffffc"),
        &hex!("64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1"),
        &hex!("188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012"),
        true,
        &hex!("ffffffffffffffffffffffff99def836146bc9b1b4d22831"),
        1,
    )
    .unwrap()
}

fn prime192v2_curve() -> WeierstrassCurve {
    WeierstrassCurve::new(
        &uint_from_be_slice(&hex!("fffffffffffffffffffffffffffffffeffffffffffffffff")).unwrap(),
        &uint_from_be_slice(&hex!("fffffffffffffffffffffffffffffffefffffffffffffffc")).unwrap(),
        &uint_from_be_slice(&hex!("cc22d6dfb95c6b25e49c0d6364a4e5980c393aa21668d953")).unwrap(),
    )
    .unwrap()
}

#[test]
fn p224_generator_via_tonelli_shanks() {
    let group = CurveGroup::from_parameters(&p224_params()).unwrap();
    let expected_y =
        uint_from_be_slice(&hex!("bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34"))
            .unwrap();

    assert_eq!(group.generator().y(), expected_y);
    assert_eq!(group.degree(), 224);
    assert!(group.check().is_ok());
}

#[test]
fn parameters_round_trip() {
    let params = prime192v1_params();
    let group = CurveGroup::from_parameters(&params).unwrap();
    assert_eq!(group.parameters(), params);
}

#[test]
fn fresh_groups_are_untagged() {
    let mut group = CurveGroup::from_parameters(&prime192v1_params()).unwrap();
    assert_eq!(group.nid(), None);

    group.set_nid(Nid(409));
    assert_eq!(group.nid(), Some(Nid(409)));
}

#[test]
fn equality_ignores_nid() {
    let a = CurveGroup::from_parameters(&prime192v1_params()).unwrap();
    let mut b = a.clone();
    b.set_nid(Nid(409));
    assert_eq!(a, b);

    let p224 = CurveGroup::from_parameters(&p224_params()).unwrap();
    assert_ne!(a, p224);
}

#[test]
fn generator_from_other_curve_is_rejected() {
    let v1 = CurveGroup::from_parameters(&prime192v1_params()).unwrap();
    let result = CurveGroup::new(
        prime192v2_curve(),
        *v1.generator(),
        *v1.order(),
        Uint::ONE,
    );
    assert_eq!(result.unwrap_err(), Error::InvalidParameters);
}

#[test]
fn identity_generator_is_rejected() {
    let curve = prime192v2_curve();
    let identity = primegroup::AffinePoint::identity(curve.field());
    let result = CurveGroup::new(curve, identity, Uint::from_u64(101), Uint::ONE);
    assert_eq!(result.unwrap_err(), Error::InvalidParameters);
}

#[test]
fn trivial_order_is_rejected() {
    let mut params = prime192v1_params();
    params.order = Uint::ONE;
    assert_eq!(
        CurveGroup::from_parameters(&params).unwrap_err(),
        Error::InvalidParameters
    );
}

#[test]
fn zero_cofactor_is_rejected() {
    let mut params = prime192v1_params();
    params.cofactor = Uint::ZERO;
    assert_eq!(
        CurveGroup::from_parameters(&params).unwrap_err(),
        Error::InvalidParameters
    );
}

#[test]
fn check_rejects_wrong_order() {
    let mut params = prime192v1_params();

    // composite
    params.order = params.order.wrapping_add(&Uint::ONE);
    let group = CurveGroup::from_parameters(&params).unwrap();
    assert_eq!(group.check(), Err(Error::InvalidParameters));

    // prime, but not the order of G
    params.order = params.prime;
    let group = CurveGroup::from_parameters(&params).unwrap();
    assert_eq!(group.check(), Err(Error::InvalidParameters));
}

#[test]
fn singular_curve_is_rejected() {
    let mut params = prime192v1_params();
    params.a = Uint::ZERO;
    params.b = Uint::ZERO;
    assert_eq!(
        CurveGroup::from_parameters(&params).unwrap_err(),
        Error::InvalidParameters
    );
}

#[test]
fn decompress_non_residue() {
    // x³ + ax + b is a non-residue for x = 0 on P-224
    let params = p224_params();
    assert_eq!(
        decompress(&params.prime, &params.a, &params.b, &Uint::ZERO, false),
        Err(Error::PointNotOnCurve)
    );
    assert_eq!(
        CurveGroup::from_parameters(&CurveParameters {
            generator_x: Uint::ZERO,
            ..params
        })
        .unwrap_err(),
        Error::PointNotOnCurve
    );
}

proptest! {
    #[test]
    fn decompress_parities_are_negations(w in any::<u64>()) {
        let params = p224_params();
        let x = Uint::from_u64(w);

        let odd = decompress(&params.prime, &params.a, &params.b, &x, true);
        let even = decompress(&params.prime, &params.a, &params.b, &x, false);

        match (odd, even) {
            (Ok(odd), Ok(even)) => {
                prop_assert_eq!(odd.x(), x);
                prop_assert_eq!(even.x(), x);
                prop_assert!(bool::from(odd.y_is_odd()));
                prop_assert!(!bool::from(even.y_is_odd()));
                prop_assert_eq!(odd.y().wrapping_add(&even.y()), params.prime);
            }
            (Err(odd), Err(even)) => {
                prop_assert_eq!(odd, Error::PointNotOnCurve);
                prop_assert_eq!(even, Error::PointNotOnCurve);
            }
            (odd, even) => prop_assert!(false, "mismatched results {:?} / {:?}", odd, even),
        }
    }
}
