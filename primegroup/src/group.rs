//! Validated curve groups.

use crate::{
    AffinePoint, CurveParameters, Error, ProjectivePoint, Result, Uint, WeierstrassCurve,
    is_probable_prime,
};
use core::fmt;

/// Numeric object identifier naming a curve for protocol use.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Nid(pub u32);

impl fmt::Display for Nid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Prime-field curve together with a validated generator of known order.
///
/// Every value owns its parameters; clones are independent.
#[derive(Clone, Debug)]
pub struct CurveGroup {
    curve: WeierstrassCurve,
    generator: AffinePoint,
    order: Uint,
    cofactor: Uint,
    nid: Option<Nid>,
}

impl CurveGroup {
    /// Build a group from a curve and a generator.
    ///
    /// The generator must be finite and satisfy the curve equation, the order
    /// must exceed 1 and the cofactor must be non-zero. The generator's order
    /// is not verified here; see [`CurveGroup::check`].
    pub fn new(
        curve: WeierstrassCurve,
        generator: AffinePoint,
        order: Uint,
        cofactor: Uint,
    ) -> Result<Self> {
        if bool::from(generator.is_identity()) || !bool::from(curve.is_on_curve(&generator)) {
            log::debug!("generator {generator:?} is not a finite point on the curve");
            return Err(Error::InvalidParameters);
        }

        if order <= Uint::ONE || cofactor == Uint::ZERO {
            log::debug!("rejecting order {order:?} with cofactor {cofactor:?}");
            return Err(Error::InvalidParameters);
        }

        Ok(Self {
            curve,
            generator,
            order,
            cofactor,
            nid: None,
        })
    }

    /// Build a group from domain parameters, decompressing the generator.
    pub fn from_parameters(params: &CurveParameters) -> Result<Self> {
        let curve = WeierstrassCurve::new(&params.prime, &params.a, &params.b)?;
        let generator = curve.decompress(&params.generator_x, params.generator_y_is_odd)?;
        Self::new(curve, generator, params.order, params.cofactor)
    }

    /// Underlying curve equation.
    pub fn curve(&self) -> &WeierstrassCurve {
        &self.curve
    }

    /// Field modulus `p`.
    pub fn prime(&self) -> &Uint {
        self.curve.prime()
    }

    /// Coefficient `a`.
    pub fn a(&self) -> Uint {
        self.curve.a()
    }

    /// Coefficient `b`.
    pub fn b(&self) -> Uint {
        self.curve.b()
    }

    /// Generator point.
    pub fn generator(&self) -> &AffinePoint {
        &self.generator
    }

    /// Order of the generator.
    pub fn order(&self) -> &Uint {
        &self.order
    }

    /// Cofactor.
    pub fn cofactor(&self) -> &Uint {
        &self.cofactor
    }

    /// Bit length of the field modulus.
    pub fn degree(&self) -> usize {
        self.curve.field().bits()
    }

    /// Domain parameters with the generator in compressed form.
    pub fn parameters(&self) -> CurveParameters {
        CurveParameters {
            prime: *self.prime(),
            a: self.a(),
            b: self.b(),
            generator_x: self.generator.x(),
            generator_y_is_odd: self.generator.y_is_odd().into(),
            order: self.order,
            cofactor: self.cofactor,
        }
    }

    /// Object identifier this group was tagged with, if any.
    pub fn nid(&self) -> Option<Nid> {
        self.nid
    }

    /// Tag this group with an object identifier.
    pub fn set_nid(&mut self, nid: Nid) {
        self.nid = Some(nid);
    }

    /// Returns `[k] G`.
    pub fn mul_generator(&self, k: &Uint) -> AffinePoint {
        self.curve
            .mul(&ProjectivePoint::from(self.generator), k)
            .to_affine()
    }

    /// Verify that the order is prime and annihilates the generator.
    pub fn check(&self) -> Result<()> {
        if !is_probable_prime(&self.order) {
            log::debug!("group order {:?} is composite", self.order);
            return Err(Error::InvalidParameters);
        }

        if !bool::from(self.mul_generator(&self.order).is_identity()) {
            log::debug!("order · G is not the point at infinity");
            return Err(Error::InvalidParameters);
        }

        Ok(())
    }
}

/// Groups compare equal when they share the curve, generator, order and
/// cofactor. The object identifier is not compared.
impl PartialEq for CurveGroup {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve
            && self.generator == other.generator
            && self.order == other.order
            && self.cofactor == other.cofactor
    }
}

impl Eq for CurveGroup {}
