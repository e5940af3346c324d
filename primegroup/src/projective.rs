//! Projective curve points.

use crate::{AffinePoint, FieldElement, PrimeField};
use core::ops::Neg;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Point on a Weierstrass curve in homogeneous projective coordinates
/// `(X : Y : Z)`, representing the affine point `(X/Z, Y/Z)`.
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

impl ProjectivePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity(field: &PrimeField) -> Self {
        Self {
            x: field.zero(),
            y: field.one(),
            z: field.zero(),
        }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Returns the affine representation of this point.
    pub fn to_affine(&self) -> AffinePoint {
        let field = self.z.field();
        let zinv = self.z.invert().unwrap_or(field.zero());
        let affine = AffinePoint {
            x: self.x * zinv,
            y: self.y * zinv,
            infinity: 0,
        };

        AffinePoint::conditional_select(&affine, &AffinePoint::identity(&field), self.is_identity())
    }
}

impl From<AffinePoint> for ProjectivePoint {
    fn from(p: AffinePoint) -> Self {
        let field = p.x.field();
        let projective = ProjectivePoint {
            x: p.x,
            y: p.y,
            z: field.one(),
        };
        Self::conditional_select(&projective, &Self::identity(&field), p.is_identity())
    }
}

impl From<&AffinePoint> for ProjectivePoint {
    fn from(p: &AffinePoint) -> Self {
        Self::from(*p)
    }
}

impl From<ProjectivePoint> for AffinePoint {
    fn from(p: ProjectivePoint) -> AffinePoint {
        p.to_affine()
    }
}

impl ConditionallySelectable for ProjectivePoint {
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl ConstantTimeEq for ProjectivePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        let x1 = self.x * other.z;
        let x2 = other.x * self.z;

        let y1 = self.y * other.z;
        let y2 = other.y * self.z;

        let self_is_zero = self.is_identity();
        let other_is_zero = other.is_identity();

        (self_is_zero & other_is_zero)
            | ((!self_is_zero) & (!other_is_zero) & x1.ct_eq(&x2) & y1.ct_eq(&y2))
    }
}

impl PartialEq for ProjectivePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for ProjectivePoint {}

impl Neg for ProjectivePoint {
    type Output = ProjectivePoint;

    fn neg(self) -> ProjectivePoint {
        ProjectivePoint {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }
}

impl Neg for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn neg(self) -> ProjectivePoint {
        -(*self)
    }
}
