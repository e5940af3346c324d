//! Prime field arithmetic with the modulus chosen at runtime.

use crate::{Error, Result, Uint};
use bigint::{
    Integer,
    modular::runtime_mod::{DynResidue, DynResidueParams},
};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess, CtOption};

/// Number of limbs in a [`Uint`].
const LIMBS: usize = Uint::LIMBS;

/// Prime field `GF(p)` described by its (odd) modulus.
///
/// Primality of the modulus is not checked: it is trusted input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PrimeField {
    params: DynResidueParams<LIMBS>,
}

impl PrimeField {
    /// Create the field with the given modulus.
    ///
    /// The modulus must be odd and greater than 3.
    pub fn new(modulus: &Uint) -> Result<Self> {
        if !bool::from(modulus.is_odd()) || *modulus <= Uint::from_u8(3) {
            log::debug!("rejecting field modulus {modulus:?}");
            return Err(Error::InvalidParameters);
        }

        Ok(Self {
            params: DynResidueParams::new(modulus),
        })
    }

    /// Field modulus `p`.
    pub fn modulus(&self) -> &Uint {
        self.params.modulus()
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> usize {
        self.modulus().bits_vartime()
    }

    /// Additive identity.
    pub fn zero(&self) -> FieldElement {
        FieldElement(DynResidue::zero(self.params))
    }

    /// Multiplicative identity.
    pub fn one(&self) -> FieldElement {
        FieldElement(DynResidue::one(self.params))
    }

    /// Small integer as a field element.
    pub fn from_u64(&self, w: u64) -> FieldElement {
        self.reduce(&Uint::from_u64(w))
    }

    /// Canonical integer `value < p` as a field element.
    ///
    /// Returns `None` if `value` is not reduced modulo `p`.
    pub fn element(&self, value: &Uint) -> CtOption<FieldElement> {
        CtOption::new(self.reduce(value), value.ct_lt(self.modulus()))
    }

    /// Any integer, reduced modulo `p`.
    pub fn reduce(&self, value: &Uint) -> FieldElement {
        FieldElement(DynResidue::new(value, self.params))
    }
}

/// Element of a [`PrimeField`], kept in Montgomery form.
#[derive(Clone, Copy, Debug)]
pub struct FieldElement(DynResidue<LIMBS>);

impl FieldElement {
    /// Field this element belongs to.
    pub fn field(&self) -> PrimeField {
        PrimeField {
            params: *self.0.params(),
        }
    }

    /// Canonical integer representative in `[0, p)`.
    pub fn to_uint(&self) -> Uint {
        self.0.retrieve()
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> Choice {
        self.to_uint().ct_eq(&Uint::ZERO)
    }

    /// Is the canonical representative odd?
    pub fn is_odd(&self) -> Choice {
        self.to_uint().is_odd()
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        Self(self.0.add(&self.0))
    }

    /// Returns `self * self`.
    pub fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Returns `self^exp`, leaking the bit length of `exp` through timing.
    pub fn pow_vartime(&self, exp: &Uint) -> Self {
        Self(self.0.pow_bounded_exp(exp, exp.bits_vartime()))
    }

    /// Returns the multiplicative inverse, or `None` for zero.
    pub fn invert(&self) -> CtOption<Self> {
        let (inverse, is_some) = self.0.invert();
        CtOption::new(Self(inverse), is_some.into())
    }

    /// Is this element a square (zero included)?
    ///
    /// Euler's criterion: `self^((p-1)/2) ∈ {0, 1}`.
    pub fn is_square(&self) -> Choice {
        let exp = self.modulus().wrapping_sub(&Uint::ONE).shr_vartime(1);
        let legendre = self.pow_vartime(&exp);
        legendre.is_zero() | legendre.ct_eq(&self.field().one())
    }

    /// Returns a square root of `self`, or `None` if `self` is a non-residue.
    ///
    /// Uses the `(p+1)/4` exponent for `p ≡ 3 (mod 4)` and Tonelli-Shanks
    /// otherwise. Variable time.
    pub fn sqrt(&self) -> CtOption<Self> {
        let field = self.field();
        let p_minus_one = self.modulus().wrapping_sub(&Uint::ONE);
        let two_adicity = p_minus_one.trailing_zeros_vartime();

        let root = if two_adicity == 1 {
            let exp = self.modulus().wrapping_add(&Uint::ONE).shr_vartime(2);
            self.pow_vartime(&exp)
        } else {
            match self.tonelli_shanks(&p_minus_one, two_adicity) {
                Some(root) => root,
                None => return CtOption::new(field.zero(), Choice::from(0)),
            }
        };

        CtOption::new(root, root.square().ct_eq(self))
    }

    /// Tonelli-Shanks for `p - 1 = q·2^s` with `s > 1`.
    fn tonelli_shanks(&self, p_minus_one: &Uint, two_adicity: usize) -> Option<Self> {
        let field = self.field();
        let one = field.one();

        if bool::from(self.is_zero()) {
            return Some(field.zero());
        }

        let q = p_minus_one.shr_vartime(two_adicity);

        // smallest quadratic non-residue
        let mut z = 2u64;
        while bool::from(field.from_u64(z).is_square()) {
            z += 1;
        }

        let mut m = two_adicity;
        let mut c = field.from_u64(z).pow_vartime(&q);
        let mut t = self.pow_vartime(&q);
        let mut r = self.pow_vartime(&q.wrapping_add(&Uint::ONE).shr_vartime(1));

        while t != one {
            // least `i` with `t^(2^i) = 1`
            let mut i = 0;
            let mut t2i = t;
            while t2i != one {
                t2i = t2i.square();
                i += 1;
                if i == m {
                    return None;
                }
            }

            let mut b = c;
            for _ in 0..(m - i - 1) {
                b = b.square();
            }

            m = i;
            c = b.square();
            t *= c;
            r *= b;
        }

        Some(r)
    }

    fn modulus(&self) -> &Uint {
        self.0.params().modulus()
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(DynResidue::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.add(&rhs.0))
    }
}

impl Add<&FieldElement> for FieldElement {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self {
        Self(self.0.add(&rhs.0))
    }
}

impl AddAssign for FieldElement {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.sub(&rhs.0))
    }
}

impl Sub<&FieldElement> for FieldElement {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self {
        Self(self.0.sub(&rhs.0))
    }
}

impl SubAssign for FieldElement {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0.mul(&rhs.0))
    }
}

impl Mul<&FieldElement> for FieldElement {
    type Output = Self;

    fn mul(self, rhs: &Self) -> Self {
        Self(self.0.mul(&rhs.0))
    }
}

impl MulAssign for FieldElement {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.neg())
    }
}
