//! Curve domain parameters.

use crate::{Result, Uint, uint_from_be_slice};

/// Domain parameters of a prime-field curve with a compressed generator.
///
/// The generator is recorded as its x-coordinate plus the parity of its
/// y-coordinate, the form in which published curve tables list it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CurveParameters {
    /// Field modulus `p`.
    pub prime: Uint,

    /// Coefficient `a` in the curve equation.
    pub a: Uint,

    /// Coefficient `b` in the curve equation.
    pub b: Uint,

    /// x-coordinate of the generator.
    pub generator_x: Uint,

    /// Is the generator's y-coordinate odd?
    pub generator_y_is_odd: bool,

    /// Order of the generator.
    pub order: Uint,

    /// Number of curve points divided by the order of the generator.
    pub cofactor: Uint,
}

impl CurveParameters {
    /// Decode parameters from big endian byte strings.
    pub fn from_be_bytes(
        prime: &[u8],
        a: &[u8],
        b: &[u8],
        generator_x: &[u8],
        generator_y_is_odd: bool,
        order: &[u8],
        cofactor: u64,
    ) -> Result<Self> {
        Ok(Self {
            prime: uint_from_be_slice(prime)?,
            a: uint_from_be_slice(a)?,
            b: uint_from_be_slice(b)?,
            generator_x: uint_from_be_slice(generator_x)?,
            generator_y_is_odd,
            order: uint_from_be_slice(order)?,
            cofactor: Uint::from_u64(cofactor),
        })
    }
}
