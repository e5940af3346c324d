#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

#[cfg(any(feature = "std", test))]
extern crate std;

mod affine;
mod curve;
mod error;
mod field;
mod group;
mod params;
mod point_arithmetic;
mod primality;
mod projective;

pub use crate::{
    affine::AffinePoint,
    curve::WeierstrassCurve,
    error::{Error, Result},
    field::{FieldElement, PrimeField},
    group::{CurveGroup, Nid},
    params::CurveParameters,
    primality::is_probable_prime,
    projective::ProjectivePoint,
};
pub use bigint;
pub use subtle;

use bigint::{Encoding, U576};

/// Big integer type wide enough for every supported field modulus and group
/// order (up to 576 bits).
pub type Uint = U576;

/// Size of a [`Uint`] when serialized as big endian bytes.
pub const UINT_BYTES: usize = Uint::BYTES;

/// Decode a big endian byte string into a [`Uint`], left-padding with zeroes.
///
/// Leading zero bytes beyond [`UINT_BYTES`] are tolerated.
pub fn uint_from_be_slice(bytes: &[u8]) -> Result<Uint> {
    let significant = match bytes.iter().position(|&b| b != 0) {
        Some(start) => &bytes[start..],
        None => &[],
    };

    if significant.len() > UINT_BYTES {
        return Err(Error::ArithmeticFailure);
    }

    let mut repr = [0u8; UINT_BYTES];
    repr[UINT_BYTES - significant.len()..].copy_from_slice(significant);
    Ok(Uint::from_be_bytes(repr))
}

/// Point decompression over the curve `y² = x³ + a·x + b (mod prime)`.
///
/// Returns the point with the given `x`-coordinate whose `y`-coordinate has
/// the requested parity.
pub fn decompress(
    prime: &Uint,
    a: &Uint,
    b: &Uint,
    x: &Uint,
    y_is_odd: bool,
) -> Result<AffinePoint> {
    WeierstrassCurve::new(prime, a, b)?.decompress(x, y_is_odd)
}
