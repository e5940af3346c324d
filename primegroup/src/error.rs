//! Error types.

use core::fmt;

/// Errors raised while building or validating curve groups.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The requested curve name or identifier is not in the registry.
    UnknownCurve,

    /// No point with the requested `x`-coordinate lies on the curve.
    PointNotOnCurve,

    /// The curve is singular, or the generator, order or cofactor is invalid.
    InvalidParameters,

    /// A big integer did not fit the fixed-width integer type.
    ArithmeticFailure,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::UnknownCurve => "unknown curve",
            Error::PointNotOnCurve => "point is not on the curve",
            Error::InvalidParameters => "invalid curve parameters",
            Error::ArithmeticFailure => "big integer arithmetic failure",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
