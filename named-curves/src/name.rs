//! Symbolic curve names.

use crate::nid;
use core::{fmt, str::FromStr};
use primegroup::{Error, Nid, Result};

/// Curves known to the registry.
///
/// Discriminants are stable and may be used as compact numeric identifiers
/// via [`TryFrom<u32>`].
#[derive(Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u32)]
pub enum CurveName {
    /// No curve: looking it up yields no group and no error.
    #[default]
    NoCurve = 0,

    /// NIST P-192 (a.k.a. secp192r1), same parameters as prime192v1.
    NistP192 = 1,

    /// NIST P-224 (a.k.a. secp224r1).
    NistP224 = 2,

    /// NIST P-256 (a.k.a. secp256r1), same parameters as prime256v1.
    NistP256 = 3,

    /// NIST P-384 (a.k.a. secp384r1).
    NistP384 = 4,

    /// NIST P-521 (a.k.a. secp521r1).
    NistP521 = 5,

    /// ANSI X9.62 prime192v1.
    X962Prime192v1 = 6,

    /// ANSI X9.62 prime192v2.
    X962Prime192v2 = 7,

    /// ANSI X9.62 prime192v3.
    X962Prime192v3 = 8,

    /// ANSI X9.62 prime239v1.
    X962Prime239v1 = 9,

    /// ANSI X9.62 prime239v2.
    X962Prime239v2 = 10,

    /// ANSI X9.62 prime239v3.
    X962Prime239v3 = 11,

    /// ANSI X9.62 prime256v1.
    X962Prime256v1 = 12,
}

impl CurveName {
    /// Every curve name except [`CurveName::NoCurve`].
    pub const ALL: [CurveName; 12] = [
        Self::NistP192,
        Self::NistP224,
        Self::NistP256,
        Self::NistP384,
        Self::NistP521,
        Self::X962Prime192v1,
        Self::X962Prime192v2,
        Self::X962Prime192v3,
        Self::X962Prime239v1,
        Self::X962Prime239v2,
        Self::X962Prime239v3,
        Self::X962Prime256v1,
    ];

    /// Object identifier attached to groups built from this name.
    ///
    /// P-224, P-384 and P-521 have no X9.62 identifier and are left untagged.
    pub const fn nid(self) -> Option<Nid> {
        match self {
            Self::NistP192 | Self::X962Prime192v1 => Some(nid::X9_62_PRIME192V1),
            Self::X962Prime192v2 => Some(nid::X9_62_PRIME192V2),
            Self::X962Prime192v3 => Some(nid::X9_62_PRIME192V3),
            Self::X962Prime239v1 => Some(nid::X9_62_PRIME239V1),
            Self::X962Prime239v2 => Some(nid::X9_62_PRIME239V2),
            Self::X962Prime239v3 => Some(nid::X9_62_PRIME239V3),
            Self::NistP256 | Self::X962Prime256v1 => Some(nid::X9_62_PRIME256V1),
            Self::NoCurve | Self::NistP224 | Self::NistP384 | Self::NistP521 => None,
        }
    }

    /// Conventional short name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoCurve => "none",
            Self::NistP192 => "P-192",
            Self::NistP224 => "P-224",
            Self::NistP256 => "P-256",
            Self::NistP384 => "P-384",
            Self::NistP521 => "P-521",
            Self::X962Prime192v1 => "prime192v1",
            Self::X962Prime192v2 => "prime192v2",
            Self::X962Prime192v3 => "prime192v3",
            Self::X962Prime239v1 => "prime239v1",
            Self::X962Prime239v2 => "prime239v2",
            Self::X962Prime239v3 => "prime239v3",
            Self::X962Prime256v1 => "prime256v1",
        }
    }
}

impl fmt::Display for CurveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u32> for CurveName {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        if value == Self::NoCurve as u32 {
            return Ok(Self::NoCurve);
        }

        Self::ALL
            .into_iter()
            .find(|name| *name as u32 == value)
            .ok_or(Error::UnknownCurve)
    }
}

impl From<CurveName> for u32 {
    fn from(name: CurveName) -> u32 {
        name as u32
    }
}

impl FromStr for CurveName {
    type Err = Error;

    /// Parse a short name or SEC alias, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        const SEC_ALIASES: [(&str, CurveName); 5] = [
            ("secp192r1", CurveName::NistP192),
            ("secp224r1", CurveName::NistP224),
            ("secp256r1", CurveName::NistP256),
            ("secp384r1", CurveName::NistP384),
            ("secp521r1", CurveName::NistP521),
        ];

        if s.eq_ignore_ascii_case(Self::NoCurve.as_str()) {
            return Ok(Self::NoCurve);
        }

        Self::ALL
            .into_iter()
            .map(|name| (name.as_str(), name))
            .chain(SEC_ALIASES)
            .find(|(alias, _)| s.eq_ignore_ascii_case(alias))
            .map(|(_, name)| name)
            .ok_or(Error::UnknownCurve)
    }
}
