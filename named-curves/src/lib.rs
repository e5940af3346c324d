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

pub mod nid;

mod name;
mod params;

pub use crate::name::CurveName;
pub use primegroup::{self, CurveGroup, Error, Nid, Result};

use crate::params::CurveData;

/// Compiled-in parameters for `name`, or `None` for [`CurveName::NoCurve`].
fn curve_data(name: CurveName) -> Option<&'static CurveData> {
    let data = match name {
        CurveName::NoCurve => return None,
        CurveName::NistP192 | CurveName::X962Prime192v1 => &params::PRIME192V1,
        CurveName::NistP224 => &params::NIST_P224,
        CurveName::NistP256 | CurveName::X962Prime256v1 => &params::PRIME256V1,
        CurveName::NistP384 => &params::NIST_P384,
        CurveName::NistP521 => &params::NIST_P521,
        CurveName::X962Prime192v2 => &params::PRIME192V2,
        CurveName::X962Prime192v3 => &params::PRIME192V3,
        CurveName::X962Prime239v1 => &params::PRIME239V1,
        CurveName::X962Prime239v2 => &params::PRIME239V2,
        CurveName::X962Prime239v3 => &params::PRIME239V3,
    };

    Some(data)
}

/// Build a fresh group for a named curve.
///
/// Returns `Ok(None)` for [`CurveName::NoCurve`]. Groups for curves with an
/// X9.62 object identifier are tagged with it; see [`CurveName::nid`].
///
/// # Example
///
/// ```
/// use named_curves::{CurveName, group_by_name};
///
/// let group = group_by_name(CurveName::NistP256)?.expect("P-256 is built in");
/// assert_eq!(group.degree(), 256);
/// assert_eq!(group.nid(), Some(named_curves::nid::X9_62_PRIME256V1));
/// # Ok::<(), named_curves::Error>(())
/// ```
pub fn group_by_name(name: CurveName) -> Result<Option<CurveGroup>> {
    log::trace!("building group for {name}");

    let Some(data) = curve_data(name) else {
        return Ok(None);
    };

    let mut group = CurveGroup::from_parameters(&data.parameters()?)?;
    if let Some(nid) = name.nid() {
        group.set_nid(nid);
    }

    Ok(Some(group))
}

/// X9.62 curve name registered under `nid`, if any.
fn x962_name(nid: Nid) -> Option<CurveName> {
    let name = match nid {
        nid::X9_62_PRIME192V1 => CurveName::X962Prime192v1,
        nid::X9_62_PRIME192V2 => CurveName::X962Prime192v2,
        nid::X9_62_PRIME192V3 => CurveName::X962Prime192v3,
        nid::X9_62_PRIME239V1 => CurveName::X962Prime239v1,
        nid::X9_62_PRIME239V2 => CurveName::X962Prime239v2,
        nid::X9_62_PRIME239V3 => CurveName::X962Prime239v3,
        nid::X9_62_PRIME256V1 => CurveName::X962Prime256v1,
        _ => return None,
    };

    Some(name)
}

/// Map an object identifier to the X9.62 curve carrying it.
///
/// The candidate group is constructed and its tag compared against `nid`.
/// Unknown identifiers and groups that fail to build both yield
/// [`CurveName::NoCurve`].
pub fn nid_to_name(nid: Nid) -> CurveName {
    let Some(name) = x962_name(nid) else {
        log::debug!("no curve registered for NID {nid}");
        return CurveName::NoCurve;
    };

    match group_by_name(name) {
        Ok(Some(group)) if group.nid() == Some(nid) => name,
        other => {
            log::debug!("NID {nid} does not round-trip through {name}: {other:?}");
            CurveName::NoCurve
        }
    }
}

/// Build a fresh group for an X9.62 object identifier.
pub fn group_by_nid(nid: Nid) -> Result<CurveGroup> {
    let name = x962_name(nid).ok_or(Error::UnknownCurve)?;
    group_by_name(name)?.ok_or(Error::UnknownCurve)
}

/// Object identifier a group was tagged with.
pub fn group_to_nid(group: &CurveGroup) -> Option<Nid> {
    group.nid()
}

/// Find the named curve whose parameters match `group`, ignoring tags.
///
/// Curves registered under two names report the NIST name.
pub fn group_to_name(group: &CurveGroup) -> CurveName {
    for name in CurveName::ALL {
        match group_by_name(name) {
            Ok(Some(candidate)) if candidate == *group => return name,
            Ok(_) => (),
            Err(err) => log::debug!("skipping {name}: {err}"),
        }
    }

    CurveName::NoCurve
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_curve_has_no_data() {
        assert!(curve_data(CurveName::NoCurve).is_none());
        for name in CurveName::ALL {
            assert!(curve_data(name).is_some(), "{name}");
        }
    }

    #[test]
    fn aliases_share_tables() {
        let nist = curve_data(CurveName::NistP256).unwrap();
        let x962 = curve_data(CurveName::X962Prime256v1).unwrap();
        assert_eq!(nist.b, x962.b);
        assert_eq!(nist.generator_x, x962.generator_x);
        assert_eq!(nist.order, x962.order);
    }

    #[test]
    fn x962_names_cover_every_tag() {
        for name in CurveName::ALL {
            if let Some(nid) = name.nid() {
                assert_eq!(x962_name(nid).and_then(CurveName::nid), Some(nid));
            }
        }
        assert_eq!(x962_name(Nid(0)), None);
    }
}
