//! ANSI X9.62 prime-curve object identifiers.
//!
//! Values match the numeric identifiers assigned by OpenSSL's object table.

use primegroup::Nid;

/// `prime192v1`, OID 1.2.840.10045.3.1.1.
pub const X9_62_PRIME192V1: Nid = Nid(409);

/// `prime192v2`, OID 1.2.840.10045.3.1.2.
pub const X9_62_PRIME192V2: Nid = Nid(410);

/// `prime192v3`, OID 1.2.840.10045.3.1.3.
pub const X9_62_PRIME192V3: Nid = Nid(411);

/// `prime239v1`, OID 1.2.840.10045.3.1.4.
pub const X9_62_PRIME239V1: Nid = Nid(412);

/// `prime239v2`, OID 1.2.840.10045.3.1.5.
pub const X9_62_PRIME239V2: Nid = Nid(413);

/// `prime239v3`, OID 1.2.840.10045.3.1.6.
pub const X9_62_PRIME239V3: Nid = Nid(414);

/// `prime256v1`, OID 1.2.840.10045.3.1.7.
pub const X9_62_PRIME256V1: Nid = Nid(415);
