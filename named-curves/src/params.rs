//! Domain parameters of the built-in curves.
//!
//! Values are big endian, exactly as published in SEC 2 and ANSI X9.62.
//! Every curve here has cofactor 1.

use hex_literal::hex;
use primegroup::{CurveParameters, Result};

/// Compiled-in curve parameters with the generator in compressed form.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CurveData {
    pub(crate) prime: &'static [u8],
    pub(crate) a: &'static [u8],
    pub(crate) b: &'static [u8],
    pub(crate) generator_x: &'static [u8],
    pub(crate) generator_y_is_odd: bool,
    pub(crate) order: &'static [u8],
}

impl CurveData {
    /// Decode into [`CurveParameters`].
    pub(crate) fn parameters(&self) -> Result<CurveParameters> {
        CurveParameters::from_be_bytes(
            self.prime,
            self.a,
            self.b,
            self.generator_x,
            self.generator_y_is_odd,
            self.order,
            1,
        )
    }
}

/// NIST P-224.
pub(crate) const NIST_P224: CurveData = CurveData {
    prime: &hex!("ffffffff ffffffff ffffffff ffffffff 00000000 00000000 00000001"),
    a: &hex!("ffffffff ffffffff ffffffff fffffffe ffffffff ffffffff fffffffe"),
    b: &hex!("b4050a85 0c04b3ab f5413256 5044b0b7 d7bfd8ba 270b3943 2355ffb4"),
    generator_x: &hex!("b70e0cbd 6bb4bf7f 321390b9 4a03c1d3 56c21122 343280d6 115c1d21"),
    generator_y_is_odd: false,
    order: &hex!("ffffffff ffffffff ffffffff ffff16a2 e0b8f03e 13dd2945 5c5c2a3d"),
};

/// NIST P-384.
pub(crate) const NIST_P384: CurveData = CurveData {
    prime: &hex!(
        "ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff fffffffe"
        "ffffffff 00000000 00000000 ffffffff"
    ),
    a: &hex!(
        "ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff fffffffe"
        "ffffffff 00000000 00000000 fffffffc"
    ),
    b: &hex!(
        "b3312fa7 e23ee7e4 988e056b e3f82d19 181d9c6e fe814112 0314088f 5013875a"
        "c656398d 8a2ed19d 2a85c8ed d3ec2aef"
    ),
    generator_x: &hex!(
        "aa87ca22 be8b0537 8eb1c71e f320ad74 6e1d3b62 8ba79b98 59f741e0 82542a38"
        "5502f25d bf55296c 3a545e38 72760ab7"
    ),
    generator_y_is_odd: true,
    order: &hex!(
        "ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff c7634d81 f4372ddf"
        "581a0db2 48b0a77a ecec196a ccc52973"
    ),
};

/// NIST P-521.
pub(crate) const NIST_P521: CurveData = CurveData {
    prime: &hex!(
        "01ff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff"
        "ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff"
        "ffffffff"
    ),
    a: &hex!(
        "01ff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff"
        "ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff"
        "fffffffc"
    ),
    b: &hex!(
        "0051 953eb961 8e1c9a1f 929a21a0 b68540ee a2da725b 99b315f3 b8b48991"
        "8ef109e1 56193951 ec7e937b 1652c0bd 3bb1bf07 3573df88 3d2c34f1 ef451fd4"
        "6b503f00"
    ),
    generator_x: &hex!(
        "c6 858e06b7 0404e9cd 9e3ecb66 2395b442 9c648139 053fb521 f828af60"
        "6b4d3dba a14b5e77 efe75928 fe1dc127 a2ffa8de 3348b3c1 856a429b f97e7e31"
        "c2e5bd66"
    ),
    generator_y_is_odd: false,
    order: &hex!(
        "01ff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff"
        "fffffffa 51868783 bf2f966b 7fcc0148 f709a5d0 3bb5c9b8 899c47ae bb6fb71e"
        "91386409"
    ),
};

/// X9.62 prime192v1, also NIST P-192.
pub(crate) const PRIME192V1: CurveData = CurveData {
    prime: &hex!("ffffffff ffffffff ffffffff fffffffe ffffffff ffffffff"),
    a: &hex!("ffffffff ffffffff ffffffff fffffffe ffffffff fffffffc"),
    b: &hex!("64210519 e59c80e7 0fa7e9ab 72243049 feb8deec c146b9b1"),
    generator_x: &hex!("188da80e b03090f6 7cbf20eb 43a18800 f4ff0afd 82ff1012"),
    generator_y_is_odd: true,
    order: &hex!("ffffffff ffffffff ffffffff 99def836 146bc9b1 b4d22831"),
};

/// X9.62 prime192v2.
pub(crate) const PRIME192V2: CurveData = CurveData {
    prime: &hex!("ffffffff ffffffff ffffffff fffffffe ffffffff ffffffff"),
    a: &hex!("ffffffff ffffffff ffffffff fffffffe ffffffff fffffffc"),
    b: &hex!("cc22d6df b95c6b25 e49c0d63 64a4e598 0c393aa2 1668d953"),
    generator_x: &hex!("eea2bae7 e1497842 f2de7769 cfe9c989 c072ad69 6f48034a"),
    generator_y_is_odd: true,
    order: &hex!("ffffffff ffffffff fffffffe 5fb1a724 dc804186 48d8dd31"),
};

/// X9.62 prime192v3.
pub(crate) const PRIME192V3: CurveData = CurveData {
    prime: &hex!("ffffffff ffffffff ffffffff fffffffe ffffffff ffffffff"),
    a: &hex!("ffffffff ffffffff ffffffff fffffffe ffffffff fffffffc"),
    b: &hex!("22123dc2 395a05ca a7423dae ccc94760 a7d46225 6bd56916"),
    generator_x: &hex!("7d297781 00c65a1d a1783716 588dce2b 8b4aee8e 228f1896"),
    generator_y_is_odd: false,
    order: &hex!("ffffffff ffffffff ffffffff 7a62d031 c83f4294 f640ec13"),
};

/// X9.62 prime239v1.
pub(crate) const PRIME239V1: CurveData = CurveData {
    prime: &hex!("7fff ffffffff ffffffff ffff7fff ffffffff 80000000 00007fff ffffffff"),
    a: &hex!("7fff ffffffff ffffffff ffff7fff ffffffff 80000000 00007fff fffffffc"),
    b: &hex!("6b01 6c3bdcf1 8941d0d6 54921475 ca71a9db 2fb27d1d 37796185 c2942c0a"),
    generator_x: &hex!("0ffa 963cdca8 816ccc33 b8642bed f905c3d3 58573d3f 27fbbd3b 3cb9aaaf"),
    generator_y_is_odd: false,
    order: &hex!("7fff ffffffff ffffffff ffff7fff ff9e5e9a 9f5d9071 fbd15226 88909d0b"),
};

/// X9.62 prime239v2.
pub(crate) const PRIME239V2: CurveData = CurveData {
    prime: &hex!("7fff ffffffff ffffffff ffff7fff ffffffff 80000000 00007fff ffffffff"),
    a: &hex!("7fff ffffffff ffffffff ffff7fff ffffffff 80000000 00007fff fffffffc"),
    b: &hex!("617f ab683257 6cbbfed5 0d99f024 9c3fee58 b94ba003 8c7ae84c 8c832f2c"),
    generator_x: &hex!("38af 09d98727 705120c9 21bb5e9e 26296a3c dcf2f357 57a0eafd 87b830e7"),
    generator_y_is_odd: false,
    order: &hex!("7fff ffffffff ffffffff ffff8000 00cfa7e8 594377d4 14c03821 bc582063"),
};

/// X9.62 prime239v3.
pub(crate) const PRIME239V3: CurveData = CurveData {
    prime: &hex!("7fff ffffffff ffffffff ffff7fff ffffffff 80000000 00007fff ffffffff"),
    a: &hex!("7fff ffffffff ffffffff ffff7fff ffffffff 80000000 00007fff fffffffc"),
    b: &hex!("2557 05fa2a30 6654b1f4 cb03d6a7 50a30c25 0102d498 8717d9ba 15ab6d3e"),
    generator_x: &hex!("6768 ae8e18bb 92cfcf00 5c949aa2 c6d94853 d0e660bb f854b1c9 505fe95a"),
    generator_y_is_odd: true,
    order: &hex!("7fff ffffffff ffffffff ffff7fff ff975deb 41b3a605 7c3c4321 46526551"),
};

/// X9.62 prime256v1, also NIST P-256.
pub(crate) const PRIME256V1: CurveData = CurveData {
    prime: &hex!("ffffffff 00000001 00000000 00000000 00000000 ffffffff ffffffff ffffffff"),
    a: &hex!("ffffffff 00000001 00000000 00000000 00000000 ffffffff ffffffff fffffffc"),
    b: &hex!("5ac635d8 aa3a93e7 b3ebbd55 769886bc 651d06b0 cc53b0f6 3bce3c3e 27d2604b"),
    generator_x: &hex!("6b17d1f2 e12c4247 f8bce6e5 63a440f2 77037d81 2deb33a0 f4a13945 d898c296"),
    generator_y_is_odd: true,
    order: &hex!("ffffffff 00000000 ffffffff ffffffff bce6faad a7179e84 f3b9cac2 fc632551"),
};
