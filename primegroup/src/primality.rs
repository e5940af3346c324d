//! Probabilistic primality testing for group orders.

use crate::{PrimeField, Uint};
use bigint::Integer;

/// Miller-Rabin witnesses: the first twelve primes.
///
/// Deterministic below 3.3·10²⁴; a strong probable-prime test above that.
const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Miller-Rabin test of `n` against fixed witnesses.
///
/// Intended for vetting published domain parameters, not for adversarially
/// chosen inputs.
pub fn is_probable_prime(n: &Uint) -> bool {
    if *n == Uint::from_u8(2) || *n == Uint::from_u8(3) {
        return true;
    }

    let field = match PrimeField::new(n) {
        Ok(field) if bool::from(n.is_odd()) => field,
        _ => return false,
    };

    let n_minus_one = n.wrapping_sub(&Uint::ONE);
    let s = n_minus_one.trailing_zeros_vartime();
    let d = n_minus_one.shr_vartime(s);

    let one = field.one();
    let minus_one = -one;

    'witness: for w in WITNESSES {
        let a = field.from_u64(w);
        if bool::from(a.is_zero()) {
            continue;
        }

        let mut x = a.pow_vartime(&d);
        if x == one || x == minus_one {
            continue;
        }

        for _ in 1..s {
            x = x.square();
            if x == minus_one {
                continue 'witness;
            }
        }

        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::is_probable_prime;
    use crate::{Uint, uint_from_be_slice};
    use hex_literal::hex;

    #[test]
    fn small_numbers() {
        let primes = [2u64, 3, 5, 7, 11, 37, 41, 97, 7919];
        let composites = [0u64, 1, 4, 9, 15, 91, 561, 7917];

        for p in primes {
            assert!(is_probable_prime(&Uint::from_u64(p)), "{p}");
        }
        for c in composites {
            assert!(!is_probable_prime(&Uint::from_u64(c)), "{c}");
        }
    }

    #[test]
    fn strong_pseudoprime_to_base_two() {
        // 3215031751 = 151 · 751 · 28351
        assert!(!is_probable_prime(&Uint::from_u64(3_215_031_751)));
    }

    #[test]
    fn p256_order() {
        let n = uint_from_be_slice(&hex!(
            "ffffffff 00000000 ffffffff ffffffff bce6faad a7179e84 f3b9cac2 fc632551"
        ))
        .unwrap();
        assert!(is_probable_prime(&n));
        assert!(!is_probable_prime(&n.wrapping_add(&Uint::from_u8(2))));
    }
}
