use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use setacc_core::{AccumulatorError, Result};

use crate::hash::hash;

/// Maximum number of candidates tried before giving up on a prime of a
/// given bit length. Generous enough that failure only happens if the
/// caller passes a degenerate bit length.
const MAX_ATTEMPTS: u32 = 10_000;

const MILLER_RABIN_ROUNDS: u32 = 40;

/// Map `element` to a prime of `bit_length` bits, deterministically: the
/// same `(element, bit_length)` pair always yields the same prime. This is
/// what lets a verifier recompute an element's prime representative
/// without consulting the prover's cache.
pub fn hash_to_prime(element: &[u8], bit_length: u64) -> Result<BigUint> {
    let seed = hash(element);
    let mut rng = ChaCha20Rng::from_seed(seed);
    generate_probable_prime(&mut rng, bit_length)
}

/// Draw a probable prime of exactly `bit_length` bits from `rng`.
pub fn generate_probable_prime(rng: &mut impl RngCore, bit_length: u64) -> Result<BigUint> {
    if bit_length < 2 {
        return Err(AccumulatorError::InvalidConfig(
            "prime bit length must be at least 2".into(),
        ));
    }

    for _ in 0..MAX_ATTEMPTS {
        let mut candidate = rng.gen_biguint(bit_length);
        candidate.set_bit(bit_length - 1, true);
        candidate.set_bit(0, true);
        if is_probable_prime(&candidate, rng) {
            return Ok(candidate);
        }
    }

    Err(AccumulatorError::DistinctPrimesExhausted)
}

/// Miller-Rabin probable-primality test.
pub fn is_probable_prime(n: &BigUint, rng: &mut impl RngCore) -> bool {
    let two = BigUint::from(2u32);
    let three = BigUint::from(3u32);

    if *n < two {
        return false;
    }
    if *n == two || *n == three {
        return true;
    }
    if n.is_even() {
        return false;
    }

    for small in SMALL_PRIMES {
        let p = BigUint::from(*small as u32);
        if *n == p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
    }

    let n_minus_one = n - BigUint::one();
    let mut d = n_minus_one.clone();
    let mut r = 0u32;
    while d.is_even() {
        d >>= 1usize;
        r += 1;
    }

    'witness: for _ in 0..MILLER_RABIN_ROUNDS {
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = a.modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 0..r - 1 {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

const SMALL_PRIMES: &[u32] = &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];
