use std::collections::HashMap;

use num_bigint::{BigInt, BigUint, ToBigInt};
use num_integer::Integer;
use num_traits::{One, Signed};
use setacc_core::{AccumulatorError, Element, PRIME_BITS};
use setacc_crypto::{hash_to_prime, product};

pub type PrimeCache = HashMap<Element, BigUint>;

/// Map every element in `elements` to its prime representative, reusing
/// `cache` for elements already seen and filling in the rest. Propagates
/// [`AccumulatorError::DistinctPrimesExhausted`] rather than panicking, so
/// a `Result`-returning caller (e.g. `apply_change`) can surface it.
pub fn map_to_primes(cache: &mut PrimeCache, elements: &[Element]) -> Result<Vec<BigUint>, AccumulatorError> {
    elements
        .iter()
        .map(|e| {
            if let Some(prime) = cache.get(e) {
                return Ok(prime.clone());
            }
            let prime = hash_to_prime(e, PRIME_BITS)?;
            cache.insert(e.clone(), prime.clone());
            Ok(prime)
        })
        .collect()
}

/// The product of the prime representatives of every element in `state`
/// except `target`, or `None` if `target` is not present.
pub fn witness_exponent(cache: &mut PrimeCache, state: &[Element], target: &Element) -> Option<BigUint> {
    if !state.iter().any(|e| e == target) {
        return None;
    }
    let others: Vec<Element> = state.iter().filter(|e| *e != target).cloned().collect();
    let primes = map_to_primes(cache, &others)
        .expect("prime search should not exhaust candidates at this bit length");
    Some(product(&primes))
}

/// The modular inverse of `a` modulo `modulus`, or `None` if `a` shares a
/// factor with `modulus` (it has no inverse).
pub fn mod_inverse(a: &BigUint, modulus: &BigUint) -> Option<BigUint> {
    let a_int = a.to_bigint().unwrap();
    let m_int = modulus.to_bigint().unwrap();
    let egcd = a_int.extended_gcd(&m_int);
    if egcd.gcd != BigInt::one() {
        return None;
    }
    let mut x = egcd.x % &m_int;
    if x.is_negative() {
        x += &m_int;
    }
    x.to_biguint()
}
