use num_bigint::BigUint;
use setacc_core::{Element, PRIME_BITS};
use setacc_crypto::hash_to_prime;

/// Check that `witness^prime(element) == accumulator (mod n)`.
///
/// This is a pure function of its arguments: it recomputes `element`'s
/// prime representative itself rather than trusting a cached value from
/// whoever produced the witness, so it never depends on prover-internal
/// state.
pub fn verify(n: &BigUint, accumulator: &BigUint, element: &Element, witness: &BigUint) -> bool {
    match hash_to_prime(element, PRIME_BITS) {
        Ok(prime) => &witness.modpow(&prime, n) == accumulator,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::RsaSetup;
    use num_traits::One;

    #[test]
    fn verify_accepts_a_correctly_constructed_witness() {
        let setup = RsaSetup::generate(256, false).unwrap();
        let element = vec![7u8, 7, 7];
        let prime = hash_to_prime(&element, PRIME_BITS).unwrap();
        let accumulator = setup.g.modpow(&prime, &setup.n);
        let witness = &setup.g % &setup.n;
        assert!(verify(&setup.n, &accumulator, &element, &witness));
    }

    #[test]
    fn verify_rejects_witness_for_wrong_element() {
        let setup = RsaSetup::generate(256, false).unwrap();
        let element = vec![7u8];
        let other = vec![8u8];
        let prime = hash_to_prime(&element, PRIME_BITS).unwrap();
        let accumulator = setup.g.modpow(&prime, &setup.n);
        let witness = BigUint::one();
        assert!(!verify(&setup.n, &accumulator, &other, &witness));
    }
}
