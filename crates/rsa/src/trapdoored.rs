use std::collections::HashSet;

use num_bigint::BigUint;
use setacc_core::{AccumulatorError, AccumulatorScheme, Element, Operation, Result, State, RSA_MODULUS_BITS};
use setacc_crypto::product;
use tracing::debug;

use crate::commitment::RsaCommitment;
use crate::common::{map_to_primes, mod_inverse, witness_exponent, PrimeCache};
use crate::proof::RsaProof;
use crate::setup::RsaSetup;
use crate::verify;

/// A dynamic RSA accumulator that retains `phi(N)`, the trapdoor, so a
/// batch of additions and deletions can be folded into the accumulated
/// value directly rather than recomputed from scratch: additions raise the
/// value to the product of the added primes, deletions raise it to the
/// modular inverse (mod `phi(N)`) of the product of the deleted primes.
pub struct RsaAccumulatorTrapdoored {
    setup: RsaSetup,
    state: HashSet<Element>,
    prime_cache: PrimeCache,
    accumulator: BigUint,
}

impl AccumulatorScheme for RsaAccumulatorTrapdoored {
    type Commitment = RsaCommitment;
    type Proof = RsaProof;

    fn create(state: State) -> Self {
        let setup = RsaSetup::generate(RSA_MODULUS_BITS, true)
            .expect("prime generation at this bit length is practically infallible");
        let mut prime_cache = PrimeCache::new();
        let primes = map_to_primes(&mut prime_cache, &state)
            .expect("prime search should not exhaust candidates at this bit length");
        let exponent = product(&primes);
        let accumulator = setup.g.modpow(&exponent, &setup.n);
        RsaAccumulatorTrapdoored {
            setup,
            state: state.into_iter().collect(),
            prime_cache,
            accumulator,
        }
    }

    fn commitment(&self) -> Self::Commitment {
        RsaCommitment {
            n: self.setup.n.clone(),
            g: self.setup.g.clone(),
            value: self.accumulator.clone(),
        }
    }

    fn accepts_batch(&self) -> bool {
        true
    }

    fn apply_change(&mut self, op: Operation) -> Result<()> {
        let (add, del) = match op {
            Operation::Batch { add, del } => (add, del),
            Operation::Replace { .. } => {
                return Err(AccumulatorError::UnsupportedOperation(
                    "the trapdoored RSA accumulator only supports batched updates",
                ))
            }
        };

        let phi_n = self
            .setup
            .phi_n
            .clone()
            .expect("a trapdoored accumulator always retains phi(n)");

        // Deleting an element never added is a silent no-op: only fold primes
        // already on record, never mint a fresh one for a deletion target.
        let del: Vec<Element> = del
            .into_iter()
            .filter(|e| self.prime_cache.contains_key(e))
            .collect();

        if !del.is_empty() {
            let primes: Vec<BigUint> = del
                .iter()
                .map(|e| self.prime_cache.get(e).expect("filtered above").clone())
                .collect();
            let exponent = product(&primes);
            let inverse = mod_inverse(&exponent, &phi_n).ok_or(AccumulatorError::NonInvertibleExponent)?;
            self.accumulator = self.accumulator.modpow(&inverse, &self.setup.n);
            for e in &del {
                self.state.remove(e);
                self.prime_cache.remove(e);
            }
            debug!(count = del.len(), "folded deletions into accumulator via trapdoor");
        }

        if !add.is_empty() {
            let primes = map_to_primes(&mut self.prime_cache, &add)?;
            let exponent = product(&primes);
            self.accumulator = self.accumulator.modpow(&exponent, &self.setup.n);
            for e in add {
                self.state.insert(e);
            }
        }

        Ok(())
    }

    fn prove_membership(&mut self, element: &Element) -> Option<Self::Proof> {
        let state: Vec<Element> = self.state.iter().cloned().collect();
        let exponent = witness_exponent(&mut self.prime_cache, &state, element)?;
        let witness = self.setup.g.modpow(&exponent, &self.setup.n);
        Some(RsaProof {
            witness,
            modulus_bits: self.setup.n.bits(),
        })
    }

    fn verify_membership(commitment: &Self::Commitment, element: &Element, proof: &Self::Proof) -> bool {
        verify::verify(&commitment.n, &commitment.value, element, &proof.witness)
    }

    fn proof_size(proof: &Self::Proof) -> usize {
        proof.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_state(n: usize) -> State {
        (0..n).map(|i| vec![i as u8, 7, 7, 7]).collect()
    }

    #[test]
    fn membership_proof_round_trips() {
        let mut acc = RsaAccumulatorTrapdoored::create(small_state(5));
        let commitment = acc.commitment();
        let proof = acc.prove_membership(&vec![2u8, 7, 7, 7]).unwrap();
        assert!(RsaAccumulatorTrapdoored::verify_membership(
            &commitment,
            &vec![2u8, 7, 7, 7],
            &proof
        ));
    }

    #[test]
    fn batched_add_and_delete_in_one_operation() {
        let mut acc = RsaAccumulatorTrapdoored::create(small_state(3));
        let removed = vec![0u8, 7, 7, 7];
        acc.apply_change(Operation::Batch {
            add: vec![vec![77u8]],
            del: vec![removed.clone()],
        })
        .unwrap();

        assert!(acc.prove_membership(&removed).is_none());
        let commitment = acc.commitment();
        let proof = acc.prove_membership(&vec![77u8]).unwrap();
        assert!(RsaAccumulatorTrapdoored::verify_membership(&commitment, &vec![77u8], &proof));
    }

    #[test]
    fn unaffected_elements_remain_provable_after_batch_update() {
        let mut acc = RsaAccumulatorTrapdoored::create(small_state(4));
        acc.apply_change(Operation::Batch {
            add: vec![vec![200u8]],
            del: vec![vec![1u8, 7, 7, 7]],
        })
        .unwrap();

        let commitment = acc.commitment();
        let proof = acc.prove_membership(&vec![2u8, 7, 7, 7]).unwrap();
        assert!(RsaAccumulatorTrapdoored::verify_membership(
            &commitment,
            &vec![2u8, 7, 7, 7],
            &proof
        ));
    }

    #[test]
    fn replace_operation_is_rejected() {
        let mut acc = RsaAccumulatorTrapdoored::create(small_state(2));
        let err = acc
            .apply_change(Operation::Replace {
                old: vec![0u8, 7, 7, 7],
                new: vec![9u8],
            })
            .unwrap_err();
        assert_eq!(
            err,
            AccumulatorError::UnsupportedOperation(
                "the trapdoored RSA accumulator only supports batched updates"
            )
        );
    }
}
