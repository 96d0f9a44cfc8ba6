use std::collections::HashSet;

use setacc_core::{AccumulatorError, AccumulatorScheme, Element, Operation, Result, State, RSA_MODULUS_BITS};
use setacc_crypto::product;
use tracing::debug;

use crate::commitment::RsaCommitment;
use crate::common::{map_to_primes, witness_exponent, PrimeCache};
use crate::proof::RsaProof;
use crate::setup::RsaSetup;
use crate::verify;

/// A dynamic RSA accumulator with no retained trapdoor. Updates recompute
/// the accumulated value from scratch over the full current set, since
/// without `phi(N)` there is no shortcut for removing an element's prime
/// factor from the exponent.
pub struct RsaAccumulator {
    setup: RsaSetup,
    state: HashSet<Element>,
    prime_cache: PrimeCache,
    accumulator: num_bigint::BigUint,
}

impl RsaAccumulator {
    fn recompute(&mut self) -> Result<()> {
        let elements: Vec<Element> = self.state.iter().cloned().collect();
        let primes = map_to_primes(&mut self.prime_cache, &elements)?;
        let exponent = product(&primes);
        self.accumulator = self.setup.g.modpow(&exponent, &self.setup.n);
        debug!(state_size = elements.len(), "recomputed trapdoor-free accumulator from scratch");
        Ok(())
    }
}

impl AccumulatorScheme for RsaAccumulator {
    type Commitment = RsaCommitment;
    type Proof = RsaProof;

    fn create(state: State) -> Self {
        let setup = RsaSetup::generate(RSA_MODULUS_BITS, false)
            .expect("prime generation at this bit length is practically infallible");
        let mut prime_cache = PrimeCache::new();
        let primes = map_to_primes(&mut prime_cache, &state)
            .expect("prime search should not exhaust candidates at this bit length");
        let exponent = product(&primes);
        let accumulator = setup.g.modpow(&exponent, &setup.n);
        RsaAccumulator {
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
                    "the trapdoor-free RSA accumulator only supports batched updates",
                ))
            }
        };

        for e in del {
            self.state.remove(&e);
            self.prime_cache.remove(&e);
        }
        for e in add {
            self.state.insert(e);
        }
        self.recompute()?;
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
        (0..n).map(|i| vec![i as u8, 1, 2, 3]).collect()
    }

    #[test]
    fn membership_proof_round_trips() {
        let mut acc = RsaAccumulator::create(small_state(5));
        let commitment = acc.commitment();
        let proof = acc.prove_membership(&vec![2u8, 1, 2, 3]).unwrap();
        assert!(RsaAccumulator::verify_membership(
            &commitment,
            &vec![2u8, 1, 2, 3],
            &proof
        ));
    }

    #[test]
    fn absent_element_has_no_proof() {
        let mut acc = RsaAccumulator::create(small_state(3));
        assert!(acc.prove_membership(&vec![99u8]).is_none());
    }

    #[test]
    fn batch_add_changes_commitment_and_is_provable() {
        let mut acc = RsaAccumulator::create(small_state(3));
        acc.apply_change(Operation::Batch {
            add: vec![vec![50u8]],
            del: vec![],
        })
        .unwrap();
        let commitment = acc.commitment();
        let proof = acc.prove_membership(&vec![50u8]).unwrap();
        assert!(RsaAccumulator::verify_membership(&commitment, &vec![50u8], &proof));
    }

    #[test]
    fn batch_delete_removes_membership() {
        let mut acc = RsaAccumulator::create(small_state(3));
        let removed = vec![0u8, 1, 2, 3];
        acc.apply_change(Operation::Batch {
            add: vec![],
            del: vec![removed.clone()],
        })
        .unwrap();
        assert!(acc.prove_membership(&removed).is_none());
    }

    #[test]
    fn replace_operation_is_rejected() {
        let mut acc = RsaAccumulator::create(small_state(2));
        let err = acc
            .apply_change(Operation::Replace {
                old: vec![0u8, 1, 2, 3],
                new: vec![9u8],
            })
            .unwrap_err();
        assert_eq!(
            err,
            AccumulatorError::UnsupportedOperation(
                "the trapdoor-free RSA accumulator only supports batched updates"
            )
        );
    }

    #[test]
    fn proof_size_matches_modulus_width() {
        let mut acc = RsaAccumulator::create(small_state(2));
        let proof = acc.prove_membership(&vec![0u8, 1, 2, 3]).unwrap();
        assert_eq!(RsaAccumulator::proof_size(&proof), proof.size());
    }
}
