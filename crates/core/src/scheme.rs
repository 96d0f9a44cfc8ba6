use crate::element::{Element, State};
use crate::error::Result;
use crate::operation::Operation;

/// Common contract every accumulator scheme implements.
///
/// Modeled after a narrow prover/verifier trait: a scheme commits to a
/// state, proves and verifies membership of individual elements, and
/// accepts changes to its committed set through [`Operation`]. Each scheme
/// picks its own `Commitment`/`Proof` representations since a 32-byte
/// Merkle root, a `BigUint` RSA accumulator, and a Hybrid's compound proof
/// have nothing in common structurally.
pub trait AccumulatorScheme {
    type Commitment: Clone;
    type Proof;

    /// Build a scheme instance committing to `state`.
    fn create(state: State) -> Self
    where
        Self: Sized;

    /// The scheme's current commitment to its set.
    fn commitment(&self) -> Self::Commitment;

    /// Whether this scheme accepts [`Operation::Batch`] changes. A scheme
    /// that returns `false` here only accepts `Operation::Replace`.
    fn accepts_batch(&self) -> bool;

    /// Apply a change to the committed set. Returns
    /// [`crate::error::AccumulatorError::UnsupportedOperation`] if the
    /// operation's shape doesn't match what [`Self::accepts_batch`]
    /// reports.
    fn apply_change(&mut self, op: Operation) -> Result<()>;

    /// Produce a membership proof for `element`, or `None` if it is not a
    /// member of the current set. Absence is not an error.
    fn prove_membership(&mut self, element: &Element) -> Option<Self::Proof>;

    /// Check a membership proof against `commitment`. A scheme's
    /// verification must not depend on any state private to the prover
    /// beyond what `commitment` and `element` already carry, plus whatever
    /// public setup parameters both sides share.
    fn verify_membership(
        commitment: &Self::Commitment,
        element: &Element,
        proof: &Self::Proof,
    ) -> bool;

    /// The true serialized byte length of a proof, not a placeholder.
    fn proof_size(proof: &Self::Proof) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ToySet(State);

    impl AccumulatorScheme for ToySet {
        type Commitment = usize;
        type Proof = ();

        fn create(state: State) -> Self {
            ToySet(state)
        }

        fn commitment(&self) -> Self::Commitment {
            self.0.len()
        }

        fn accepts_batch(&self) -> bool {
            false
        }

        fn apply_change(&mut self, op: Operation) -> Result<()> {
            match op {
                Operation::Replace { old, new } => {
                    if let Some(pos) = self.0.iter().position(|e| e == &old) {
                        self.0[pos] = new;
                    }
                    Ok(())
                }
                Operation::Batch { .. } => Err(
                    crate::error::AccumulatorError::UnsupportedOperation("batch"),
                ),
            }
        }

        fn prove_membership(&mut self, element: &Element) -> Option<Self::Proof> {
            self.0.contains(element).then_some(())
        }

        fn verify_membership(_commitment: &Self::Commitment, _element: &Element, _proof: &Self::Proof) -> bool {
            true
        }

        fn proof_size(_proof: &Self::Proof) -> usize {
            0
        }
    }

    #[test]
    fn toy_scheme_create_and_commitment() {
        let toy = ToySet::create(vec![vec![1], vec![2]]);
        assert_eq!(toy.commitment(), 2);
    }

    #[test]
    fn toy_scheme_rejects_batch() {
        let mut toy = ToySet::create(vec![vec![1]]);
        let err = toy
            .apply_change(Operation::Batch {
                add: vec![],
                del: vec![],
            })
            .unwrap_err();
        assert_eq!(
            err,
            crate::error::AccumulatorError::UnsupportedOperation("batch")
        );
    }

    #[test]
    fn toy_scheme_replace_updates_state() {
        let mut toy = ToySet::create(vec![vec![1]]);
        toy.apply_change(Operation::Replace {
            old: vec![1],
            new: vec![9],
        })
        .unwrap();
        assert!(toy.prove_membership(&vec![9]).is_some());
        assert!(toy.prove_membership(&vec![1]).is_none());
    }
}
