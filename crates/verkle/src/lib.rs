//! An interface-conformant stand-in for a Verkle tree. There is no real
//! polynomial commitment here: `create` returns a fixed placeholder
//! commitment, `verify_membership` always succeeds, and the first
//! construction logs a warning so the benchmark's numbers for this scheme
//! aren't mistaken for a real one.

use std::sync::Once;

use setacc_core::{AccumulatorScheme, Element, Operation, Result, State};
use tracing::warn;

static MOCK_NOTICE: Once = Once::new();

const PLACEHOLDER_COMMITMENT: [u8; 32] = [0xAA; 32];
const PLACEHOLDER_PROOF_SIZE: usize = 200;

fn warn_once_about_mock() {
    MOCK_NOTICE.call_once(|| {
        warn!("VerkleTree is a mocked placeholder: it does not perform any real polynomial commitment");
    });
}

pub struct VerkleTree {
    state: State,
}

impl AccumulatorScheme for VerkleTree {
    type Commitment = [u8; 32];
    type Proof = ();

    fn create(state: State) -> Self {
        warn_once_about_mock();
        VerkleTree { state }
    }

    fn commitment(&self) -> Self::Commitment {
        PLACEHOLDER_COMMITMENT
    }

    fn accepts_batch(&self) -> bool {
        false
    }

    fn apply_change(&mut self, op: Operation) -> Result<()> {
        match op {
            Operation::Replace { old, new } => {
                if let Some(pos) = self.state.iter().position(|e| e == &old) {
                    self.state[pos] = new;
                }
                Ok(())
            }
            Operation::Batch { .. } => Err(setacc_core::AccumulatorError::UnsupportedOperation(
                "the Verkle stub only supports single-element replacement",
            )),
        }
    }

    fn prove_membership(&mut self, _element: &Element) -> Option<Self::Proof> {
        Some(())
    }

    fn verify_membership(_commitment: &Self::Commitment, _element: &Element, _proof: &Self::Proof) -> bool {
        true
    }

    fn proof_size(_proof: &Self::Proof) -> usize {
        PLACEHOLDER_PROOF_SIZE
    }
}
