use num_bigint::BigUint;
use num_traits::ToPrimitive;
use setacc_core::{AccumulatorError, AccumulatorScheme, DEFAULT_HYBRID_SEGMENTS, Element, Operation, Result, State};
use setacc_crypto::{bytes_to_int, hash, int_to_bytes};
use setacc_merkle::MerkleTree;
use setacc_rsa::RsaAccumulatorTrapdoored;
use tracing::debug;

use crate::proof::HybridProof;

/// Shards a set across `num_segments` RSA accumulators and commits to
/// their digests with a top-level Merkle tree. An update touches only the
/// segments its elements hash into, but the top-level tree is rebuilt from
/// all current segment digests afterward rather than point-updated, since
/// a batch can touch more than one segment at once.
pub struct HybridScheme {
    segments: Vec<RsaAccumulatorTrapdoored>,
    top: MerkleTree,
    num_segments: usize,
}

fn segment_index(element: &Element, num_segments: usize) -> usize {
    let digest = hash(element);
    let value = bytes_to_int(&digest);
    (value % BigUint::from(num_segments as u64))
        .to_usize()
        .expect("remainder modulo a usize always fits in a usize")
}

fn segment_digests(segments: &[RsaAccumulatorTrapdoored]) -> Vec<Element> {
    segments
        .iter()
        .map(|s| int_to_bytes(&s.commitment().value))
        .collect()
}

impl HybridScheme {
    pub fn create_with_segments(state: State, num_segments: usize) -> Self {
        let mut buckets: Vec<State> = vec![Vec::new(); num_segments];
        for element in state {
            let idx = segment_index(&element, num_segments);
            buckets[idx].push(element);
        }
        let segments: Vec<RsaAccumulatorTrapdoored> = buckets
            .into_iter()
            .map(RsaAccumulatorTrapdoored::create)
            .collect();
        let top = MerkleTree::create(segment_digests(&segments));
        debug!(num_segments, "sharded state into segments for hybrid scheme");
        HybridScheme {
            segments,
            top,
            num_segments,
        }
    }
}

impl AccumulatorScheme for HybridScheme {
    type Commitment = [u8; 32];
    type Proof = HybridProof;

    fn create(state: State) -> Self {
        Self::create_with_segments(state, DEFAULT_HYBRID_SEGMENTS)
    }

    fn commitment(&self) -> Self::Commitment {
        self.top.commitment()
    }

    fn accepts_batch(&self) -> bool {
        true
    }

    fn apply_change(&mut self, op: Operation) -> Result<()> {
        let (add, del) = match op {
            Operation::Batch { add, del } => (add, del),
            Operation::Replace { .. } => {
                return Err(AccumulatorError::UnsupportedOperation(
                    "the hybrid scheme only supports batched updates",
                ))
            }
        };

        let mut add_buckets: Vec<Vec<Element>> = vec![Vec::new(); self.num_segments];
        for e in add {
            let idx = segment_index(&e, self.num_segments);
            add_buckets[idx].push(e);
        }
        let mut del_buckets: Vec<Vec<Element>> = vec![Vec::new(); self.num_segments];
        for e in del {
            let idx = segment_index(&e, self.num_segments);
            del_buckets[idx].push(e);
        }

        for idx in 0..self.num_segments {
            let segment_add = std::mem::take(&mut add_buckets[idx]);
            let segment_del = std::mem::take(&mut del_buckets[idx]);
            if segment_add.is_empty() && segment_del.is_empty() {
                continue;
            }
            self.segments[idx].apply_change(Operation::Batch {
                add: segment_add,
                del: segment_del,
            })?;
        }

        self.top = MerkleTree::create(segment_digests(&self.segments));
        debug!(top_root = %hex::encode(self.top.commitment()), "rebuilt top-level tree after batch update");
        Ok(())
    }

    fn prove_membership(&mut self, element: &Element) -> Option<Self::Proof> {
        let idx = segment_index(element, self.num_segments);
        let segment_witness = self.segments[idx].prove_membership(element)?;
        let segment_commitment = self.segments[idx].commitment();
        let digest = int_to_bytes(&segment_commitment.value);
        let top_proof = self.top.prove_membership(&digest)?;
        Some(HybridProof {
            segment_commitment,
            segment_witness,
            top_proof,
        })
    }

    fn verify_membership(commitment: &Self::Commitment, element: &Element, proof: &Self::Proof) -> bool {
        if !RsaAccumulatorTrapdoored::verify_membership(&proof.segment_commitment, element, &proof.segment_witness) {
            return false;
        }
        let digest = int_to_bytes(&proof.segment_commitment.value);
        MerkleTree::verify_membership(commitment, &digest, &proof.top_proof)
    }

    fn proof_size(proof: &Self::Proof) -> usize {
        proof.size()
    }
}
