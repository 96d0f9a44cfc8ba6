use std::collections::HashMap;

use setacc_core::{AccumulatorError, AccumulatorScheme, Element, Operation, Result, State};
use setacc_crypto::hash;
use tracing::debug;

use crate::hash::{hash_pair, merkle_leaf};
use crate::proof::MerkleProof;

const ZERO_LEAF: [u8; 32] = [0u8; 32];

/// A binary Merkle tree over a fixed set of elements, padded with
/// zero-leaves to the next power of two. An empty set has no leaves at
/// all: its root is `hash(b"")` rather than the root of a one-leaf tree
/// of zero bytes.
pub struct MerkleTree {
    levels: Vec<Vec<[u8; 32]>>,
    leaf_to_index: HashMap<Element, usize>,
    empty_root: Option<[u8; 32]>,
}

fn padded_len(n: usize) -> usize {
    if n <= 1 {
        1
    } else {
        n.next_power_of_two()
    }
}

impl MerkleTree {
    fn build_levels(leaves: Vec<[u8; 32]>) -> Vec<Vec<[u8; 32]>> {
        let mut levels = vec![leaves];
        while levels.last().unwrap().len() > 1 {
            let prev = levels.last().unwrap();
            let next = prev
                .chunks(2)
                .map(|pair| hash_pair(&pair[0], &pair[1]))
                .collect();
            levels.push(next);
        }
        levels
    }

    fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    fn recompute_from(&mut self, mut idx: usize) {
        for level in 0..self.depth() {
            let sibling_idx = idx ^ 1;
            let (left, right) = if idx % 2 == 0 {
                (self.levels[level][idx], self.levels[level][sibling_idx])
            } else {
                (self.levels[level][sibling_idx], self.levels[level][idx])
            };
            let parent_idx = idx / 2;
            let new_parent = hash_pair(&left, &right);
            if self.levels[level + 1][parent_idx] == new_parent {
                break;
            }
            self.levels[level + 1][parent_idx] = new_parent;
            idx = parent_idx;
        }
    }
}

impl AccumulatorScheme for MerkleTree {
    type Commitment = [u8; 32];
    type Proof = MerkleProof;

    fn create(state: State) -> Self {
        if state.is_empty() {
            let root = hash(b"");
            debug!(leaves = 0, root = %hex::encode(root), "built Merkle tree over the empty set");
            return MerkleTree {
                levels: Vec::new(),
                leaf_to_index: HashMap::new(),
                empty_root: Some(root),
            };
        }

        let target_len = padded_len(state.len());
        let mut leaves = vec![ZERO_LEAF; target_len];
        let mut leaf_to_index = HashMap::with_capacity(state.len());
        for (i, element) in state.into_iter().enumerate() {
            leaves[i] = merkle_leaf(&element);
            leaf_to_index.insert(element, i);
        }
        let levels = Self::build_levels(leaves);
        let tree = MerkleTree {
            levels,
            leaf_to_index,
            empty_root: None,
        };
        debug!(
            leaves = tree.levels[0].len(),
            root = %hex::encode(tree.commitment()),
            "built Merkle tree"
        );
        tree
    }

    fn commitment(&self) -> Self::Commitment {
        match self.empty_root {
            Some(root) => root,
            None => self.levels.last().unwrap()[0],
        }
    }

    fn accepts_batch(&self) -> bool {
        false
    }

    fn apply_change(&mut self, op: Operation) -> Result<()> {
        let (old, new) = match op {
            Operation::Replace { old, new } => (old, new),
            Operation::Batch { .. } => {
                return Err(AccumulatorError::UnsupportedOperation(
                    "Merkle trees only support single-element replacement",
                ))
            }
        };

        let Some(&idx) = self.leaf_to_index.get(&old) else {
            return Ok(());
        };

        self.leaf_to_index.remove(&old);
        self.leaf_to_index.insert(new.clone(), idx);
        self.levels[0][idx] = merkle_leaf(&new);
        self.recompute_from(idx);
        debug!(index = idx, new_root = %hex::encode(self.commitment()), "replaced leaf");
        Ok(())
    }

    fn prove_membership(&mut self, element: &Element) -> Option<Self::Proof> {
        let &idx = self.leaf_to_index.get(element)?;
        let mut siblings = Vec::with_capacity(self.depth());
        let mut current = idx;
        for level in 0..self.depth() {
            let sibling_idx = current ^ 1;
            siblings.push(self.levels[level][sibling_idx]);
            current /= 2;
        }
        Some(MerkleProof { index: idx, siblings })
    }

    fn verify_membership(commitment: &Self::Commitment, element: &Element, proof: &Self::Proof) -> bool {
        let mut current = merkle_leaf(element);
        let mut idx = proof.index;
        for sibling in &proof.siblings {
            current = if idx % 2 == 0 {
                hash_pair(&current, sibling)
            } else {
                hash_pair(sibling, &current)
            };
            idx /= 2;
        }
        &current == commitment
    }

    fn proof_size(proof: &Self::Proof) -> usize {
        proof.size()
    }
}
