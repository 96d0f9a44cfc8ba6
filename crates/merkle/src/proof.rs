/// A sibling-path membership proof. Carries the leaf's index explicitly so
/// a verifier never needs to consult the prover's own index map to know
/// which path to walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleProof {
    pub index: usize,
    pub siblings: Vec<[u8; 32]>,
}

impl MerkleProof {
    /// Serialized size in bytes: one sibling hash per level. The index is
    /// out-of-band routing metadata, not proof payload.
    pub fn size(&self) -> usize {
        self.siblings.len() * 32
    }
}
