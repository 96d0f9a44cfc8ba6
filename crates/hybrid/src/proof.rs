use setacc_merkle::MerkleProof;
use setacc_rsa::{RsaCommitment, RsaProof};

/// A Hybrid membership proof: the segment's own commitment (so the
/// segment witness can be checked against it directly) plus the segment's
/// membership witness and the top-level Merkle proof that the segment's
/// digest is one of the committed segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HybridProof {
    pub segment_commitment: RsaCommitment,
    pub segment_witness: RsaProof,
    pub top_proof: MerkleProof,
}

impl HybridProof {
    pub fn size(&self) -> usize {
        self.segment_witness.size() + self.top_proof.size() + self.segment_commitment.value.to_bytes_be().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn size_sums_its_three_components() {
        let proof = HybridProof {
            segment_commitment: RsaCommitment {
                n: BigUint::from(15u32),
                g: BigUint::from(3u32),
                value: BigUint::from(4u32),
            },
            segment_witness: RsaProof {
                witness: BigUint::from(1u32),
                modulus_bits: 256,
            },
            top_proof: MerkleProof {
                index: 0,
                siblings: vec![[0u8; 32]; 2],
            },
        };
        assert_eq!(proof.size(), 32 + 64 + 1);
    }
}
