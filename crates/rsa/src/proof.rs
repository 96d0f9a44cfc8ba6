use num_bigint::BigUint;

/// A membership witness together with the modulus width it was produced
/// under, so its serialized size can be computed without re-consulting the
/// scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaProof {
    pub witness: BigUint,
    pub modulus_bits: u64,
}

impl RsaProof {
    /// Serialized size in bytes: a witness is always reduced modulo `N`,
    /// so it fits in `N`'s byte width regardless of its numeric value.
    pub fn size(&self) -> usize {
        ((self.modulus_bits + 7) / 8) as usize
    }
}
