use num_bigint::BigUint;

/// An RSA accumulator's public commitment: the modulus and generator it
/// was set up with, plus its current accumulated value. Carrying `n` and
/// `g` alongside the value lets a verifier check a witness without
/// consulting the prover for anything beyond this struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaCommitment {
    pub n: BigUint,
    pub g: BigUint,
    pub value: BigUint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commitments_with_equal_fields_are_equal() {
        let a = RsaCommitment {
            n: BigUint::from(15u32),
            g: BigUint::from(3u32),
            value: BigUint::from(4u32),
        };
        let b = a.clone();
        assert_eq!(a, b);
    }
}
