/// Bit length of the RSA trusted-setup modulus `N`.
pub const RSA_MODULUS_BITS: u64 = 2048;

/// Bit length used when searching for a prime representative of an
/// element.
pub const PRIME_BITS: u64 = 128;

/// Default number of segments the hybrid scheme shards its state into.
pub const DEFAULT_HYBRID_SEGMENTS: usize = 16;
