//! A sharded accumulator: the state is split across several RSA
//! accumulators by a hash of each element, and a Merkle tree over the
//! segments' digests commits to the whole.

mod proof;
mod scheme;

pub use proof::HybridProof;
pub use scheme::HybridScheme;
