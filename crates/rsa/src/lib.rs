//! RSA-based dynamic set accumulators: a trapdoor-free variant that
//! recomputes its value from scratch on every update, and a trapdoored
//! variant that folds batched updates in directly via a modular inverse.

mod accumulator;
mod commitment;
mod common;
mod proof;
mod setup;
mod trapdoored;
mod verify;

pub use accumulator::RsaAccumulator;
pub use commitment::RsaCommitment;
pub use common::{map_to_primes, mod_inverse, witness_exponent, PrimeCache};
pub use proof::RsaProof;
pub use setup::RsaSetup;
pub use trapdoored::RsaAccumulatorTrapdoored;
pub use verify::verify;
