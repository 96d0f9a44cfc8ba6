//! Shared types every accumulator scheme and the benchmark runner build on.

mod constants;
mod element;
mod error;
mod operation;
mod scheme;

pub use constants::{DEFAULT_HYBRID_SEGMENTS, PRIME_BITS, RSA_MODULUS_BITS};
pub use element::{Element, State};
pub use error::{AccumulatorError, Result};
pub use operation::Operation;
pub use scheme::AccumulatorScheme;
