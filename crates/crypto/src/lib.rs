//! Hashing, integer encoding, and prime-representative primitives shared by
//! every accumulator scheme.

mod bigint;
mod hash;
mod primes;
mod product;

pub use bigint::{bytes_to_int, int_to_bytes};
pub use hash::hash;
pub use primes::{generate_probable_prime, hash_to_prime, is_probable_prime};
pub use product::product;
