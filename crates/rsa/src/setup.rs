use num_bigint::BigUint;
use num_traits::One;
use rand::rngs::OsRng;
use setacc_core::Result;
use setacc_crypto::generate_probable_prime;

/// Public parameters of a single RSA accumulator instance: the modulus
/// `N` and generator `g`. `phi_n` is the trapdoor — Euler's totient of
/// `N` — retained only when a scheme needs it for batched updates.
#[derive(Clone)]
pub struct RsaSetup {
    pub n: BigUint,
    pub g: BigUint,
    pub phi_n: Option<BigUint>,
}

impl RsaSetup {
    /// Run a (mock) trusted setup: draw two distinct primes of
    /// `modulus_bits / 2` bits each, and form `N = p * q`. When
    /// `retain_trapdoor` is true, also compute and keep `phi(N)`.
    pub fn generate(modulus_bits: u64, retain_trapdoor: bool) -> Result<Self> {
        let mut rng = OsRng;
        let half = modulus_bits / 2;
        let mut p = generate_probable_prime(&mut rng, half)?;
        let mut q = generate_probable_prime(&mut rng, half)?;
        while p == q {
            q = generate_probable_prime(&mut rng, half)?;
        }
        if p > q {
            std::mem::swap(&mut p, &mut q);
        }

        let n = &p * &q;
        let phi_n = retain_trapdoor.then(|| (&p - BigUint::one()) * (&q - BigUint::one()));

        Ok(RsaSetup {
            n,
            g: BigUint::from(3u32),
            phi_n,
        })
    }
}
