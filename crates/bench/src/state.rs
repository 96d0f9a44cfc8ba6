use rand::rngs::OsRng;
use rand::RngCore;
use setacc_core::{Element, State};

/// `n` independent, uniformly random 32-byte elements.
pub fn generate_random_state(n: usize) -> State {
    let mut rng = OsRng;
    (0..n).map(|_| random_element(&mut rng)).collect()
}

pub(crate) fn random_element(rng: &mut impl RngCore) -> Element {
    let mut bytes = [0u8; 32];
    rng.fill_bytes(&mut bytes);
    bytes.to_vec()
}
