use setacc_core::Element;
use setacc_crypto::hash;

/// The leaf digest for `element`.
pub fn merkle_leaf(element: &Element) -> [u8; 32] {
    hash(element)
}

/// The parent digest of two child nodes.
pub fn hash_pair(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    let mut buf = Vec::with_capacity(64);
    buf.extend_from_slice(left);
    buf.extend_from_slice(right);
    hash(&buf)
}
