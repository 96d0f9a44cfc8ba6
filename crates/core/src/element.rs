/// An opaque member of the accumulated set. Canonically 32 bytes (the
/// output width of the hash function schemes use internally), but nothing
/// in this crate depends on that — callers may accumulate elements of any
/// length.
pub type Element = Vec<u8>;

/// The full set an accumulator commits to, in insertion order.
pub type State = Vec<Element>;
