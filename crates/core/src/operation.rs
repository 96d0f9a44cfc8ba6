use crate::element::Element;

/// A change to apply to an accumulator's committed set.
///
/// Schemes that only ever replace one element at a time (Merkle, Verkle)
/// accept `Replace`; schemes that can fold an arbitrary batch into a single
/// update (RSA, Hybrid) accept `Batch`. This replaces a `hasattr`-style
/// runtime capability check with a type the caller and the scheme both
/// agree on up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Replace { old: Element, new: Element },
    Batch { add: Vec<Element>, del: Vec<Element> },
}

impl Operation {
    pub fn is_replace(&self) -> bool {
        matches!(self, Operation::Replace { .. })
    }

    pub fn is_batch(&self) -> bool {
        matches!(self, Operation::Batch { .. })
    }
}
