use thiserror::Error;

/// Errors produced by an accumulator scheme.
///
/// Absent-element lookups and other benign user errors are represented as
/// `Option`/no-ops at the call site, not as variants here — this enum is
/// reserved for conditions a scheme cannot recover from on its own.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccumulatorError {
    #[error("operation not supported by this scheme: {0}")]
    UnsupportedOperation(&'static str),

    #[error("exponent has no inverse modulo the trapdoor")]
    NonInvertibleExponent,

    #[error("exhausted candidates while searching for a distinct prime")]
    DistinctPrimesExhausted,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, AccumulatorError>;
