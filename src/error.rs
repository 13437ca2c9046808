use thiserror::Error;

/// Errors produced while inferring a symbol ordering.
///
/// Structural defects in a candidate ordering (wrong length, duplicates,
/// foreign symbols) are never reported through this type; the validity oracle
/// answers those with a plain `false` verdict.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The key at `index` is longer than the key that follows it while the
    /// shorter key is its exact prefix. No total order can sort an extension
    /// before its own prefix, so the input contradicts itself.
    #[error("key at position {index} extends the shorter key that follows it")]
    InvalidPrefix { index: usize },

    /// The derived precedence constraints contain a cycle, so no total order
    /// satisfies them all.
    #[error("precedence constraints contain a cycle")]
    CycleDetected,
}

pub type Result<T> = std::result::Result<T, OrderError>;
