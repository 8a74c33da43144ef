//! Domain error model.

use thiserror::Error;

/// Result type used at the edges of the domain (construction, configuration).
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The tick rules themselves are total and never produce one of these; only
/// checked construction and caller-side configuration do.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}
