//! Domain error model.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures of domain rules. Messages are written to be shown to an operator
/// as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Required input missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// A value is present but breaks a rule (e.g. a negative weight).
    #[error("{0}")]
    InvariantViolation(String),

    #[error("invalid product id: {0}")]
    InvalidId(String),

    /// No record carries the requested id.
    #[error("record not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
