//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, ownership). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed plate, oversized text field).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated (e.g. mileage regression, illegal
    /// reminder transition).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// Money arithmetic or comparison across differing currencies.
    #[error("currency mismatch: {0}")]
    CurrencyMismatch(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The entity exists but does not belong to the acting user.
    #[error("not owned: {0}")]
    NotOwned(String),

    /// The acting identity lacks rights for the operation.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// A conflict occurred (e.g. duplicate license plate or VIN).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn currency_mismatch(msg: impl Into<String>) -> Self {
        Self::CurrencyMismatch(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn not_owned(msg: impl Into<String>) -> Self {
        Self::NotOwned(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
