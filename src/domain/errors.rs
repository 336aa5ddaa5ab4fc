//! Error taxonomy for the ledger core.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result alias used across the domain layer.
pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Validation and lookup failures surfaced by the domain services.
///
/// The message strings are part of the public contract; presentation
/// layers and tests match on them. None of these are retried internally,
/// and no partial state survives a failed operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Child name cannot be empty")]
    EmptyChildName,
    #[error("Amount must be greater than zero")]
    ZeroAmount,
    #[error("Amount cannot be negative")]
    NegativeAmount,
    #[error("Invalid day of week: {0}")]
    InvalidDayOfWeek(u8),
    #[error("Child with ID {0} not found")]
    ChildNotFound(String),
    #[error("Insufficient balance: cannot spend {requested} with only {available} available")]
    InsufficientBalance {
        requested: Decimal,
        available: Decimal,
    },
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<anyhow::Error> for DomainError {
    fn from(err: anyhow::Error) -> Self {
        DomainError::Storage(err.to_string())
    }
}
