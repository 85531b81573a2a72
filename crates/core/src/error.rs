//! Domain error model.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic business failure detected at the guard that
/// was violated. A command that returns one of these left the account untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value type was constructed from an out-of-range primitive.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A command carried well-typed but semantically empty input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A mutating command was issued after the account was closed.
    #[error("account is closed")]
    AccountClosed,

    /// A debit exceeds the current balance.
    #[error("insufficient funds (requested: {requested}, available: {available})")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// Closing requires a balance of exactly zero.
    #[error("cannot close account with non-zero balance: {0}")]
    NonZeroBalance(Decimal),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The account has not been opened yet.
    #[error("account not found")]
    NotFound,

    /// The command conflicts with the account's lifecycle (e.g. opening twice).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn insufficient_funds(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn messages_name_the_violated_constraint() {
        assert_eq!(
            DomainError::validation("amount cannot be negative").to_string(),
            "validation failed: amount cannot be negative"
        );
        assert_eq!(
            DomainError::insufficient_funds(dec!(200), dec!(100)).to_string(),
            "insufficient funds (requested: 200, available: 100)"
        );
        assert_eq!(
            DomainError::NonZeroBalance(dec!(12.50)).to_string(),
            "cannot close account with non-zero balance: 12.50"
        );
    }
}
