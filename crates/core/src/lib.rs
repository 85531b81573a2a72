//! `esbank-core`: domain foundation building blocks.
//!
//! Value objects, identifiers, the error taxonomy and the aggregate traits.
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod aggregate;
pub mod error;
pub mod id;
pub mod value_object;

pub use aggregate::{Aggregate, AggregateRoot, ExpectedVersion};
pub use error::{DomainError, DomainResult};
pub use id::{AccountId, EventId};
pub use value_object::{CurrencyCode, PositiveAmount, TransactionNote, ValueObject};

pub use rust_decimal::Decimal;
