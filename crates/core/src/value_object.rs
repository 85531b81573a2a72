//! Value objects: equality by value, not identity.
//!
//! The constructors here are the only validation boundary for primitive input.
//! Once a value object exists it is known-good, so commands and events that
//! carry one never re-check it. Conversions are explicit (constructor in,
//! accessor out); serde decoding goes through the same constructors.

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values: two
/// instances holding the same value are interchangeable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// A non-negative decimal quantity of money.
///
/// Zero is accepted (an account may be opened empty).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct PositiveAmount(Decimal);

impl PositiveAmount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value < Decimal::ZERO {
            return Err(DomainError::validation(format!(
                "amount must not be negative (got {value})"
            )));
        }
        Ok(Self(value))
    }

    /// A whole number of currency units; never fails.
    pub fn from_whole(units: u32) -> Self {
        Self(Decimal::from(units))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl ValueObject for PositiveAmount {}

impl TryFrom<Decimal> for PositiveAmount {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PositiveAmount> for Decimal {
    fn from(value: PositiveAmount) -> Self {
        value.0
    }
}

impl core::fmt::Display for PositiveAmount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Free-text description attached to a money movement.
///
/// Blank notes are rejected. The text is stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TransactionNote(String);

impl TransactionNote {
    pub fn new(text: impl Into<String>) -> DomainResult<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::validation("transaction note cannot be empty"));
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for TransactionNote {}

impl TryFrom<String> for TransactionNote {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TransactionNote> for String {
    fn from(value: TransactionNote) -> Self {
        value.0
    }
}

impl core::fmt::Display for TransactionNote {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// ISO-4217 style currency code (e.g. "USD").
///
/// Only equality is meaningful; the code is not checked against a registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(Cow<'static, str>);

impl CurrencyCode {
    pub const USD: Self = Self(Cow::Borrowed("USD"));

    pub fn new(code: impl Into<String>) -> Self {
        Self(Cow::Owned(code.into()))
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::USD
    }
}

impl ValueObject for CurrencyCode {}

impl core::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amount_accepts_zero_and_positive_values() {
        for value in [dec!(0), dec!(0.01), dec!(1), dec!(1000000)] {
            assert_eq!(PositiveAmount::new(value).unwrap().value(), value);
        }
        assert_eq!(PositiveAmount::from_whole(0), PositiveAmount::ZERO);
        assert_eq!(PositiveAmount::from_whole(500).value(), dec!(500));
    }

    #[test]
    fn amount_rejects_negative_values() {
        for value in [dec!(-0.01), dec!(-1), dec!(-1000000)] {
            match PositiveAmount::new(value) {
                Err(DomainError::Validation(msg)) => assert!(msg.contains("negative")),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn amount_decoding_runs_the_constructor() {
        let ok: PositiveAmount = serde_json::from_str("\"12.50\"").unwrap();
        assert_eq!(ok.value(), dec!(12.50));

        let err = serde_json::from_str::<PositiveAmount>("\"-3\"").unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn note_rejects_blank_text() {
        for text in ["", " ", "\t\n"] {
            assert!(matches!(
                TransactionNote::new(text),
                Err(DomainError::Validation(_))
            ));
        }
        assert!(serde_json::from_str::<TransactionNote>("\"  \"").is_err());
    }

    #[test]
    fn note_keeps_text_verbatim() {
        let note = TransactionNote::new("  Salary ").unwrap();
        assert_eq!(note.as_str(), "  Salary ");
        assert_eq!(String::from(note), "  Salary ");
    }

    #[test]
    fn currency_compares_by_code() {
        assert_eq!(CurrencyCode::USD.code(), "USD");
        assert_eq!(CurrencyCode::new("USD"), CurrencyCode::USD);
        assert_ne!(CurrencyCode::new("EUR"), CurrencyCode::USD);
        assert_eq!(CurrencyCode::default(), CurrencyCode::USD);
    }

    #[test]
    fn currency_serializes_as_plain_string() {
        let json = serde_json::to_string(&CurrencyCode::new("GBP")).unwrap();
        assert_eq!(json, "\"GBP\"");
        let back: CurrencyCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back.code(), "GBP");
    }

    proptest! {
        #[test]
        fn amount_sign_decides_validity(units in -1_000_000_000i64..1_000_000_000i64, scale in 0u32..6) {
            let value = Decimal::new(units, scale);
            let result = PositiveAmount::new(value);
            prop_assert_eq!(result.is_ok(), units >= 0);
        }
    }
}
