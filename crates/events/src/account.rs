//! Facts recorded against a single account stream.
//!
//! Payload values arrive already validated (value objects); constructing an
//! event never fails. Each constructor stamps `occurred_at` from the wall clock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use esbank_core::{AccountId, CurrencyCode, PositiveAmount, TransactionNote};

use crate::event::Event;

/// Event: AccountOpened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountOpened {
    pub account_id: AccountId,
    pub holder_name: String,
    pub initial_balance: PositiveAmount,
    pub currency: CurrencyCode,
    pub occurred_at: DateTime<Utc>,
}

impl AccountOpened {
    pub fn new(
        account_id: AccountId,
        holder_name: impl Into<String>,
        initial_balance: PositiveAmount,
        currency: CurrencyCode,
    ) -> Self {
        Self {
            account_id,
            holder_name: holder_name.into(),
            initial_balance,
            currency,
            occurred_at: Utc::now(),
        }
    }
}

/// Event: FundsDeposited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundsDeposited {
    pub account_id: AccountId,
    pub amount: PositiveAmount,
    pub note: TransactionNote,
    pub occurred_at: DateTime<Utc>,
}

impl FundsDeposited {
    pub fn new(account_id: AccountId, amount: PositiveAmount, note: TransactionNote) -> Self {
        Self {
            account_id,
            amount,
            note,
            occurred_at: Utc::now(),
        }
    }
}

/// Event: FundsWithdrawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundsWithdrawn {
    pub account_id: AccountId,
    pub amount: PositiveAmount,
    pub note: TransactionNote,
    pub occurred_at: DateTime<Utc>,
}

impl FundsWithdrawn {
    pub fn new(account_id: AccountId, amount: PositiveAmount, note: TransactionNote) -> Self {
        Self {
            account_id,
            amount,
            note,
            occurred_at: Utc::now(),
        }
    }
}

/// Event: FundsTransferredOut.
///
/// Records the debit side only. No matching credit is recorded against
/// `destination_account_id` by this stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundsTransferredOut {
    pub account_id: AccountId,
    pub amount: PositiveAmount,
    pub destination_account_id: AccountId,
    pub note: TransactionNote,
    pub occurred_at: DateTime<Utc>,
}

impl FundsTransferredOut {
    pub fn new(
        account_id: AccountId,
        amount: PositiveAmount,
        destination_account_id: AccountId,
        note: TransactionNote,
    ) -> Self {
        Self {
            account_id,
            amount,
            destination_account_id,
            note,
            occurred_at: Utc::now(),
        }
    }
}

/// Event: AccountClosed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountClosed {
    pub account_id: AccountId,
    pub reason: String,
    pub occurred_at: DateTime<Utc>,
}

impl AccountClosed {
    pub fn new(account_id: AccountId, reason: impl Into<String>) -> Self {
        Self {
            account_id,
            reason: reason.into(),
            occurred_at: Utc::now(),
        }
    }
}

/// Closed set of account events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountEvent {
    AccountOpened(AccountOpened),
    FundsDeposited(FundsDeposited),
    FundsWithdrawn(FundsWithdrawn),
    FundsTransferredOut(FundsTransferredOut),
    AccountClosed(AccountClosed),
}

impl Event for AccountEvent {
    fn event_type(&self) -> &'static str {
        match self {
            AccountEvent::AccountOpened(_) => "accounts.account.opened",
            AccountEvent::FundsDeposited(_) => "accounts.account.funds_deposited",
            AccountEvent::FundsWithdrawn(_) => "accounts.account.funds_withdrawn",
            AccountEvent::FundsTransferredOut(_) => "accounts.account.funds_transferred_out",
            AccountEvent::AccountClosed(_) => "accounts.account.closed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            AccountEvent::AccountOpened(e) => e.occurred_at,
            AccountEvent::FundsDeposited(e) => e.occurred_at,
            AccountEvent::FundsWithdrawn(e) => e.occurred_at,
            AccountEvent::FundsTransferredOut(e) => e.occurred_at,
            AccountEvent::AccountClosed(e) => e.occurred_at,
        }
    }

    fn account_id(&self) -> AccountId {
        match self {
            AccountEvent::AccountOpened(e) => e.account_id,
            AccountEvent::FundsDeposited(e) => e.account_id,
            AccountEvent::FundsWithdrawn(e) => e.account_id,
            AccountEvent::FundsTransferredOut(e) => e.account_id,
            AccountEvent::AccountClosed(e) => e.account_id,
        }
    }
}

macro_rules! impl_from_variant {
    ($variant:ident) => {
        impl From<$variant> for AccountEvent {
            fn from(value: $variant) -> Self {
                AccountEvent::$variant(value)
            }
        }
    };
}

impl_from_variant!(AccountOpened);
impl_from_variant!(FundsDeposited);
impl_from_variant!(FundsWithdrawn);
impl_from_variant!(FundsTransferredOut);
impl_from_variant!(AccountClosed);
