//! End-to-end account lifecycle through the public API.

use esbank_accounts::{Account, AccountStatus};
use esbank_core::{AccountId, CurrencyCode, DomainError, PositiveAmount, TransactionNote};
use esbank_events::{AccountEvent, Event};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn amount(value: Decimal) -> PositiveAmount {
    PositiveAmount::new(value).unwrap()
}

fn note(text: &str) -> TransactionNote {
    TransactionNote::new(text).unwrap()
}

#[test]
fn full_lifecycle_ends_closed_and_replays() {
    let mut account = Account::open("John Doe", amount(dec!(1000)), Some(CurrencyCode::USD)).unwrap();

    account.deposit(amount(dec!(500)), note("Salary")).unwrap();
    account.withdraw(amount(dec!(200)), note("ATM")).unwrap();
    account
        .transfer(amount(dec!(300)), AccountId::new(), note("To savings"))
        .unwrap();

    let remaining = account.balance();
    assert_eq!(remaining, dec!(1000));
    account.withdraw(amount(remaining), note("Close-out")).unwrap();
    account.close("request").unwrap();

    assert_eq!(account.balance(), Decimal::ZERO);
    assert!(account.is_closed());
    assert_eq!(account.events().len(), 6);

    let types: Vec<&str> = account.events().iter().map(Event::event_type).collect();
    assert_eq!(
        types,
        [
            "accounts.account.opened",
            "accounts.account.funds_deposited",
            "accounts.account.funds_withdrawn",
            "accounts.account.funds_transferred_out",
            "accounts.account.funds_withdrawn",
            "accounts.account.closed",
        ]
    );
    assert!(
        account
            .events()
            .iter()
            .all(|e| e.account_id() == account.account_id())
    );

    let rebuilt = Account::reconstruct(account.events().to_vec());
    assert_eq!(rebuilt.balance(), Decimal::ZERO);
    assert!(rebuilt.is_closed());
    assert_eq!(rebuilt.status(), AccountStatus::Closed);
    assert_eq!(rebuilt, account);
}

#[test]
fn insufficient_funds_keeps_single_event() {
    let mut account = Account::open("Test", amount(dec!(100)), None).unwrap();

    let err = account
        .withdraw(amount(dec!(200)), note("Overdraft attempt"))
        .unwrap_err();

    assert!(matches!(err, DomainError::InsufficientFunds { .. }));
    assert_eq!(account.balance(), dec!(100));
    assert_eq!(account.events().len(), 1);
}

#[test]
fn log_hands_off_as_json_and_rebuilds_elsewhere() {
    let mut account = Account::open("Test", amount(dec!(500)), Some(CurrencyCode::new("EUR"))).unwrap();
    account.deposit(amount(dec!(300)), note("Test deposit")).unwrap();

    let wire = serde_json::to_vec(account.events()).unwrap();
    let events: Vec<AccountEvent> = serde_json::from_slice(&wire).unwrap();
    let rebuilt = Account::reconstruct(events);

    assert_eq!(rebuilt.account_id(), account.account_id());
    assert_eq!(rebuilt.holder_name(), "Test");
    assert_eq!(rebuilt.balance(), dec!(800));
    assert_eq!(rebuilt.currency().code(), "EUR");
    assert!(!rebuilt.is_closed());
}
