use esbank_accounts::AccountStatus;
use esbank_core::{CurrencyCode, Decimal, PositiveAmount};
use esbank_demo::{DemoConfig, run_scenario};
use esbank_infra::{AccountRepository, EventStore, InMemoryEventStore};
use rust_decimal_macros::dec;

#[test]
fn default_scenario_ends_closed_and_replays_identically() {
    let repository = AccountRepository::new(InMemoryEventStore::new());

    let report = run_scenario(&repository, &DemoConfig::default()).unwrap();

    assert!(report.replay_matches());
    assert_eq!(report.event_count, 6);
    assert_eq!(report.rebuilt.balance(), Decimal::ZERO);
    assert_eq!(report.rebuilt.status(), AccountStatus::Closed);
    assert_eq!(report.rebuilt.holder_name(), "John Doe");

    let stream = repository.store().load_stream(report.account_id).unwrap();
    let types: Vec<&str> = stream.iter().map(|e| e.event_type.as_str()).collect();
    assert_eq!(
        types,
        vec![
            "accounts.account.opened",
            "accounts.account.funds_deposited",
            "accounts.account.funds_withdrawn",
            "accounts.account.funds_transferred_out",
            "accounts.account.funds_withdrawn",
            "accounts.account.closed",
        ]
    );
    assert_eq!(stream[4].payload["FundsWithdrawn"]["amount"], "1000");
}

#[test]
fn empty_opening_balance_still_completes() {
    let repository = AccountRepository::new(InMemoryEventStore::new());
    let config = DemoConfig {
        holder_name: "Zero Start".to_string(),
        opening_balance: PositiveAmount::ZERO,
        currency: CurrencyCode::new("EUR"),
    };

    let report = run_scenario(&repository, &config).unwrap();

    assert!(report.rebuilt.is_closed());
    assert_eq!(report.rebuilt.currency().code(), "EUR");
    assert_eq!(report.live.balance(), dec!(0));
}

#[test]
fn destination_account_is_never_written() {
    let repository = AccountRepository::new(InMemoryEventStore::new());

    let report = run_scenario(&repository, &DemoConfig::default()).unwrap();

    assert!(repository
        .store()
        .load_stream(report.destination_account_id)
        .unwrap()
        .is_empty());
}
