use std::sync::Arc;

use esbank_accounts::{AccountCommand, DepositFunds, OpenAccount, TransferFunds};
use esbank_core::{
    AccountId, AggregateRoot, CurrencyCode, PositiveAmount, TransactionNote,
};
use esbank_events::AccountEvent;
use esbank_infra::{AccountRepository, EventStore, InMemoryEventStore};
use rust_decimal_macros::dec;

fn note(text: &str) -> TransactionNote {
    TransactionNote::new(text).unwrap()
}

#[test]
fn stored_stream_decodes_back_to_the_live_log() {
    let store = Arc::new(InMemoryEventStore::new());
    let repo = AccountRepository::new(store.clone());

    let opened = repo
        .open(OpenAccount {
            holder_name: "  Ada Lovelace ".to_string(),
            initial_balance: PositiveAmount::new(dec!(120.50)).unwrap(),
            currency: Some(CurrencyCode::new("GBP")),
        })
        .unwrap();
    let id = opened.account_id();

    repo.execute(
        id,
        AccountCommand::Deposit(DepositFunds {
            amount: PositiveAmount::new(dec!(9.50)).unwrap(),
            note: note("Refund"),
        }),
    )
    .unwrap();
    let live = repo
        .execute(
            id,
            AccountCommand::Transfer(TransferFunds {
                amount: PositiveAmount::new(dec!(30)).unwrap(),
                destination_account_id: AccountId::new(),
                note: note("Rent share"),
            }),
        )
        .unwrap();

    let stream = store.load_stream(id).unwrap();
    let decoded: Vec<AccountEvent> = stream
        .iter()
        .map(|stored| stored.decode::<AccountEvent>().unwrap().into_payload())
        .collect();

    assert_eq!(decoded, live.events());
    assert_eq!(stream.last().unwrap().stream_version(), live.version());

    let loaded = repo.load(id).unwrap().unwrap();
    assert_eq!(loaded, live);
    assert_eq!(loaded.holder_name(), "Ada Lovelace");
    assert_eq!(loaded.balance(), dec!(100.00));
    assert_eq!(loaded.currency().code(), "GBP");
}

#[test]
fn two_accounts_share_a_store_without_interference() {
    let repo = AccountRepository::new(InMemoryEventStore::new());
    let open = |name: &str| OpenAccount {
        holder_name: name.to_string(),
        initial_balance: PositiveAmount::from_whole(10),
        currency: None,
    };

    let a = repo.open(open("A")).unwrap().account_id();
    let b = repo.open(open("B")).unwrap().account_id();
    repo.execute(
        a,
        AccountCommand::Deposit(DepositFunds {
            amount: PositiveAmount::from_whole(5),
            note: note("top up"),
        }),
    )
    .unwrap();

    assert_eq!(repo.load(a).unwrap().unwrap().balance(), dec!(15));
    assert_eq!(repo.load(b).unwrap().unwrap().balance(), dec!(10));
    assert_eq!(repo.load(b).unwrap().unwrap().version(), 1);
}
