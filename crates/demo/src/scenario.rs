//! The lifecycle every account in the demo goes through.
//!
//! ```text
//! open(opening) → deposit 500 → withdraw 200 → transfer 300
//!     → withdraw remaining → close
//! ```
//!
//! Each step goes through the repository, so every event is persisted before
//! the next command runs. The account is then rebuilt from the store alone.

use esbank_accounts::{
    Account, AccountCommand, CloseAccount, DepositFunds, OpenAccount, TransferFunds,
    WithdrawFunds,
};
use esbank_core::{AccountId, DomainError, PositiveAmount, TransactionNote};
use esbank_infra::{AccountRepository, EventStore, RepositoryError};

use crate::config::DemoConfig;

/// Outcome of one scenario run.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub account_id: AccountId,
    pub destination_account_id: AccountId,
    pub event_count: usize,
    pub live: Account,
    pub rebuilt: Account,
}

impl ScenarioReport {
    pub fn replay_matches(&self) -> bool {
        self.live == self.rebuilt
    }
}

pub fn run_scenario<S>(
    repository: &AccountRepository<S>,
    config: &DemoConfig,
) -> Result<ScenarioReport, RepositoryError>
where
    S: EventStore,
{
    let opened = repository.open(OpenAccount {
        holder_name: config.holder_name.clone(),
        initial_balance: config.opening_balance,
        currency: Some(config.currency.clone()),
    })?;
    let account_id = opened.account_id();
    tracing::info!(
        %account_id,
        holder = opened.holder_name(),
        balance = %opened.balance(),
        currency = %opened.currency(),
        "account opened"
    );

    let account = repository.execute(
        account_id,
        AccountCommand::Deposit(DepositFunds {
            amount: PositiveAmount::from_whole(500),
            note: TransactionNote::new("Salary deposit")?,
        }),
    )?;
    tracing::info!(%account_id, balance = %account.balance(), "deposited 500");

    let account = repository.execute(
        account_id,
        AccountCommand::Withdraw(WithdrawFunds {
            amount: PositiveAmount::from_whole(200),
            note: TransactionNote::new("ATM withdrawal")?,
        }),
    )?;
    tracing::info!(%account_id, balance = %account.balance(), "withdrew 200");

    let destination_account_id = AccountId::new();
    let account = repository.execute(
        account_id,
        AccountCommand::Transfer(TransferFunds {
            amount: PositiveAmount::from_whole(300),
            destination_account_id,
            note: TransactionNote::new("Transfer to savings")?,
        }),
    )?;
    tracing::info!(
        %account_id,
        destination = %destination_account_id,
        balance = %account.balance(),
        "transferred 300"
    );

    let remaining = PositiveAmount::new(account.balance())?;
    let account = repository.execute(
        account_id,
        AccountCommand::Withdraw(WithdrawFunds {
            amount: remaining,
            note: TransactionNote::new("Closing balance withdrawal")?,
        }),
    )?;
    tracing::info!(
        %account_id,
        withdrawn = %remaining,
        balance = %account.balance(),
        "balance emptied"
    );

    let live = repository.execute(
        account_id,
        AccountCommand::Close(CloseAccount {
            reason: "Account holder request".to_string(),
        }),
    )?;
    tracing::info!(%account_id, status = ?live.status(), "account closed");

    let rebuilt = repository
        .load(account_id)?
        .ok_or_else(DomainError::not_found)?;

    let report = ScenarioReport {
        account_id,
        destination_account_id,
        event_count: rebuilt.events().len(),
        live,
        rebuilt,
    };

    tracing::info!(
        %account_id,
        events = report.event_count,
        balance = %report.rebuilt.balance(),
        closed = report.rebuilt.is_closed(),
        matches = report.replay_matches(),
        "account rebuilt from store"
    );
    Ok(report)
}
