use serde::{Deserialize, Serialize};

use esbank_core::{
    AccountId, Aggregate, AggregateRoot, CurrencyCode, Decimal, DomainError, DomainResult,
    PositiveAmount, TransactionNote,
};
use esbank_events::{
    AccountClosed, AccountEvent, AccountOpened, Event, FundsDeposited, FundsTransferredOut,
    FundsWithdrawn,
};

/// Lifecycle state of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// No event folded yet.
    Uninitialized,
    Active,
    /// Terminal.
    Closed,
}

/// Aggregate root: Account.
///
/// State is never set directly; it is derived by folding events. Every folded
/// event is appended to the owned log, which is only exposed read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    holder_name: String,
    balance: Decimal,
    currency: CurrencyCode,
    status: AccountStatus,
    events: Vec<AccountEvent>,
}

impl Account {
    fn empty() -> Self {
        Self {
            id: AccountId::nil(),
            holder_name: String::new(),
            balance: Decimal::ZERO,
            currency: CurrencyCode::USD,
            status: AccountStatus::Uninitialized,
            events: Vec::new(),
        }
    }

    /// Open a new account under a freshly generated identifier.
    ///
    /// `currency` defaults to USD.
    pub fn open(
        holder_name: impl Into<String>,
        initial_balance: PositiveAmount,
        currency: Option<CurrencyCode>,
    ) -> DomainResult<Self> {
        Self::create(OpenAccount {
            holder_name: holder_name.into(),
            initial_balance,
            currency,
        })
    }

    /// Open a new account from an `OpenAccount` command.
    pub fn create(command: OpenAccount) -> DomainResult<Self> {
        let mut account = Self::empty();
        account.execute(AccountCommand::Open(command))?;
        Ok(account)
    }

    /// Rebuild an account by folding `events` in order, starting from nothing.
    ///
    /// No guard runs here. The resulting log is exactly the input sequence.
    pub fn reconstruct(events: impl IntoIterator<Item = AccountEvent>) -> Self {
        let mut account = Self::empty();
        for event in events {
            account.fold(&event);
            account.events.push(event);
        }
        account
    }

    pub fn deposit(&mut self, amount: PositiveAmount, note: TransactionNote) -> DomainResult<()> {
        self.execute(AccountCommand::Deposit(DepositFunds { amount, note }))
    }

    pub fn withdraw(&mut self, amount: PositiveAmount, note: TransactionNote) -> DomainResult<()> {
        self.execute(AccountCommand::Withdraw(WithdrawFunds { amount, note }))
    }

    /// Debit this account in favour of `destination_account_id`.
    ///
    /// The destination is a pass-through identifier; nothing is credited.
    pub fn transfer(
        &mut self,
        amount: PositiveAmount,
        destination_account_id: AccountId,
        note: TransactionNote,
    ) -> DomainResult<()> {
        self.execute(AccountCommand::Transfer(TransferFunds {
            amount,
            destination_account_id,
            note,
        }))
    }

    pub fn close(&mut self, reason: impl Into<String>) -> DomainResult<()> {
        self.execute(AccountCommand::Close(CloseAccount {
            reason: reason.into(),
        }))
    }

    /// Run a command: check guards, then fold and record the resulting event.
    ///
    /// On error nothing changes.
    pub fn execute(&mut self, command: AccountCommand) -> DomainResult<()> {
        let events = match self.handle(&command) {
            Ok(events) => events,
            Err(err) => {
                tracing::debug!(
                    account_id = %self.id,
                    command = command.name(),
                    error = %err,
                    "command rejected"
                );
                return Err(err);
            }
        };

        for event in &events {
            self.apply(event);
            tracing::debug!(
                account_id = %self.id,
                event_type = event.event_type(),
                version = self.version(),
                "event recorded"
            );
        }
        Ok(())
    }

    pub fn account_id(&self) -> AccountId {
        self.id
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    pub fn status(&self) -> AccountStatus {
        self.status
    }

    pub fn is_closed(&self) -> bool {
        self.status == AccountStatus::Closed
    }

    /// The full ordered event log.
    pub fn events(&self) -> &[AccountEvent] {
        &self.events
    }

    /// Events recorded after the given version (empty if `version` is at or past the end).
    pub fn events_since(&self, version: u64) -> &[AccountEvent] {
        usize::try_from(version)
            .ok()
            .and_then(|start| self.events.get(start..))
            .unwrap_or(&[])
    }

    pub fn into_events(self) -> Vec<AccountEvent> {
        self.events
    }

    fn fold(&mut self, event: &AccountEvent) {
        match event {
            AccountEvent::AccountOpened(e) => {
                self.id = e.account_id;
                self.holder_name = e.holder_name.clone();
                self.balance = e.initial_balance.value();
                self.currency = e.currency.clone();
                self.status = AccountStatus::Active;
            }
            AccountEvent::FundsDeposited(e) => {
                self.balance += e.amount.value();
            }
            AccountEvent::FundsWithdrawn(e) => {
                self.balance -= e.amount.value();
            }
            AccountEvent::FundsTransferredOut(e) => {
                self.balance -= e.amount.value();
            }
            AccountEvent::AccountClosed(_) => {
                self.status = AccountStatus::Closed;
            }
        }
    }
}

impl AggregateRoot for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.events.len() as u64
    }
}

/// Command: OpenAccount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenAccount {
    pub holder_name: String,
    pub initial_balance: PositiveAmount,
    pub currency: Option<CurrencyCode>,
}

/// Command: DepositFunds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositFunds {
    pub amount: PositiveAmount,
    pub note: TransactionNote,
}

/// Command: WithdrawFunds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawFunds {
    pub amount: PositiveAmount,
    pub note: TransactionNote,
}

/// Command: TransferFunds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferFunds {
    pub amount: PositiveAmount,
    pub destination_account_id: AccountId,
    pub note: TransactionNote,
}

/// Command: CloseAccount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseAccount {
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountCommand {
    Open(OpenAccount),
    Deposit(DepositFunds),
    Withdraw(WithdrawFunds),
    Transfer(TransferFunds),
    Close(CloseAccount),
}

impl AccountCommand {
    pub fn name(&self) -> &'static str {
        match self {
            AccountCommand::Open(_) => "open",
            AccountCommand::Deposit(_) => "deposit",
            AccountCommand::Withdraw(_) => "withdraw",
            AccountCommand::Transfer(_) => "transfer",
            AccountCommand::Close(_) => "close",
        }
    }
}

impl Aggregate for Account {
    type Command = AccountCommand;
    type Event = AccountEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        self.fold(event);
        self.events.push(event.clone());
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            AccountCommand::Open(cmd) => self.handle_open(cmd),
            AccountCommand::Deposit(cmd) => self.handle_deposit(cmd),
            AccountCommand::Withdraw(cmd) => self.handle_withdraw(cmd),
            AccountCommand::Transfer(cmd) => self.handle_transfer(cmd),
            AccountCommand::Close(cmd) => self.handle_close(cmd),
        }
    }
}

impl Account {
    fn ensure_active(&self) -> Result<(), DomainError> {
        match self.status {
            AccountStatus::Active => Ok(()),
            AccountStatus::Closed => Err(DomainError::AccountClosed),
            AccountStatus::Uninitialized => Err(DomainError::not_found()),
        }
    }

    fn ensure_covers(&self, amount: PositiveAmount) -> Result<(), DomainError> {
        if self.balance < amount.value() {
            return Err(DomainError::insufficient_funds(amount.value(), self.balance));
        }
        Ok(())
    }

    fn handle_open(&self, cmd: &OpenAccount) -> Result<Vec<AccountEvent>, DomainError> {
        if self.status != AccountStatus::Uninitialized {
            return Err(DomainError::conflict("account already opened"));
        }

        let holder_name = cmd.holder_name.trim();
        if holder_name.is_empty() {
            return Err(DomainError::invalid_argument(
                "account holder name cannot be empty",
            ));
        }

        Ok(vec![
            AccountOpened::new(
                AccountId::new(),
                holder_name,
                cmd.initial_balance,
                cmd.currency.clone().unwrap_or_default(),
            )
            .into(),
        ])
    }

    fn handle_deposit(&self, cmd: &DepositFunds) -> Result<Vec<AccountEvent>, DomainError> {
        self.ensure_active()?;

        if self.balance.checked_add(cmd.amount.value()).is_none() {
            return Err(DomainError::validation(format!(
                "deposit of {} would overflow the balance of {}",
                cmd.amount, self.balance
            )));
        }

        Ok(vec![
            FundsDeposited::new(self.id, cmd.amount, cmd.note.clone()).into(),
        ])
    }

    fn handle_withdraw(&self, cmd: &WithdrawFunds) -> Result<Vec<AccountEvent>, DomainError> {
        self.ensure_active()?;
        self.ensure_covers(cmd.amount)?;

        Ok(vec![
            FundsWithdrawn::new(self.id, cmd.amount, cmd.note.clone()).into(),
        ])
    }

    fn handle_transfer(&self, cmd: &TransferFunds) -> Result<Vec<AccountEvent>, DomainError> {
        self.ensure_active()?;
        self.ensure_covers(cmd.amount)?;

        Ok(vec![
            FundsTransferredOut::new(
                self.id,
                cmd.amount,
                cmd.destination_account_id,
                cmd.note.clone(),
            )
            .into(),
        ])
    }

    fn handle_close(&self, cmd: &CloseAccount) -> Result<Vec<AccountEvent>, DomainError> {
        self.ensure_active()?;

        if !self.balance.is_zero() {
            return Err(DomainError::NonZeroBalance(self.balance));
        }

        let reason = cmd.reason.trim();
        if reason.is_empty() {
            return Err(DomainError::invalid_argument(
                "closure reason must be provided",
            ));
        }

        Ok(vec![AccountClosed::new(self.id, reason).into()])
    }
}
