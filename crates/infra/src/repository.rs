//! Account repository: the persistence handoff for the account aggregate.
//!
//! ```text
//! load:    store.load_stream → decode payloads → Account::reconstruct
//! save:    account.events_since(persisted) → encode → store.append(Exact(persisted))
//! execute: load → Account::execute(command) → save
//! ```
//!
//! The aggregate itself stays pure; this module is the only place where its
//! log meets a store.

use thiserror::Error;

use esbank_accounts::{Account, AccountCommand, OpenAccount};
use esbank_core::{AccountId, AggregateRoot, DomainError, EventId, ExpectedVersion};
use esbank_events::{AccountEvent, EventEnvelope};

use crate::event_store::{EventStore, EventStoreError, StoredEvent, UncommittedEvent};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The command was rejected by the aggregate.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Loading, encoding or appending failed.
    #[error(transparent)]
    Store(#[from] EventStoreError),
}

/// Loads and saves accounts as event streams in an `EventStore`.
#[derive(Debug)]
pub struct AccountRepository<S> {
    store: S,
}

impl<S> AccountRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S> AccountRepository<S>
where
    S: EventStore,
{
    /// Rebuild an account from its stored stream.
    ///
    /// Returns `None` if nothing was ever recorded for `account_id`.
    pub fn load(&self, account_id: AccountId) -> Result<Option<Account>, RepositoryError> {
        let stored = self.store.load_stream(account_id)?;
        if stored.is_empty() {
            return Ok(None);
        }

        let envelopes = stored
            .iter()
            .map(StoredEvent::decode::<AccountEvent>)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(%account_id, events = envelopes.len(), "account loaded");

        Ok(Some(Account::reconstruct(
            envelopes.into_iter().map(EventEnvelope::into_payload),
        )))
    }

    /// Append every event recorded after `persisted_version`.
    ///
    /// `persisted_version` is the version the account had when it was loaded
    /// (0 for a freshly opened account). The append fails with a concurrency
    /// error if the stream has moved on since.
    pub fn save(
        &self,
        account: &Account,
        persisted_version: u64,
    ) -> Result<Vec<StoredEvent>, RepositoryError> {
        let pending = account
            .events_since(persisted_version)
            .iter()
            .map(|event| UncommittedEvent::from_typed(EventId::new(), event))
            .collect::<Result<Vec<_>, _>>()?;

        if pending.is_empty() {
            return Ok(vec![]);
        }

        let committed = self
            .store
            .append(pending, ExpectedVersion::Exact(persisted_version))?;

        tracing::debug!(
            account_id = %account.account_id(),
            from = persisted_version,
            to = account.version(),
            "account saved"
        );

        Ok(committed)
    }

    /// Open a new account and persist its opening event.
    pub fn open(&self, command: OpenAccount) -> Result<Account, RepositoryError> {
        let account = Account::create(command)?;
        self.save(&account, 0)?;
        Ok(account)
    }

    /// Run a command against a stored account and persist the resulting event.
    ///
    /// A missing stream is reported as `DomainError::NotFound`.
    pub fn execute(
        &self,
        account_id: AccountId,
        command: AccountCommand,
    ) -> Result<Account, RepositoryError> {
        let mut account = self
            .load(account_id)?
            .ok_or_else(DomainError::not_found)?;
        let persisted_version = account.version();

        account.execute(command)?;
        self.save(&account, persisted_version)?;

        Ok(account)
    }
}
