//! Infrastructure layer: event storage and the account repository.
//!
//! Reference implementations of the storage collaborator the domain hands its
//! log to. Everything here is in-memory.

pub mod event_store;
pub mod repository;

pub use event_store::{EventStore, EventStoreError, InMemoryEventStore, StoredEvent, UncommittedEvent};
pub use repository::{AccountRepository, RepositoryError};
