use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

use esbank_core::{AccountId, EventId, ExpectedVersion};
use esbank_events::{Event, EventEnvelope};
use std::sync::Arc;

/// An event ready to be appended to a stream (not yet assigned a sequence number).
///
/// Events go through this lifecycle:
///
/// 1. **Domain event**: produced by the aggregate's `handle()` and folded by `apply()`
/// 2. **UncommittedEvent**: serialized payload plus stream metadata
/// 3. **StoredEvent**: persisted with an assigned `sequence_number`
/// 4. **EventEnvelope**: decoded back into a typed payload for replay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UncommittedEvent {
    pub event_id: EventId,
    pub account_id: AccountId,

    pub event_type: String,
    pub event_version: u32,
    pub occurred_at: DateTime<Utc>,

    pub payload: JsonValue,
}

/// A stored event in an append-only stream (assigned a sequence number).
///
/// Sequence numbers are assigned by the store during append and are 1-based,
/// gap-free and scoped to one account stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEvent {
    pub event_id: EventId,
    pub account_id: AccountId,

    /// Position in the account stream.
    pub sequence_number: u64,

    pub event_type: String,
    pub event_version: u32,
    pub occurred_at: DateTime<Utc>,

    pub payload: JsonValue,
}

impl StoredEvent {
    pub fn stream_version(&self) -> u64 {
        self.sequence_number
    }

    /// Decode the payload into the typed event `E`.
    pub fn decode<E>(&self) -> Result<EventEnvelope<E>, EventStoreError>
    where
        E: DeserializeOwned,
    {
        let payload = E::deserialize(&self.payload).map_err(|e| {
            EventStoreError::Decode(format!(
                "{} at sequence {}: {e}",
                self.event_type, self.sequence_number
            ))
        })?;

        Ok(EventEnvelope::new(
            self.event_id,
            self.account_id,
            self.sequence_number,
            payload,
        ))
    }
}

/// Event store operation error.
///
/// These are **infrastructure errors** (storage, concurrency, encoding) as
/// opposed to domain errors (validation, invariants).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventStoreError {
    #[error("optimistic concurrency check failed: {0}")]
    Concurrency(String),

    #[error("invalid append: {0}")]
    InvalidAppend(String),

    #[error("payload serialization failed: {0}")]
    Serialization(String),

    #[error("payload decoding failed: {0}")]
    Decode(String),

    #[error("event store unavailable: {0}")]
    Unavailable(String),
}

/// Append-only event store, one stream per account.
///
/// ## Append Semantics
///
/// `append()`:
/// - Validates stream scoping (all events must target the same account)
/// - Checks optimistic concurrency (version must match expected)
/// - Assigns sequence numbers (starting at current_version + 1)
/// - Persists events atomically (all or nothing)
///
/// ## Load Semantics
///
/// `load_stream()`:
/// - Returns all events for the account in sequence number order
/// - Returns an empty vector if the stream does not exist
pub trait EventStore: Send + Sync {
    /// Append events to an account stream (append-only).
    fn append(
        &self,
        events: Vec<UncommittedEvent>,
        expected_version: ExpectedVersion,
    ) -> Result<Vec<StoredEvent>, EventStoreError>;

    /// Load the full stream for an account.
    fn load_stream(&self, account_id: AccountId) -> Result<Vec<StoredEvent>, EventStoreError>;
}

impl<S> EventStore for Arc<S>
where
    S: EventStore + ?Sized,
{
    fn append(
        &self,
        events: Vec<UncommittedEvent>,
        expected_version: ExpectedVersion,
    ) -> Result<Vec<StoredEvent>, EventStoreError> {
        (**self).append(events, expected_version)
    }

    fn load_stream(&self, account_id: AccountId) -> Result<Vec<StoredEvent>, EventStoreError> {
        (**self).load_stream(account_id)
    }
}

impl UncommittedEvent {
    /// Build an uncommitted record from a typed domain event.
    ///
    /// Captures the metadata needed to decode the payload later.
    pub fn from_typed<E>(event_id: EventId, event: &E) -> Result<Self, EventStoreError>
    where
        E: Event + Serialize,
    {
        let payload = serde_json::to_value(event)
            .map_err(|e| EventStoreError::Serialization(e.to_string()))?;

        Ok(Self {
            event_id,
            account_id: event.account_id(),
            event_type: event.event_type().to_string(),
            event_version: event.version(),
            occurred_at: event.occurred_at(),
            payload,
        })
    }
}
