use serde::{Deserialize, Serialize};

use esbank_core::{AccountId, EventId};

/// Envelope for an event, containing stream metadata.
///
/// This is the unit handed to and returned from durable storage.
///
/// Notes:
/// - **Append-only**: `sequence_number` is 1-based and monotonically increasing per stream.
/// - `payload` is either the typed event or its serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_id: EventId,
    account_id: AccountId,

    /// Position in the account stream.
    sequence_number: u64,

    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(event_id: EventId, account_id: AccountId, sequence_number: u64, payload: E) -> Self {
        Self {
            event_id,
            account_id,
            sequence_number,
            payload,
        }
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}
