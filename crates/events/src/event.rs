use chrono::{DateTime, Utc};

use esbank_core::AccountId;

/// A domain-agnostic event.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **versioned** (schema evolution)
/// - designed to be **append-only**
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "accounts.account.opened").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the event was captured (wall-clock time at construction).
    fn occurred_at(&self) -> DateTime<Utc>;

    /// The account stream this event belongs to.
    fn account_id(&self) -> AccountId;
}
