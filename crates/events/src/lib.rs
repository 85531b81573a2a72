//! Account event types and the generic event/envelope abstractions.

pub mod account;
pub mod envelope;
pub mod event;

pub use account::{
    AccountClosed, AccountEvent, AccountOpened, FundsDeposited, FundsTransferredOut,
    FundsWithdrawn,
};
pub use envelope::EventEnvelope;
pub use event::Event;
