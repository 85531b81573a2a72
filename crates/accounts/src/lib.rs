//! Account domain module (event-sourced).
//!
//! This crate contains the account state machine, implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod account;

pub use account::{
    Account, AccountCommand, AccountStatus, CloseAccount, DepositFunds, OpenAccount,
    TransferFunds, WithdrawFunds,
};
