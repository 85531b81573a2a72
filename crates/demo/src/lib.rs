//! Scripted end-to-end walk through an account's lifecycle.

pub mod config;
pub mod scenario;

pub use config::DemoConfig;
pub use scenario::{ScenarioReport, run_scenario};
