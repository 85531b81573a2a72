//! Tracing/logging setup shared by binaries.

pub mod config;
pub mod subscriber;

pub use config::{ConfigError, LogConfig, LogFormat};

/// Initialize process-wide tracing from the environment.
///
/// Falls back to the defaults if the environment holds an invalid value.
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    match LogConfig::from_env() {
        Ok(config) => subscriber::init_with(&config),
        Err(err) => {
            subscriber::init_with(&LogConfig::default());
            tracing::warn!(error = %err, "invalid logging configuration; using defaults");
        }
    }
}

/// Initialize process-wide tracing with an explicit configuration.
pub fn init_with(config: &LogConfig) {
    subscriber::init_with(config);
}
