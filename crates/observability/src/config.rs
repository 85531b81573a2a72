//! Logging configuration read from the environment.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `RUST_LOG` | filter directives | `info` |
//! | `ESBANK_LOG_FORMAT` | `json` or `text` | `json` |

use core::str::FromStr;

use thiserror::Error;

pub const FILTER_VAR: &str = "RUST_LOG";
pub const FORMAT_VAR: &str = "ESBANK_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Output encoding of log lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" => Ok(LogFormat::Text),
            other => Err(format!("unknown log format '{other}', expected json or text")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(filter) = lookup(FILTER_VAR).filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }

        if let Some(raw) = lookup(FORMAT_VAR) {
            config.format = raw.parse().map_err(|reason| ConfigError::InvalidValue {
                var: FORMAT_VAR,
                value: raw.clone(),
                reason,
            })?;
        }

        Ok(config)
    }
}
