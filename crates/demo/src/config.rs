//! Demo inputs read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `ESBANK_DEMO_HOLDER` | `John Doe` |
//! | `ESBANK_DEMO_OPENING_BALANCE` | `1000` |
//! | `ESBANK_DEMO_CURRENCY` | `USD` |

use esbank_core::{CurrencyCode, Decimal, PositiveAmount};
use esbank_observability::ConfigError;

pub const HOLDER_VAR: &str = "ESBANK_DEMO_HOLDER";
pub const OPENING_BALANCE_VAR: &str = "ESBANK_DEMO_OPENING_BALANCE";
pub const CURRENCY_VAR: &str = "ESBANK_DEMO_CURRENCY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub holder_name: String,
    pub opening_balance: PositiveAmount,
    pub currency: CurrencyCode,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            holder_name: "John Doe".to_string(),
            opening_balance: PositiveAmount::from_whole(1_000),
            currency: CurrencyCode::USD,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(holder) = lookup(HOLDER_VAR) {
            if holder.trim().is_empty() {
                return Err(invalid(HOLDER_VAR, holder, "holder name must not be blank"));
            }
            config.holder_name = holder;
        }

        if let Some(raw) = lookup(OPENING_BALANCE_VAR) {
            let value: Decimal = raw
                .trim()
                .parse()
                .map_err(|e| invalid(OPENING_BALANCE_VAR, raw.clone(), e))?;
            config.opening_balance = PositiveAmount::new(value)
                .map_err(|e| invalid(OPENING_BALANCE_VAR, raw.clone(), e))?;
        }

        if let Some(code) = lookup(CURRENCY_VAR) {
            let code = code.trim();
            if code.is_empty() {
                return Err(invalid(CURRENCY_VAR, code, "currency code must not be blank"));
            }
            config.currency = CurrencyCode::new(code.to_ascii_uppercase());
        }

        Ok(config)
    }
}

fn invalid(var: &'static str, value: impl Into<String>, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        var,
        value: value.into(),
        reason: reason.to_string(),
    }
}
