//! Service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ORDER_SERVICE_CHANNEL_BUFFER` - Mailbox size of each resource actor (default: 32)
//! - `ORDER_SERVICE_LINE_PRICING` - `unit` or `extended` (default: unit)

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_CHANNEL_BUFFER: usize = 32;

const CHANNEL_BUFFER_VAR: &str = "ORDER_SERVICE_CHANNEL_BUFFER";
const LINE_PRICING_VAR: &str = "ORDER_SERVICE_LINE_PRICING";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// What the `price` of an order line holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinePricing {
    /// The product's unit price.
    #[default]
    Unit,
    /// Unit price multiplied by the ordered quantity.
    Extended,
}

impl FromStr for LinePricing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unit" => Ok(Self::Unit),
            "extended" => Ok(Self::Extended),
            other => Err(format!("expected `unit` or `extended`, got `{other}`")),
        }
    }
}

impl Display for LinePricing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unit => write!(f, "unit"),
            Self::Extended => write!(f, "extended"),
        }
    }
}

/// Order service configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Capacity of each actor's request channel
    pub channel_buffer: usize,
    /// Pricing applied to order lines
    pub line_pricing: LinePricing,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
            line_pricing: LinePricing::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a value that does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let channel_buffer = match lookup(CHANNEL_BUFFER_VAR) {
            Some(raw) => parse_channel_buffer(&raw)?,
            None => DEFAULT_CHANNEL_BUFFER,
        };
        let line_pricing = match lookup(LINE_PRICING_VAR) {
            Some(raw) => raw
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar(LINE_PRICING_VAR.to_string(), e))?,
            None => LinePricing::default(),
        };

        Ok(Self {
            channel_buffer,
            line_pricing,
        })
    }
}

/// A zero-capacity channel would make tokio panic, so zero is rejected here.
fn parse_channel_buffer(raw: &str) -> Result<usize, ConfigError> {
    let invalid = |msg: String| ConfigError::InvalidEnvVar(CHANNEL_BUFFER_VAR.to_string(), msg);
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(invalid("must be greater than zero".to_string())),
        Ok(n) => Ok(n),
        Err(e) => Err(invalid(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ServiceConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServiceConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(load(&[]).unwrap(), ServiceConfig::default());
        assert_eq!(ServiceConfig::default().channel_buffer, 32);
        assert_eq!(ServiceConfig::default().line_pricing, LinePricing::Unit);
    }

    #[test]
    fn test_reads_both_variables() {
        let config = load(&[
            ("ORDER_SERVICE_CHANNEL_BUFFER", "128"),
            ("ORDER_SERVICE_LINE_PRICING", "Extended"),
        ])
        .unwrap();
        assert_eq!(config.channel_buffer, 128);
        assert_eq!(config.line_pricing, LinePricing::Extended);
    }

    #[test]
    fn test_rejects_zero_buffer() {
        let err = load(&[("ORDER_SERVICE_CHANNEL_BUFFER", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(var, _) if var == "ORDER_SERVICE_CHANNEL_BUFFER"));
    }

    #[test]
    fn test_rejects_non_numeric_buffer() {
        assert!(load(&[("ORDER_SERVICE_CHANNEL_BUFFER", "lots")]).is_err());
    }

    #[test]
    fn test_rejects_unknown_pricing() {
        let err = load(&[("ORDER_SERVICE_LINE_PRICING", "wholesale")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnvVar(
                "ORDER_SERVICE_LINE_PRICING".to_string(),
                "expected `unit` or `extended`, got `wholesale`".to_string()
            )
        );
    }

    #[test]
    fn test_line_pricing_serde_names() {
        assert_eq!(
            serde_json::to_string(&LinePricing::Extended).unwrap(),
            "\"extended\""
        );
        let parsed: LinePricing = serde_json::from_str("\"unit\"").unwrap();
        assert_eq!(parsed, LinePricing::Unit);
    }
}
