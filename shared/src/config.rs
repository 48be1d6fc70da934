use serde::{Deserialize, Serialize};

use crate::suggestions::SUGGESTION_LIMIT;
use crate::WidgetError;

/// Exchange rate used by the currency widget until a rate service exists.
pub const DEFAULT_CONVERSION_RATE: f64 = 0.92;
pub const DEFAULT_PLACEHOLDER_AMOUNT: f64 = 1250.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    pub code: String,
    pub symbol: String,
    pub decimals: usize,
    pub target_code: String,
    pub target_symbol: String,
    pub placeholder_amount: f64,
    pub conversion_rate: f64,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            code: "USD".to_string(),
            symbol: "$".to_string(),
            decimals: 2,
            target_code: "EUR".to_string(),
            target_symbol: "€".to_string(),
            placeholder_amount: DEFAULT_PLACEHOLDER_AMOUNT,
            conversion_rate: DEFAULT_CONVERSION_RATE,
        }
    }
}

/// Application-wide settings, provided to every widget through context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub locale: String,
    pub currency: CurrencyConfig,
    pub suggestion_limit: usize,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            currency: CurrencyConfig::default(),
            suggestion_limit: SUGGESTION_LIMIT,
            log_level: LogLevel::default(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, WidgetError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.locale, "en");
        assert_eq!(config.suggestion_limit, 3);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.currency.code, "USD");
        assert_eq!(config.currency.conversion_rate, 0.92);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(
            r#"{"log_level": "debug", "currency": {"target_code": "GBP", "target_symbol": "£"}}"#,
        )
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.currency.target_code, "GBP");
        assert_eq!(config.currency.symbol, "$");
        assert_eq!(config.currency.placeholder_amount, 1250.0);
        assert_eq!(config.locale, "en");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            AppConfig::from_json(r#"{"log_level": "loud"}"#),
            Err(WidgetError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_log_levels_are_ordered() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
    }
}
