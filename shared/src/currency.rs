use crate::config::CurrencyConfig;

/// Formats amounts as `$1,234.56` style strings.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormatter {
    pub symbol: String,
    pub decimals: usize,
}

impl CurrencyFormatter {
    pub fn new(symbol: impl Into<String>, decimals: usize) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
        }
    }

    pub fn source(config: &CurrencyConfig) -> Self {
        Self::new(config.symbol.clone(), config.decimals)
    }

    pub fn target(config: &CurrencyConfig) -> Self {
        Self::new(config.target_symbol.clone(), config.decimals)
    }

    pub fn format(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return format!("{}--", self.symbol);
        }

        let fixed = format!("{:.*}", self.decimals, amount.abs());
        let (whole, fraction) = match fixed.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        // "-0.00" reads badly; only show the sign when something is left after rounding
        let negative = amount < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
        let sign = if negative { "-" } else { "" };
        match fraction {
            Some(fraction) => format!("{}{}{}.{}", sign, self.symbol, grouped, fraction),
            None => format!("{}{}{}", sign, self.symbol, grouped),
        }
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::source(&CurrencyConfig::default())
    }
}

/// A placeholder amount and its value at a fixed rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionQuote {
    pub amount: f64,
    pub rate: f64,
}

impl ConversionQuote {
    pub fn new(amount: f64, rate: f64) -> Self {
        Self { amount, rate }
    }

    pub fn from_config(config: &CurrencyConfig) -> Self {
        Self::new(config.placeholder_amount, config.conversion_rate)
    }

    pub fn converted(&self) -> f64 {
        self.amount * self.rate
    }
}
