use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod config;
pub mod currency;
pub mod i18n;
pub mod loader;
pub mod navigation;
pub mod reminders;
pub mod section;
pub mod suggestions;

pub use config::{AppConfig, CurrencyConfig, LogLevel};
pub use currency::{ConversionQuote, CurrencyFormatter};
pub use i18n::{Catalog, Translator};
pub use loader::LoaderSize;
pub use navigation::PageIcon;
pub use reminders::{ReminderStatus, ReminderSummary};
pub use section::SectionState;
pub use suggestions::{SuggestionPanel, SuggestionVisibility, SUGGESTION_LIMIT};

/// A reminder as supplied by the parent view.
///
/// Only `date` and `is_completed` take part in any derivation; the remaining
/// fields are carried along untouched for whoever renders the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// RFC 3339 timestamp, offset-less local timestamp, or bare `YYYY-MM-DD` date
    pub date: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl Reminder {
    pub fn new(date: impl Into<String>, is_completed: bool) -> Self {
        Self {
            date: date.into(),
            is_completed,
            id: None,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Errors raised while loading ambient resources (catalogs, configuration).
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("invalid translation catalog: {0}")]
    InvalidCatalog(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reminder_deserializes_with_defaults() {
        let reminder: Reminder = serde_json::from_str(r#"{"date": "2025-06-27"}"#).unwrap();
        assert_eq!(reminder.date, "2025-06-27");
        assert!(!reminder.is_completed);
        assert_eq!(reminder.title, None);
    }

    #[test]
    fn test_reminder_keeps_opaque_fields() {
        let reminder: Reminder = serde_json::from_str(
            r#"{"date": "2025-06-27T09:00:00Z", "is_completed": true, "id": "r-1", "title": "Rent"}"#,
        )
        .unwrap();
        assert!(reminder.is_completed);
        assert_eq!(reminder.id.as_deref(), Some("r-1"));
        assert_eq!(reminder, Reminder::new("2025-06-27T09:00:00Z", true).with_title("Rent").with_id("r-1"));
    }
}
