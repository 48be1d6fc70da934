use std::collections::HashMap;

use serde_json::Value;

use crate::WidgetError;

/// Lookup of user-facing text by dotted key, e.g. `reminders.pending`.
pub trait Translator {
    /// Resolved text for `key`, else `fallback`, else the key itself.
    fn translate(&self, key: &str, fallback: Option<&str>) -> String;

    fn t(&self, key: &str, fallback: &str) -> String {
        self.translate(key, Some(fallback))
    }
}

/// Flat translation table for one locale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    locale: String,
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            entries: HashMap::new(),
        }
    }

    /// Load a catalog from a JSON document of nested objects.
    ///
    /// `{"reminders": {"pending": "Pending"}}` yields the key
    /// `reminders.pending`. Non-string leaves keep their JSON text.
    pub fn from_json(locale: impl Into<String>, json: &str) -> Result<Self, WidgetError> {
        let root: Value =
            serde_json::from_str(json).map_err(|e| WidgetError::InvalidCatalog(e.to_string()))?;
        let Value::Object(map) = root else {
            return Err(WidgetError::InvalidCatalog(
                "top level must be an object".to_string(),
            ));
        };

        let mut catalog = Self::new(locale);
        for (key, value) in map {
            catalog.flatten_into(key, value);
        }
        Ok(catalog)
    }

    fn flatten_into(&mut self, prefix: String, value: Value) {
        match value {
            Value::Object(children) => {
                for (key, child) in children {
                    self.flatten_into(format!("{}.{}", prefix, key), child);
                }
            }
            Value::String(text) => {
                self.entries.insert(prefix, text);
            }
            Value::Null => {}
            other => {
                self.entries.insert(prefix, other.to_string());
            }
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str, fallback: Option<&str>) -> String {
        match self.entries.get(key) {
            Some(text) => text.clone(),
            None => fallback.unwrap_or(key).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN: &str = r#"{
        "common": { "loading": "Loading..." },
        "reminders": {
            "pending": "Pending",
            "status": { "active": "Active", "none": "All clear" }
        },
        "limits": { "max": 3 },
        "unused": null
    }"#;

    #[test]
    fn test_nested_keys_are_flattened() {
        let catalog = Catalog::from_json("en", EN).unwrap();
        assert_eq!(catalog.locale(), "en");
        assert_eq!(catalog.translate("common.loading", None), "Loading...");
        assert_eq!(catalog.translate("reminders.status.none", None), "All clear");
        assert_eq!(catalog.translate("limits.max", None), "3");
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_missing_key_uses_fallback_then_key() {
        let catalog = Catalog::from_json("en", EN).unwrap();
        assert_eq!(catalog.t("reminders.today", "Due today"), "Due today");
        assert_eq!(catalog.translate("reminders.today", None), "reminders.today");
        assert_eq!(catalog.translate("unused", None), "unused");
    }

    #[test]
    fn test_resolved_key_wins_over_fallback() {
        let mut catalog = Catalog::new("fr");
        catalog.insert("common.loading", "Chargement...");
        assert_eq!(catalog.t("common.loading", "Loading..."), "Chargement...");
    }

    #[test]
    fn test_rejects_malformed_documents() {
        assert!(matches!(
            Catalog::from_json("en", "{not json"),
            Err(WidgetError::InvalidCatalog(_))
        ));
        assert!(matches!(
            Catalog::from_json("en", r#"["a", "b"]"#),
            Err(WidgetError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_empty_catalog_echoes_keys() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.translate("pages.budget", None), "pages.budget");
    }
}
