use serde::{Deserialize, Serialize};

/// How many suggestions are offered at once.
pub const SUGGESTION_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionVisibility {
    #[default]
    Hidden,
    Visible,
}

impl SuggestionVisibility {
    /// Visible iff there is something to suggest and no category is chosen yet.
    pub fn derive(suggestions: &[String], current_category: &str) -> Self {
        if !suggestions.is_empty() && current_category.trim().is_empty() {
            SuggestionVisibility::Visible
        } else {
            SuggestionVisibility::Hidden
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, SuggestionVisibility::Visible)
    }
}

/// Visibility state of a category suggestion list.
///
/// Visibility is only recomputed when the inputs actually change, so an
/// explicit selection or dismissal sticks until the parent hands over a new
/// list or a different current category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionPanel {
    visibility: SuggestionVisibility,
    last_inputs: Option<(Vec<String>, String)>,
}

impl SuggestionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(&self) -> SuggestionVisibility {
        self.visibility
    }

    /// Feed the current inputs. Returns true if they differed from the last
    /// ones seen and visibility was recomputed.
    pub fn sync(&mut self, suggestions: &[String], current_category: &str) -> bool {
        let unchanged = matches!(
            &self.last_inputs,
            Some((prev, category)) if prev.as_slice() == suggestions && category == current_category
        );
        if unchanged {
            return false;
        }

        self.visibility = SuggestionVisibility::derive(suggestions, current_category);
        self.last_inputs = Some((suggestions.to_vec(), current_category.to_string()));
        true
    }

    /// A suggestion was picked. The panel hides regardless of its inputs.
    pub fn select(&mut self) {
        self.visibility = SuggestionVisibility::Hidden;
    }

    pub fn dismiss(&mut self) {
        self.visibility = SuggestionVisibility::Hidden;
    }

    /// The suggestions to render in the current state, at most `limit`.
    pub fn offered<'a>(&self, suggestions: &'a [String], limit: usize) -> &'a [String] {
        if self.visibility.is_visible() {
            offered(suggestions, limit)
        } else {
            &[]
        }
    }
}

/// First `limit` suggestions in source order.
pub fn offered(suggestions: &[String], limit: usize) -> &[String] {
    &suggestions[..suggestions.len().min(limit)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_initially_hidden() {
        let panel = SuggestionPanel::new();
        assert_eq!(panel.visibility(), SuggestionVisibility::Hidden);
        assert!(panel.offered(&labels(&["Food"]), SUGGESTION_LIMIT).is_empty());
    }

    #[test]
    fn test_offers_first_three_in_order() {
        let suggestions = labels(&["Food", "Transport", "Bills", "Other"]);
        let mut panel = SuggestionPanel::new();
        assert!(panel.sync(&suggestions, ""));

        assert_eq!(panel.visibility(), SuggestionVisibility::Visible);
        assert_eq!(
            panel.offered(&suggestions, SUGGESTION_LIMIT),
            labels(&["Food", "Transport", "Bills"]).as_slice()
        );
    }

    #[test]
    fn test_hidden_when_category_already_chosen() {
        let suggestions = labels(&["Food", "Transport"]);
        let mut panel = SuggestionPanel::new();
        panel.sync(&suggestions, "Food");

        assert_eq!(panel.visibility(), SuggestionVisibility::Hidden);
        assert!(panel.offered(&suggestions, SUGGESTION_LIMIT).is_empty());
    }

    #[test]
    fn test_hidden_when_no_suggestions() {
        let mut panel = SuggestionPanel::new();
        panel.sync(&[], "");
        assert_eq!(panel.visibility(), SuggestionVisibility::Hidden);
    }

    #[test]
    fn test_whitespace_category_counts_as_unset() {
        assert_eq!(
            SuggestionVisibility::derive(&labels(&["Food"]), "  "),
            SuggestionVisibility::Visible
        );
    }

    #[test]
    fn test_select_hides_and_sticks() {
        let suggestions = labels(&["Food", "Transport", "Bills"]);
        let mut panel = SuggestionPanel::new();
        panel.sync(&suggestions, "");

        panel.select();
        assert_eq!(panel.visibility(), SuggestionVisibility::Hidden);
        assert!(panel.offered(&suggestions, SUGGESTION_LIMIT).is_empty());

        assert!(!panel.sync(&suggestions, ""));
        assert_eq!(panel.visibility(), SuggestionVisibility::Hidden);
    }

    #[test]
    fn test_resync_with_same_inputs_keeps_dismissal() {
        let suggestions = labels(&["Food", "Bills"]);
        let mut panel = SuggestionPanel::new();
        panel.sync(&suggestions, "");

        panel.dismiss();
        assert!(!panel.sync(&suggestions, ""));
        assert_eq!(panel.visibility(), SuggestionVisibility::Hidden);
    }

    #[test]
    fn test_new_inputs_reopen_after_dismissal() {
        let mut panel = SuggestionPanel::new();
        panel.sync(&labels(&["Food"]), "");
        panel.dismiss();

        assert!(panel.sync(&labels(&["Food", "Rent"]), ""));
        assert_eq!(panel.visibility(), SuggestionVisibility::Visible);
    }

    #[test]
    fn test_offered_respects_short_lists() {
        let suggestions = labels(&["Food"]);
        assert_eq!(offered(&suggestions, SUGGESTION_LIMIT), suggestions.as_slice());
        assert!(offered(&[], SUGGESTION_LIMIT).is_empty());
    }
}
