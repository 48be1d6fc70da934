use std::cell::RefCell;

use shared::{SuggestionPanel, SuggestionVisibility};
use yew::prelude::*;

use crate::services::logging::Logger;

pub struct UseSuggestionVisibilityResult {
    pub visibility: SuggestionVisibility,
    /// What to render right now; empty when hidden
    pub offered: Vec<String>,
    pub select: Callback<String>,
    pub dismiss: Callback<()>,
}

/// Report the picked value to the parent, then hide the panel.
fn select_suggestion(panel: &RefCell<SuggestionPanel>, value: String, on_select: &Callback<String>) {
    Logger::info_with_component("category-suggestions", &format!("selected {}", value));
    on_select.emit(value);
    panel.borrow_mut().select();
}

/// Hide the panel, then tell the parent it was dismissed.
fn dismiss_suggestions(panel: &RefCell<SuggestionPanel>, on_dismiss: &Callback<()>) {
    Logger::info_with_component("category-suggestions", "dismissed");
    panel.borrow_mut().dismiss();
    on_dismiss.emit(());
}

/// Visibility of a category suggestion list.
///
/// Visibility is re-derived in an effect whenever `suggestions` or
/// `current_category` change. Selecting reports the value to `on_select`
/// and hides the list; dismissing hides it and then calls `on_dismiss`.
#[hook]
pub fn use_suggestion_visibility(
    suggestions: &[String],
    current_category: &str,
    limit: usize,
    on_select: Callback<String>,
    on_dismiss: Callback<()>,
) -> UseSuggestionVisibilityResult {
    let panel = use_mut_ref(SuggestionPanel::new);
    let trigger = use_force_update();

    {
        let panel = panel.clone();
        let trigger = trigger.clone();
        use_effect_with(
            (suggestions.to_vec(), current_category.to_string()),
            move |(suggestions, current_category)| {
                let changed = panel.borrow_mut().sync(suggestions, current_category);
                if changed {
                    trigger.force_update();
                }
                || ()
            },
        );
    }

    let select = {
        let panel = panel.clone();
        let trigger = trigger.clone();
        Callback::from(move |value: String| {
            select_suggestion(&panel, value, &on_select);
            trigger.force_update();
        })
    };

    let dismiss = {
        let panel = panel.clone();
        Callback::from(move |_: ()| {
            dismiss_suggestions(&panel, &on_dismiss);
            trigger.force_update();
        })
    };

    let current = panel.borrow();
    UseSuggestionVisibilityResult {
        visibility: current.visibility(),
        offered: current.offered(suggestions, limit).to_vec(),
        select,
        dismiss,
    }
}
