use shared::Translator;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::use_app_context::{use_app_config, use_translator};
use crate::hooks::use_suggestion_visibility::use_suggestion_visibility;

#[derive(Properties, PartialEq)]
pub struct CategorySuggestionsProps {
    #[prop_or_default]
    pub suggested_categories: Vec<String>,
    /// Category already chosen for the transaction; empty when none
    #[prop_or_default]
    pub current_category: AttrValue,
    #[prop_or_default]
    pub on_select_category: Callback<String>,
    #[prop_or_default]
    pub on_dismiss: Callback<()>,
}

/// Quick-pick chips for categorizing a transaction.
#[function_component(CategorySuggestions)]
pub fn category_suggestions(props: &CategorySuggestionsProps) -> Html {
    let catalog = use_translator();
    let config = use_app_config();
    let suggestions = use_suggestion_visibility(
        &props.suggested_categories,
        &props.current_category,
        config.suggestion_limit,
        props.on_select_category.clone(),
        props.on_dismiss.clone(),
    );

    if !suggestions.visibility.is_visible() || suggestions.offered.is_empty() {
        return html! {};
    }

    let on_dismiss_click = {
        let dismiss = suggestions.dismiss.clone();
        Callback::from(move |_: MouseEvent| dismiss.emit(()))
    };
    let title = catalog.t("suggestions.title", "Suggested categories");

    html! {
        <div class="category-suggestions" role="group" aria-label={title.clone()}>
            <span class="suggestions-label">{title}</span>
            <div class="suggestion-chips">
                {for suggestions.offered.iter().map(|category| {
                    let select = suggestions.select.clone();
                    let value = category.clone();
                    html! {
                        <button
                            type="button"
                            class="suggestion-chip"
                            onclick={Callback::from(move |_: MouseEvent| select.emit(value.clone()))}
                        >
                            {category}
                        </button>
                    }
                })}
            </div>
            <button
                type="button"
                class="suggestions-dismiss"
                aria-label={catalog.t("common.dismiss", "Dismiss")}
                onclick={on_dismiss_click}
            >
                {"×"}
            </button>
        </div>
    }
}
