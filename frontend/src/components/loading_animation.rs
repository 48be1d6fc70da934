use shared::{Catalog, LoaderSize, Translator};
use yew::prelude::*;

use crate::hooks::use_app_context::use_translator;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct LoadingAnimationProps {
    #[prop_or_default]
    pub size: LoaderSize,
    /// Replaces the translated "Loading..." caption
    #[prop_or_default]
    pub text: Option<AttrValue>,
    /// Cover the whole viewport
    #[prop_or_default]
    pub full_screen: bool,
}

/// Branded loading animation: three coins dropping onto a stack.
#[function_component(LoadingAnimation)]
pub fn loading_animation(props: &LoadingAnimationProps) -> Html {
    let catalog = use_translator();
    let caption = loader_caption(props.text.as_deref(), &catalog);

    use_effect_with((), |_| {
        Logger::debug_with_component("loading-animation", "mounted");
        || ()
    });

    let size = props.size.pixels().to_string();
    let loader = html! {
        <div class={props.size.css_class()} role="status" aria-live="polite">
            <svg
                class="loader-coins"
                width={size.clone()}
                height={size}
                viewBox="0 0 48 48"
                xmlns="http://www.w3.org/2000/svg"
                aria-hidden="true"
            >
                <ellipse class="coin coin-1" cx="24" cy="38" rx="14" ry="5" fill="currentColor"/>
                <ellipse class="coin coin-2" cx="24" cy="28" rx="14" ry="5" fill="currentColor"/>
                <ellipse class="coin coin-3" cx="24" cy="18" rx="14" ry="5" fill="currentColor"/>
            </svg>
            <span class="loader-text">{caption}</span>
        </div>
    };

    if props.full_screen {
        html! { <div class="loader-overlay">{loader}</div> }
    } else {
        loader
    }
}

fn loader_caption(text: Option<&str>, catalog: &Catalog) -> String {
    match text {
        Some(text) => text.to_string(),
        None => catalog.t("common.loading", "Loading..."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_caption_override_wins() {
        let catalog = Catalog::default();
        assert_eq!(loader_caption(Some("Crunching numbers"), &catalog), "Crunching numbers");
    }

    #[wasm_bindgen_test]
    fn test_caption_falls_back_to_translation() {
        let mut catalog = Catalog::new("de");
        assert_eq!(loader_caption(None, &catalog), "Loading...");

        catalog.insert("common.loading", "Wird geladen...");
        assert_eq!(loader_caption(None, &catalog), "Wird geladen...");
    }
}
