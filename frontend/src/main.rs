use std::rc::Rc;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use shared::{AppConfig, Catalog, Reminder, Translator};
use web_sys::MouseEvent;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{
    CategorySuggestions, CurrencyWidget, FormSection, LoadingAnimation, PageLinkCard,
    ReminderSummaryCard,
};
use services::date_utils;
use services::logging::Logger;
use services::navigation::Navigator;

const APP_CONFIG: &str = include_str!("../config/app.json");
const EN_CATALOG: &str = include_str!("../locales/en.json");
const DEMO_REMINDERS: &str = include_str!("../demo/reminders.json");

fn load_config() -> anyhow::Result<AppConfig> {
    AppConfig::from_json(APP_CONFIG).context("failed to read config/app.json")
}

fn load_catalog(locale: &str) -> anyhow::Result<Catalog> {
    match locale {
        "en" => Catalog::from_json("en", EN_CATALOG).context("failed to read locales/en.json"),
        other => bail!("no catalog bundled for locale '{}'", other),
    }
}

/// Demo reminders with `{today}` filled in so the summary has something to count
fn demo_reminders(today: NaiveDate) -> anyhow::Result<Vec<Reminder>> {
    let json = DEMO_REMINDERS.replace("{today}", &today.to_string());
    serde_json::from_str(&json).context("failed to read demo/reminders.json")
}

fn bootstrap_config() -> AppConfig {
    let config = load_config().unwrap_or_else(|e| {
        Logger::warn_with_component("bootstrap", &format!("{:#}; using defaults", e));
        AppConfig::default()
    });
    Logger::set_level(config.log_level);
    config
}

fn bootstrap_catalog(locale: &str) -> Catalog {
    load_catalog(locale).unwrap_or_else(|e| {
        Logger::warn_with_component("bootstrap", &format!("{:#}; falling back to built-in text", e));
        Catalog::new(locale)
    })
}

fn category_label(category: &str, catalog: &Catalog) -> String {
    if category.is_empty() {
        catalog.t("forms.no_category", "None")
    } else {
        category.to_string()
    }
}

const DEMO_CATEGORIES: [&str; 5] = ["Groceries", "Transport", "Bills", "Dining out", "Other"];

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| bootstrap_config());
    let catalog = use_memo(config.locale.clone(), |locale| bootstrap_catalog(locale));
    let today = date_utils::today();
    let reminders = use_memo(today, |today| {
        demo_reminders(*today).unwrap_or_else(|e| {
            Logger::error_with_component("dashboard", &format!("{:#}", e));
            Vec::new()
        })
    });

    let route = use_state(|| "/".to_string());
    let category = use_state(String::new);
    let suggestions: Vec<String> = DEMO_CATEGORIES.iter().map(|c| c.to_string()).collect();

    let navigator = {
        let route = route.clone();
        Navigator::new(Callback::from(move |path: String| {
            Logger::info_with_component("router", &format!("route changed to {}", path));
            route.set(path);
        }))
    };

    let on_select_category = {
        let category = category.clone();
        Callback::from(move |value: String| category.set(value))
    };

    let on_dismiss = Callback::from(|_: ()| {
        Logger::debug_with_component("dashboard", "suggestions dismissed");
    });

    let on_clear_category = {
        let category = category.clone();
        Callback::from(move |_: MouseEvent| category.set(String::new()))
    };

    html! {
        <ContextProvider<Rc<AppConfig>> context={config.clone()}>
            <ContextProvider<Rc<Catalog>> context={catalog.clone()}>
                <ContextProvider<Navigator> context={navigator}>
                    <main class="dashboard">
                        <header class="dashboard-header">
                            <h1>{"Pocket Ledger"}</h1>
                            <span class="current-route">{(*route).clone()}</span>
                        </header>

                        <div class="widget-grid">
                            <CurrencyWidget />
                            <ReminderSummaryCard reminders={(*reminders).clone()} today={Some(today)} />
                        </div>

                        <nav class="page-links">
                            <PageLinkCard path="/transactions" title="pages.transactions" />
                            <PageLinkCard path="/budget" title="pages.budget" />
                            <PageLinkCard path="/goals" title="pages.goals" />
                            <PageLinkCard path="/reports/yearly" title="pages.reports" />
                        </nav>

                        <FormSection title={catalog.t("forms.details", "Details")}>
                            <div class="form-row">
                                <label>{"Category"}</label>
                                <span class="category-value">
                                    {category_label(&category, &catalog)}
                                </span>
                                if !category.is_empty() {
                                    <button type="button" class="link-button" onclick={on_clear_category}>
                                        {"Clear"}
                                    </button>
                                }
                            </div>
                            <CategorySuggestions
                                suggested_categories={suggestions}
                                current_category={(*category).clone()}
                                {on_select_category}
                                {on_dismiss}
                            />
                        </FormSection>

                        <FormSection
                            title={catalog.t("forms.advanced", "Advanced options")}
                            collapsible={true}
                            default_expanded={false}
                        >
                            <LoadingAnimation size={shared::LoaderSize::Small} />
                        </FormSection>
                    </main>
                </ContextProvider<Navigator>>
            </ContextProvider<Rc<Catalog>>>
        </ContextProvider<Rc<AppConfig>>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_bundled_config_loads() {
        let config = load_config().unwrap();
        assert_eq!(config.suggestion_limit, 3);
        assert_eq!(config.currency.target_code, "EUR");
    }

    #[wasm_bindgen_test]
    fn test_bundled_catalog_loads() {
        let catalog = load_catalog("en").unwrap();
        assert_eq!(catalog.t("reminders.pending", ""), "Pending");
        assert!(load_catalog("xx").is_err());
    }

    #[wasm_bindgen_test]
    fn test_unset_category_shows_translated_label() {
        let catalog = load_catalog("en").unwrap();
        assert_eq!(category_label("", &catalog), "No category");
        assert_eq!(category_label("", &Catalog::default()), "None");
        assert_eq!(category_label("Bills", &catalog), "Bills");
    }

    #[wasm_bindgen_test]
    fn test_demo_reminders_use_today() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 27).unwrap();
        let reminders = demo_reminders(today).unwrap();
        assert_eq!(reminders.len(), 3);
        assert_eq!(reminders[0].date, "2025-06-27");
    }
}
