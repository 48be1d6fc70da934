use shared::{ConversionQuote, Translator};
use yew::prelude::*;

use crate::hooks::use_app_context::{use_app_config, use_currency_formatters, use_translator};

/// Balance card with a secondary value at the configured exchange rate.
///
/// The amount and rate are placeholders from configuration; nothing here
/// fetches live rates.
#[function_component(CurrencyWidget)]
pub fn currency_widget() -> Html {
    let catalog = use_translator();
    let config = use_app_config();
    let formatters = use_currency_formatters();

    let quote = ConversionQuote::from_config(&config.currency);
    let rate_line = catalog
        .t("currency.converted", "Converted at {rate}")
        .replace("{rate}", &rate_label(&config.currency.code, &config.currency.target_code, quote.rate));

    html! {
        <section class="widget currency-widget">
            <header class="widget-header">
                <h3>{catalog.t("currency.title", "Balance")}</h3>
                <span class="currency-code">{&config.currency.code}</span>
            </header>
            <div class="currency-amount primary">{formatters.source.format(quote.amount)}</div>
            <div class="currency-amount converted">
                {format!("≈ {}", formatters.target.format(quote.converted()))}
            </div>
            <footer class="widget-footer">{rate_line}</footer>
        </section>
    }
}

fn rate_label(from: &str, to: &str, rate: f64) -> String {
    format!("1 {} = {:.4} {}", from, rate, to)
}
