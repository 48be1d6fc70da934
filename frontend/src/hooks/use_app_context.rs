use std::rc::Rc;

use shared::{AppConfig, Catalog, CurrencyFormatter};
use yew::prelude::*;

/// Translation catalog from context, or an empty one that echoes fallbacks
#[hook]
pub fn use_translator() -> Rc<Catalog> {
    use_context::<Rc<Catalog>>().unwrap_or_default()
}

#[hook]
pub fn use_app_config() -> Rc<AppConfig> {
    use_context::<Rc<AppConfig>>().unwrap_or_default()
}

/// Formatters for the configured source and target currencies
#[derive(Clone, PartialEq)]
pub struct CurrencyFormatters {
    pub source: CurrencyFormatter,
    pub target: CurrencyFormatter,
}

#[hook]
pub fn use_currency_formatters() -> Rc<CurrencyFormatters> {
    let config = use_app_config();
    use_memo(config, |config| CurrencyFormatters {
        source: CurrencyFormatter::source(&config.currency),
        target: CurrencyFormatter::target(&config.currency),
    })
}
