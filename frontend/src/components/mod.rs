pub mod category_suggestions;
pub mod currency_widget;
pub mod form_section;
pub mod loading_animation;
pub mod nav_link;
pub mod page_icon;
pub mod page_link_card;
pub mod reminder_summary;

pub use category_suggestions::CategorySuggestions;
pub use currency_widget::CurrencyWidget;
pub use form_section::FormSection;
pub use loading_animation::LoadingAnimation;
pub use nav_link::NavLink;
pub use page_link_card::PageLinkCard;
pub use reminder_summary::ReminderSummaryCard;
