pub mod use_app_context;
pub mod use_reminder_summary;
pub mod use_suggestion_visibility;
