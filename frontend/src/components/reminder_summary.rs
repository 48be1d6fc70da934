use chrono::NaiveDate;
use shared::{Reminder, Translator};
use yew::prelude::*;

use crate::hooks::use_app_context::use_translator;
use crate::hooks::use_reminder_summary::use_reminder_summary;
use crate::services::date_utils::{self, format_date_for_display};

#[derive(Properties, PartialEq)]
pub struct ReminderSummaryProps {
    #[prop_or_default]
    pub reminders: Vec<Reminder>,
    /// Reference day; the browser's local date when unset
    #[prop_or_default]
    pub today: Option<NaiveDate>,
}

#[function_component(ReminderSummaryCard)]
pub fn reminder_summary_card(props: &ReminderSummaryProps) -> Html {
    let catalog = use_translator();
    let summary = use_reminder_summary(&props.reminders, props.today);
    let status = summary.status();
    let today = props.today.unwrap_or_else(date_utils::today);

    html! {
        <section class="widget reminder-summary">
            <header class="widget-header">
                <h3>{catalog.t("reminders.title", "Reminders")}</h3>
                <span class={status.css_class()}>
                    {catalog.t(status.label_key(), status.default_label())}
                </span>
            </header>
            <div class="reminder-counts">
                <div class="reminder-count pending">
                    <span class="count-value">{summary.pending_count.to_string()}</span>
                    <span class="count-label">{catalog.t("reminders.pending", "Pending")}</span>
                </div>
                <div class="reminder-count today">
                    <span class="count-value">{summary.today_count.to_string()}</span>
                    <span class="count-label">{catalog.t("reminders.today", "Due today")}</span>
                </div>
            </div>
            <footer class="widget-footer">{format_date_for_display(today)}</footer>
        </section>
    }
}
