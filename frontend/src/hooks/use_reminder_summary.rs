use std::rc::Rc;

use chrono::{Local, NaiveDate};
use shared::{Reminder, ReminderSummary};
use yew::prelude::*;

use crate::services::date_utils;

/// Pending/today counts for `reminders`, recomputed only when the list or
/// the reference day changes. `today` defaults to the browser's local date.
#[hook]
pub fn use_reminder_summary(reminders: &[Reminder], today: Option<NaiveDate>) -> Rc<ReminderSummary> {
    let today = today.unwrap_or_else(date_utils::today);
    use_memo((reminders.to_vec(), today), |(reminders, today)| {
        ReminderSummary::summarize(reminders, *today, &Local)
    })
}
