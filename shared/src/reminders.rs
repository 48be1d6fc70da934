use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::Reminder;

/// Status badge shown on the reminder summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReminderStatus {
    /// At least one reminder is still pending
    Active,
    /// Nothing left to do
    None,
}

impl ReminderStatus {
    pub fn from_pending(pending_count: usize) -> Self {
        if pending_count > 0 {
            ReminderStatus::Active
        } else {
            ReminderStatus::None
        }
    }

    /// Translation key for the badge label
    pub fn label_key(&self) -> &'static str {
        match self {
            ReminderStatus::Active => "reminders.status.active",
            ReminderStatus::None => "reminders.status.none",
        }
    }

    pub fn default_label(&self) -> &'static str {
        match self {
            ReminderStatus::Active => "Active",
            ReminderStatus::None => "None",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ReminderStatus::Active => "status-badge active",
            ReminderStatus::None => "status-badge none",
        }
    }
}

/// Counts derived from a reminder list for a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderSummary {
    pub pending_count: usize,
    pub today_count: usize,
}

impl ReminderSummary {
    /// Summarize `reminders` against `today`, reading each reminder's
    /// timestamp in the time zone `tz`.
    ///
    /// Reminders whose date cannot be parsed still count as pending but can
    /// never match today.
    pub fn summarize<Tz: TimeZone>(reminders: &[Reminder], today: NaiveDate, tz: &Tz) -> Self {
        let pending = reminders.iter().filter(|r| !r.is_completed);

        let mut pending_count = 0;
        let mut today_count = 0;
        for reminder in pending {
            pending_count += 1;
            if reminder_day(&reminder.date, tz) == Some(today) {
                today_count += 1;
            }
        }

        Self {
            pending_count,
            today_count,
        }
    }

    pub fn status(&self) -> ReminderStatus {
        ReminderStatus::from_pending(self.pending_count)
    }
}

/// Calendar day of a reminder timestamp in `tz`, time of day ignored.
///
/// Timestamps without an offset and bare `YYYY-MM-DD` dates are taken as
/// already local.
pub fn reminder_day<Tz: TimeZone>(date: &str, tz: &Tz) -> Option<NaiveDate> {
    let date = date.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(date) {
        return Some(timestamp.with_timezone(tz).date_naive());
    }
    for format in LOCAL_TIMESTAMP_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(date, format) {
            return Some(timestamp.date());
        }
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

const LOCAL_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
