use serde::{Deserialize, Serialize};

/// Icons a page-link card can show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageIcon {
    Dashboard,
    Transactions,
    Budget,
    Goals,
    Reminders,
    Reports,
    Settings,
    #[default]
    Arrow,
}

/// Known page paths. Anything else gets `PageIcon::Arrow`.
const ICON_TABLE: &[(&str, PageIcon)] = &[
    ("/", PageIcon::Dashboard),
    ("/dashboard", PageIcon::Dashboard),
    ("/transactions", PageIcon::Transactions),
    ("/budget", PageIcon::Budget),
    ("/goals", PageIcon::Goals),
    ("/reminders", PageIcon::Reminders),
    ("/reports", PageIcon::Reports),
    ("/settings", PageIcon::Settings),
];

impl PageIcon {
    /// Exact-match lookup; no prefix or case folding.
    pub fn for_path(path: &str) -> Self {
        ICON_TABLE
            .iter()
            .find(|(key, _)| *key == path)
            .map(|(_, icon)| *icon)
            .unwrap_or_default()
    }

    /// SVG path data (24x24 viewBox)
    pub fn svg_path(&self) -> &'static str {
        match self {
            PageIcon::Dashboard => "M3 13h8V3H3v10zm0 8h8v-6H3v6zm10 0h8V11h-8v10zm0-18v6h8V3h-8z",
            PageIcon::Transactions => "M16 17.01V10h-2v7.01h-3L15 21l4-3.99h-3zM9 3 5 6.99h3V14h2V6.99h3L9 3z",
            PageIcon::Budget => "M11 2v20c-5.07-.5-9-4.79-9-10s3.93-9.5 9-10zm2.03 0v8.99H22c-.47-4.74-4.24-8.52-8.97-8.99zm0 11.01V22c4.74-.47 8.5-4.25 8.97-8.99h-8.97z",
            PageIcon::Goals => "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm0 18c-4.41 0-8-3.59-8-8s3.59-8 8-8 8 3.59 8 8-3.59 8-8 8zm0-14c-3.31 0-6 2.69-6 6s2.69 6 6 6 6-2.69 6-6-2.69-6-6-6zm0 10c-2.21 0-4-1.79-4-4s1.79-4 4-4 4 1.79 4 4-1.79 4-4 4z",
            PageIcon::Reminders => "M12 22c1.1 0 2-.9 2-2h-4c0 1.1.89 2 2 2zm6-6v-5c0-3.07-1.64-5.64-4.5-6.32V4c0-.83-.67-1.5-1.5-1.5s-1.5.67-1.5 1.5v.68C7.63 5.36 6 7.92 6 11v5l-2 2v1h16v-1l-2-2z",
            PageIcon::Reports => "M19 3H5c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h14c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2zM9 17H7v-7h2v7zm4 0h-2V7h2v10zm4 0h-2v-4h2v4z",
            PageIcon::Settings => "M19.14 12.94c.04-.3.06-.61.06-.94s-.02-.64-.07-.94l2.03-1.58a.49.49 0 0 0 .12-.61l-1.92-3.32a.488.488 0 0 0-.59-.22l-2.39.96c-.5-.38-1.03-.7-1.62-.94l-.36-2.54a.484.484 0 0 0-.48-.41h-3.84c-.24 0-.43.17-.47.41l-.36 2.54c-.59.24-1.13.57-1.62.94l-2.39-.96c-.22-.08-.47 0-.59.22L2.74 8.87c-.12.21-.08.47.12.61l2.03 1.58c-.05.3-.09.63-.09.94s.02.64.07.94l-2.03 1.58a.49.49 0 0 0-.12.61l1.92 3.32c.12.22.37.29.59.22l2.39-.96c.5.38 1.03.7 1.62.94l.36 2.54c.05.24.24.41.48.41h3.84c.24 0 .44-.17.47-.41l.36-2.54c.59-.24 1.13-.56 1.62-.94l2.39.96c.22.08.47 0 .59-.22l1.92-3.32c.12-.22.07-.47-.12-.61l-2.01-1.58zM12 15.6c-1.98 0-3.6-1.62-3.6-3.6s1.62-3.6 3.6-3.6 3.6 1.62 3.6 3.6-1.62 3.6-3.6 3.6z",
            PageIcon::Arrow => "M12 4l-1.41 1.41L16.17 11H4v2h12.17l-5.58 5.59L12 20l8-8z",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PageIcon::Dashboard => "page-icon dashboard",
            PageIcon::Transactions => "page-icon transactions",
            PageIcon::Budget => "page-icon budget",
            PageIcon::Goals => "page-icon goals",
            PageIcon::Reminders => "page-icon reminders",
            PageIcon::Reports => "page-icon reports",
            PageIcon::Settings => "page-icon settings",
            PageIcon::Arrow => "page-icon arrow",
        }
    }
}
