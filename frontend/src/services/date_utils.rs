use chrono::{Local, NaiveDate};

/// Current local calendar day, as seen by the browser
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date for display (e.g., "January 15, 2025")
pub fn format_date_for_display(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_today_matches_browser_clock() {
        let now = js_sys::Date::new_0();
        let browser_day = NaiveDate::from_ymd_opt(
            now.get_full_year() as i32,
            now.get_month() + 1,
            now.get_date(),
        )
        .unwrap();
        assert_eq!(today(), browser_day);
    }

    #[wasm_bindgen_test]
    fn test_format_date_for_display() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 27).unwrap();
        assert_eq!(format_date_for_display(date), "June 27, 2025");

        let single_digit = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_date_for_display(single_digit), "January 5, 2025");
    }
}
