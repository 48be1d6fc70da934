use std::cell::Cell;

use shared::LogLevel;

thread_local! {
    static MIN_LEVEL: Cell<LogLevel> = Cell::new(LogLevel::default());
}

/// Component-tagged console logger.
pub struct Logger;

impl Logger {
    pub fn set_level(level: LogLevel) {
        MIN_LEVEL.with(|min| min.set(level));
    }

    pub fn level() -> LogLevel {
        MIN_LEVEL.with(|min| min.get())
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Error, component, message);
    }

    pub fn enabled(level: LogLevel) -> bool {
        level >= Self::level()
    }

    fn log(level: LogLevel, component: &str, message: &str) {
        if !Self::enabled(level) {
            return;
        }

        let line = format_line(component, message);
        match level {
            LogLevel::Debug => gloo::console::debug!(line),
            LogLevel::Info => gloo::console::info!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Error => gloo::console::error!(line),
        }
    }
}

fn format_line(component: &str, message: &str) -> String {
    format!("[{}] {}", component, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_level_filter() {
        Logger::set_level(LogLevel::Warn);
        assert!(!Logger::enabled(LogLevel::Info));
        assert!(Logger::enabled(LogLevel::Error));

        Logger::set_level(LogLevel::Info);
        assert!(Logger::enabled(LogLevel::Info));
        assert!(!Logger::enabled(LogLevel::Debug));
    }

    #[wasm_bindgen_test]
    fn test_format_line() {
        assert_eq!(format_line("suggestions", "dismissed"), "[suggestions] dismissed");
    }
}
