use yew::prelude::*;

/// Receives the destination path whenever a `NavLink` is activated.
///
/// Provided by the application root; without one, links fall back to plain
/// browser navigation.
#[derive(Clone, PartialEq)]
pub struct Navigator {
    on_navigate: Callback<String>,
}

impl Navigator {
    pub fn new(on_navigate: Callback<String>) -> Self {
        Self { on_navigate }
    }

    pub fn push(&self, path: &str) {
        self.on_navigate.emit(path.to_string());
    }
}

/// True when a click should be left to the browser (new tab, new window, ...)
pub fn is_modified_click(button: i16, ctrl: bool, meta: bool, shift: bool, alt: bool) -> bool {
    button != 0 || ctrl || meta || shift || alt
}
