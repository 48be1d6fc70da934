/// Expanded/collapsed state of a form section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionState {
    pub collapsible: bool,
    pub expanded: bool,
}

impl SectionState {
    pub fn new(collapsible: bool, default_expanded: bool) -> Self {
        Self {
            collapsible,
            expanded: default_expanded,
        }
    }

    /// Flip the expanded flag. No-op for sections that cannot collapse.
    pub fn toggle(&mut self) {
        if self.collapsible {
            self.expanded = !self.expanded;
        }
    }

    /// Handle a key press on the header. Returns true if the key toggled.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if self.collapsible && is_activation_key(key) {
            self.toggle();
            true
        } else {
            false
        }
    }

    pub fn shows_body(&self) -> bool {
        self.expanded || !self.collapsible
    }

    /// Sections with neither title nor collapse behavior render their
    /// children bare.
    pub fn needs_wrapper(&self, has_title: bool) -> bool {
        has_title || self.collapsible
    }
}

/// Keys that activate a `role="button"` element.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_section_shows_header_only() {
        let state = SectionState::new(true, false);
        assert!(state.needs_wrapper(true));
        assert!(!state.shows_body());
    }

    #[test]
    fn test_enter_toggles_round_trip() {
        let mut state = SectionState::new(true, false);

        assert!(state.handle_key("Enter"));
        assert!(state.shows_body());

        assert!(state.handle_key("Enter"));
        assert!(!state.shows_body());
    }

    #[test]
    fn test_space_toggles_and_other_keys_do_not() {
        let mut state = SectionState::new(true, true);
        assert!(!state.handle_key("Tab"));
        assert!(!state.handle_key("a"));
        assert!(state.shows_body());

        assert!(state.handle_key(" "));
        assert!(!state.shows_body());
    }

    #[test]
    fn test_non_collapsible_always_shows_body() {
        let mut state = SectionState::new(false, false);
        assert!(state.shows_body());

        state.toggle();
        assert!(!state.handle_key("Enter"));
        assert!(state.shows_body());
    }

    #[test]
    fn test_untitled_static_section_renders_bare() {
        let state = SectionState::new(false, true);
        assert!(!state.needs_wrapper(false));
        assert!(state.needs_wrapper(true));
        assert!(SectionState::new(true, true).needs_wrapper(false));
    }
}
