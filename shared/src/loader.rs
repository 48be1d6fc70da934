use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoaderSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LoaderSize {
    /// Edge length of the animation in pixels
    pub fn pixels(&self) -> u32 {
        match self {
            LoaderSize::Small => 24,
            LoaderSize::Medium => 48,
            LoaderSize::Large => 96,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            LoaderSize::Small => "loader loader-sm",
            LoaderSize::Medium => "loader loader-md",
            LoaderSize::Large => "loader loader-lg",
        }
    }
}
