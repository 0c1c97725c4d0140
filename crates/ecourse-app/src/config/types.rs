//! Configuration types

use ecourse_core::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Accepted range for `ui.sidebar_width`
pub const SIDEBAR_WIDTH_RANGE: std::ops::RangeInclusive<u16> = 12..=80;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub content: ContentSettings,
}

impl Settings {
    /// Reject values that parse but cannot be used
    pub fn validate(&self) -> Result<()> {
        if !SIDEBAR_WIDTH_RANGE.contains(&self.ui.sidebar_width) {
            return Err(Error::config_invalid(format!(
                "ui.sidebar_width must be between {} and {}, got {}",
                SIDEBAR_WIDTH_RANGE.start(),
                SIDEBAR_WIDTH_RANGE.end(),
                self.ui.sidebar_width
            )));
        }
        if self
            .content
            .dir
            .as_ref()
            .is_some_and(|dir| dir.as_os_str().is_empty())
        {
            return Err(Error::config_invalid("content.dir is empty"));
        }
        Ok(())
    }
}

/// Behavior settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Menu key to open on startup (defaults to the home page)
    #[serde(default)]
    pub start_page: Option<String>,

    /// Reopen the module that was showing when the app last quit
    #[serde(default)]
    pub remember_last_page: bool,
}

/// Icon rendering mode for the TUI.
///
/// Emoji need a terminal font that has them; `plain` drops them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    #[default]
    Emoji,
    Plain,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Emoji => write!(f, "emoji"),
            IconMode::Plain => write!(f, "plain"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Sidebar width in columns
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,

    /// Icon mode: "emoji" (default) or "plain"
    #[serde(default)]
    pub icons: IconMode,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            sidebar_width: default_sidebar_width(),
            icons: IconMode::default(),
        }
    }
}

fn default_sidebar_width() -> u16 {
    30
}

/// Content settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContentSettings {
    /// Directory of `<key>.toml` pages replacing the built-in ones
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// State the app writes for itself (state.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Preferences {
    /// Menu key shown when the app last quit
    #[serde(default)]
    pub last_page: Option<String>,
}
