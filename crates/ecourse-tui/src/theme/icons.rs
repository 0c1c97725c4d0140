//! Icon set for the TUI.
//!
//! `IconSet` resolves glyphs at runtime from `IconMode`:
//! - `IconMode::Emoji` - content icons and box-drawing markers (default)
//! - `IconMode::Plain` - ASCII markers, content icons hidden

use ecourse_app::config::IconMode;
use ecourse_core::Badge;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Content-supplied icon (menu entries, headings, sections), if shown
    pub fn content<'a>(&self, icon: &'a str) -> Option<&'a str> {
        match self.mode {
            IconMode::Emoji if !icon.is_empty() => Some(icon),
            _ => None,
        }
    }

    pub fn collapsed(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "▶",
            IconMode::Plain => "+",
        }
    }

    pub fn expanded(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "▼",
            IconMode::Plain => "-",
        }
    }

    pub fn bullet(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "•",
            IconMode::Plain => "*",
        }
    }

    pub fn callout_bar(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "▌",
            IconMode::Plain => "|",
        }
    }

    pub fn badge(&self, badge: Badge) -> &'static str {
        match (self.mode, badge) {
            (IconMode::Emoji, Badge::New) => "🆕 NEW",
            (IconMode::Emoji, Badge::Hot) => "🔥 HOT",
            (IconMode::Plain, Badge::New) => "[NEW]",
            (IconMode::Plain, Badge::Hot) => "[HOT]",
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "📊",
            IconMode::Plain => "::",
        }
    }

    pub fn navigation(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "📚",
            IconMode::Plain => "",
        }
    }

    pub fn contact(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "📧",
            IconMode::Plain => "@",
        }
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}
