//! Theme for the course browser TUI.
//!
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions
//! - `icons` - Glyphs with plain-text fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
