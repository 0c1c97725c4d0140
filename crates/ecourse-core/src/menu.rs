//! Course navigation menu
//!
//! The menu is a fixed, ordered list of modules. Every entry's `key` is the
//! stable identifier used by the content router and by configuration files;
//! `label` and `icon` are display text only.

use serde::Serialize;

/// One selectable entry in the navigation surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Stable identifier, unique across the menu
    pub key: &'static str,
    /// Display text
    pub label: &'static str,
    /// Decorative glyph shown before the label
    pub icon: &'static str,
    /// Zero-based position in the menu
    pub ordinal: usize,
}

impl MenuItem {
    const fn new(ordinal: usize, key: &'static str, icon: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            icon,
            ordinal,
        }
    }

    /// Label prefixed with the icon, as shown in the sidebar
    pub fn display_label(&self) -> String {
        format!("{} {}", self.icon, self.label)
    }
}

/// Key of the landing page
pub const HOME_KEY: &str = "home";

/// All course modules in menu order
pub const MENU: &[MenuItem] = &[
    MenuItem::new(0, HOME_KEY, "🏠", "Home"),
    MenuItem::new(1, "unit-root", "📈", "Unit Root & Stationarity"),
    MenuItem::new(2, "cointegration", "🔗", "Cointegration Methods"),
    MenuItem::new(3, "fourier", "🌊", "Fourier Methods"),
    MenuItem::new(4, "causality", "⚡", "Causality & VECM"),
    MenuItem::new(5, "nardl", "🔄", "Nonlinear ARDL"),
    MenuItem::new(6, "wavelet", "📊", "Wavelet Analysis"),
    MenuItem::new(7, "quantile", "📉", "Quantile Methods"),
    MenuItem::new(8, "garch", "📊", "GARCH Models"),
    MenuItem::new(9, "hybrid", "🚀", "Hybrid Applications"),
    MenuItem::new(10, "overview", "🎯", "Course Overview"),
];

/// Look up a menu item by key
pub fn find(key: &str) -> Option<&'static MenuItem> {
    MENU.iter().find(|item| item.key == key)
}

/// Position of a key in the menu
pub fn position(key: &str) -> Option<usize> {
    find(key).map(|item| item.ordinal)
}

/// Look up a menu item by its display label
pub fn find_by_label(label: &str) -> Option<&'static MenuItem> {
    MENU.iter().find(|item| item.label.eq_ignore_ascii_case(label))
}

/// Iterate over all menu keys in order
pub fn keys() -> impl Iterator<Item = &'static str> {
    MENU.iter().map(|item| item.key)
}
