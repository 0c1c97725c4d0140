//! ecourse-tui - Terminal UI for the econometrics course browser
//!
//! This crate provides the ratatui-based interface: a module menu on the
//! left, the selected page on the right, and the key bindings that drive
//! the app layer's update function.

pub mod event;
pub mod layout;
pub mod process;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
