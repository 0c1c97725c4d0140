//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the browser (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Menu Selection
    // ─────────────────────────────────────────────────────────
    /// Select the next menu entry (stops at the last)
    SelectNext,
    /// Select the previous menu entry (stops at the first)
    SelectPrevious,
    /// Select a menu entry by position
    SelectIndex(usize),
    /// Select a menu entry by key
    SelectKey(String),

    /// Switch keyboard focus between sidebar and page
    ToggleFocus,
    /// Move keyboard focus to the sidebar
    FocusSidebar,
    /// Move keyboard focus to the page
    FocusPage,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,

    // ─────────────────────────────────────────────────────────
    // Collapsible Sections
    // ─────────────────────────────────────────────────────────
    /// Focus the next visible section header
    NextSection,
    /// Focus the previous visible section header
    PreviousSection,
    /// Expand or collapse the focused section
    ToggleSection,
    /// Expand every section on the current page
    ExpandAll,
    /// Collapse every section on the current page
    CollapseAll,

    /// Show or hide the key binding overlay
    ToggleHelp,
}
