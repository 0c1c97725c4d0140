//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Course title and current module
    pub header: Rect,

    /// Module menu
    pub sidebar: Rect,

    /// Page content
    pub page: Rect,

    /// One-row status line
    pub status: Rect,
}

/// Create the main screen layout
///
/// The sidebar takes `sidebar_width` columns but never more than half the
/// screen, so the page always keeps room to read.
pub fn create(area: Rect, sidebar_width: u16) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(3),    // Sidebar + page
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    let sidebar_width = sidebar_width.min(area.width / 2);

    let columns = Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(rows[1]);

    ScreenAreas {
        header: rows[0],
        sidebar: columns[0],
        page: columns[1],
        status: rows[2],
    }
}
