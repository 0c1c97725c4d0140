//! Collapsible section handlers
//!
//! Section indices follow `Page::sections`. Only sections whose ancestors
//! are all expanded can hold focus.

use crate::state::{AppState, Focus};
use ecourse_core::prelude::*;

use super::UpdateResult;

/// Focus the next visible section after the focused one
pub fn handle_next_section(state: &mut AppState) -> UpdateResult {
    let visible = state.visible_sections();
    let target = match state.page_view.focused_section {
        Some(current) => visible.iter().copied().find(|&i| i > current),
        None => visible.first().copied(),
    };

    if let Some(index) = target {
        state.focus = Focus::Page;
        state.page_view.focus_section(index);
    }
    UpdateResult::none()
}

/// Focus the previous visible section before the focused one
pub fn handle_previous_section(state: &mut AppState) -> UpdateResult {
    let visible = state.visible_sections();
    let target = match state.page_view.focused_section {
        Some(current) => visible.iter().rev().copied().find(|&i| i < current),
        None => visible.last().copied(),
    };

    if let Some(index) = target {
        state.focus = Focus::Page;
        state.page_view.focus_section(index);
    }
    UpdateResult::none()
}

/// Expand or collapse the focused section
///
/// With nothing focused, focuses the first section instead.
pub fn handle_toggle_section(state: &mut AppState) -> UpdateResult {
    let Some(index) = state.page_view.focused_section else {
        return handle_next_section(state);
    };

    if !state.visible_sections().contains(&index) {
        return handle_next_section(state);
    }

    let expanded = !state.is_section_expanded(index);
    state.set_section_expanded(index, expanded);
    state.page_view.focus_section(index);
    debug!(
        "Section {} on {} {}",
        index,
        state.selected_key(),
        if expanded { "expanded" } else { "collapsed" }
    );
    UpdateResult::none()
}

/// Expand or collapse every section on the current page
pub fn handle_set_all(state: &mut AppState, expanded: bool) -> UpdateResult {
    let count = state.current_page().sections().len();
    for index in 0..count {
        state.set_section_expanded(index, expanded);
    }

    if let Some(focused) = state.page_view.focused_section {
        state.page_view.focused_section = state.visible_ancestor(focused);
        state.page_view.follow_focus = state.page_view.focused_section.is_some();
    }
    UpdateResult::none()
}
