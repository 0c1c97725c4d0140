//! Menu selection and pane focus handlers

use crate::state::{AppState, Focus};
use ecourse_core::prelude::*;
use ecourse_core::{menu, MENU};

use super::UpdateResult;

/// Move the selection down one entry, stopping at the last module
pub fn handle_select_next(state: &mut AppState) -> UpdateResult {
    let next = (state.selected + 1).min(MENU.len() - 1);
    state.select(next);
    UpdateResult::none()
}

/// Move the selection up one entry, stopping at home
pub fn handle_select_previous(state: &mut AppState) -> UpdateResult {
    state.select(state.selected.saturating_sub(1));
    UpdateResult::none()
}

pub fn handle_select_index(state: &mut AppState, index: usize) -> UpdateResult {
    if index >= MENU.len() {
        debug!("No menu entry at index {}", index);
        return UpdateResult::none();
    }
    state.select(index);
    UpdateResult::none()
}

pub fn handle_select_key(state: &mut AppState, key: &str) -> UpdateResult {
    match menu::position(key) {
        Some(index) => {
            state.select(index);
        }
        None => warn!("Cannot select unknown module '{}'", key),
    }
    UpdateResult::none()
}

pub fn handle_toggle_focus(state: &mut AppState) -> UpdateResult {
    state.focus = state.focus.toggled();
    UpdateResult::none()
}

pub fn handle_focus(state: &mut AppState, focus: Focus) -> UpdateResult {
    state.focus = focus;
    UpdateResult::none()
}
