//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use ecourse_core::prelude::*;

use super::{keys, navigation, scroll, sections, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            info!("Quit requested on {}", state.selected_key());
            state.request_quit();
            if state.settings.behavior.remember_last_page {
                UpdateResult::action(UpdateAction::PersistLastPage {
                    key: state.selected_key().to_string(),
                })
            } else {
                UpdateResult::none()
            }
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => navigation::handle_select_next(state),
        Message::SelectPrevious => navigation::handle_select_previous(state),
        Message::SelectIndex(index) => navigation::handle_select_index(state, index),
        Message::SelectKey(key) => navigation::handle_select_key(state, &key),
        Message::ToggleFocus => navigation::handle_toggle_focus(state),
        Message::FocusSidebar => navigation::handle_focus(state, crate::state::Focus::Sidebar),
        Message::FocusPage => navigation::handle_focus(state, crate::state::Focus::Page),
        Message::ToggleHelp => {
            state.show_help = !state.show_help;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scrolling
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),

        // ─────────────────────────────────────────────────────────
        // Sections
        // ─────────────────────────────────────────────────────────
        Message::NextSection => sections::handle_next_section(state),
        Message::PreviousSection => sections::handle_previous_section(state),
        Message::ToggleSection => sections::handle_toggle_section(state),
        Message::ExpandAll => sections::handle_set_all(state, true),
        Message::CollapseAll => sections::handle_set_all(state, false),
    }
}
