//! Key event handlers for the sidebar, page and help overlay

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};
use ecourse_core::MENU;

/// Convert key events to messages based on focus and overlay
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.show_help {
        return handle_key_help(key);
    }

    if let Some(message) = handle_key_global(key) {
        return Some(message);
    }

    match state.focus {
        Focus::Sidebar => handle_key_sidebar(key),
        Focus::Page => handle_key_page(key),
    }
}

/// Keys while the help overlay is open
fn handle_key_help(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('?') => Some(Message::ToggleHelp),
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Keys that mean the same thing in either pane
fn handle_key_global(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('?') => Some(Message::ToggleHelp),

        // Focus
        InputKey::Tab | InputKey::BackTab => Some(Message::ToggleFocus),
        InputKey::Left => Some(Message::FocusSidebar),
        InputKey::Right => Some(Message::FocusPage),

        // Direct module selection: 1-9 then 0 for the tenth module
        InputKey::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|d| Message::SelectIndex(d as usize)),
        InputKey::Char('0') => Some(Message::SelectIndex(10)),

        // Page scrolling works from the sidebar too
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),

        // Sections
        InputKey::Char('n') => Some(Message::NextSection),
        InputKey::Char('p') => Some(Message::PreviousSection),
        InputKey::Char('e') => Some(Message::ExpandAll),
        InputKey::Char('c') => Some(Message::CollapseAll),

        _ => None,
    }
}

fn handle_key_sidebar(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectIndex(0)),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectIndex(MENU.len() - 1)),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::FocusPage),
        _ => None,
    }
}

fn handle_key_page(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleSection),
        _ => None,
    }
}
