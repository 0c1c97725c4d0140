//! Message processing through the TEA update loop

use std::path::Path;

use ecourse_app::actions::handle_action;
use ecourse_app::{update, AppState, Message};

/// Run `message` and every follow-up message through `update`
///
/// Actions are executed as they are produced; `state_path` is where the
/// last-page preference is written.
pub fn process_message(state: &mut AppState, message: Message, state_path: Option<&Path>) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);

        if let Some(action) = result.action {
            handle_action(action, state_path);
        }

        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_router;
    use ecourse_app::config::{load_last_page, Settings};
    use ecourse_app::{Focus, InputKey};
    use tempfile::tempdir;

    #[test]
    fn test_key_follow_ups_are_processed() {
        let mut state = crate::test_utils::create_test_state();
        process_message(&mut state, Message::Key(InputKey::Char('4')), None);
        assert_eq!(state.selected_key(), "causality");

        process_message(&mut state, Message::Key(InputKey::Tab), None);
        assert_eq!(state.focus, Focus::Page);
    }

    #[test]
    fn test_quit_persists_last_page() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.toml");

        let mut settings = Settings::default();
        settings.behavior.remember_last_page = true;
        let mut state = AppState::new(test_router(), settings);

        process_message(&mut state, Message::Key(InputKey::Char('8')), Some(&path));
        process_message(&mut state, Message::Key(InputKey::Char('q')), Some(&path));

        assert!(state.should_quit());
        assert_eq!(load_last_page(&path).as_deref(), Some("garch"));
    }

    #[test]
    fn test_quit_without_remember_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.toml");

        let mut state = crate::test_utils::create_test_state();
        process_message(&mut state, Message::Quit, Some(&path));

        assert!(state.should_quit());
        assert!(!path.exists());
    }
}
