//! Main TUI runner - entry point and event loop

use std::path::PathBuf;
use std::sync::Arc;

use ecourse_app::config::{load_last_page, Settings};
use ecourse_app::{signals, AppState, Message};
use ecourse_core::prelude::*;
use ecourse_core::ContentRouter;
use tokio::sync::mpsc;

use super::{event, process, render, terminal};

/// Run the interactive browser until the user quits
///
/// `state_path` is where the last opened page is remembered; `None`
/// disables persistence.
pub async fn run(
    router: Arc<ContentRouter>,
    settings: Settings,
    state_path: Option<PathBuf>,
) -> Result<()> {
    terminal::install_panic_hook();

    let last_page = state_path.as_deref().and_then(load_last_page);
    let mut state = AppState::with_last_page(router, settings, last_page.as_deref());
    info!("Starting on module {}", state.selected_key());

    let mut term = terminal::init()?;

    // External messages (signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    signals::spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx, state_path);

    terminal::restore();
    info!("Browser closed");

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    state_path: Option<PathBuf>,
) -> Result<()> {
    let state_path = state_path.as_deref();

    while !state.should_quit() {
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, state_path);
        }
        if state.should_quit() {
            break;
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process::process_message(state, message, state_path);
        }
    }

    Ok(())
}
