//! Action handlers: UpdateAction dispatch

use std::path::Path;

use tracing::{debug, warn};

use crate::config;
use crate::UpdateAction;

/// Execute an action returned by `update`
///
/// `state_path` is where preferences live; without one, persistence is skipped.
pub fn handle_action(action: UpdateAction, state_path: Option<&Path>) {
    match action {
        UpdateAction::PersistLastPage { key } => {
            let Some(path) = state_path else {
                debug!("No state path, not saving last page");
                return;
            };
            if let Err(e) = config::save_last_page(path, &key) {
                warn!("Failed to save last page: {}", e);
            }
        }
    }
}
