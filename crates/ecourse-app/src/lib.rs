//! ecourse-app - Application state and navigation for the course browser
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`AppState`] is the model, [`Message`] the events and
//! [`handler::update`] the transition function. It also owns configuration
//! loading and OS signal handling. Nothing here depends on a terminal.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod page_view_state;
pub mod signals;
pub mod state;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use page_view_state::PageViewState;
pub use state::{AppPhase, AppState, Focus};
