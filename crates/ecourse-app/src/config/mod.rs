//! Configuration for the course browser
//!
//! Supports:
//! - `<config_dir>/econ-course/config.toml` - Settings
//! - `<data_local_dir>/econ-course/state.toml` - Preferences written by the app

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, default_state_path, load_last_page, load_preferences, load_settings,
    save_last_page, save_preferences,
};
pub use types::*;
