//! Settings and preferences files

use super::types::{Preferences, Settings};
use ecourse_core::prelude::*;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "econ-course";
const CONFIG_FILENAME: &str = "config.toml";
const STATE_FILENAME: &str = "state.toml";

/// Default location of config.toml, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Default location of state.toml, if the platform has a data dir
pub fn default_state_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join(STATE_FILENAME))
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from `path`
///
/// Returns default settings if the file doesn't exist, can't be parsed or
/// holds invalid values.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str::<Settings>(&content) {
            Ok(settings) => match settings.validate() {
                Ok(()) => {
                    debug!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Ignoring {:?}: {}", path, e);
                    Settings::default()
                }
            },
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Preferences
// ─────────────────────────────────────────────────────────────────────────────

/// Load preferences from `path`, `None` if absent or unreadable
pub fn load_preferences(path: &Path) -> Option<Preferences> {
    if !path.exists() {
        debug!("No state file at {:?}", path);
        return None;
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(prefs) => {
                debug!("Loaded preferences from {:?}", path);
                Some(prefs)
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                None
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            None
        }
    }
}

/// Save preferences to `path`
///
/// Creates the parent directory if needed. Uses atomic write (temp file + rename).
pub fn save_preferences(path: &Path, prefs: &Preferences) -> Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| Error::config(format!("Invalid state path: {:?}", path)))?;

    if !dir.as_os_str().is_empty() && !dir.exists() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", dir, e)))?;
    }

    let temp_path = dir.join(".state.toml.tmp");

    let header = "# Written by ecourse on quit\n\n";
    let content = toml::to_string_pretty(prefs)
        .map_err(|e| Error::config(format!("Failed to serialize preferences: {}", e)))?;

    std::fs::write(&temp_path, format!("{}{}", header, content))
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;

    std::fs::rename(&temp_path, path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    debug!("Saved preferences to {:?}", path);
    Ok(())
}

/// Last page recorded in the state file
pub fn load_last_page(path: &Path) -> Option<String> {
    load_preferences(path).and_then(|prefs| prefs.last_page)
}

/// Record `key` as the last page, keeping any other preferences
pub fn save_last_page(path: &Path, key: &str) -> Result<()> {
    let mut prefs = load_preferences(path).unwrap_or_default();
    prefs.last_page = Some(key.to_string());
    save_preferences(path, &prefs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconMode;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join("config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_from_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[behavior]
start_page = "wavelet"

[ui]
icons = "plain"
"#,
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.behavior.start_page.as_deref(), Some("wavelet"));
        assert_eq!(settings.ui.icons, IconMode::Plain);
    }

    #[test]
    fn test_load_settings_invalid_toml_falls_back() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui\nsidebar_width = ").unwrap();

        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_load_settings_wrong_type_falls_back() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\nsidebar_width = \"wide\"\n").unwrap();

        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_load_settings_out_of_range_falls_back() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\nsidebar_width = 2\nicons = \"plain\"\n").unwrap();

        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_save_and_load_last_page() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("state.toml");

        assert_eq!(load_last_page(&path), None);
        save_last_page(&path, "quantile").unwrap();
        assert_eq!(load_last_page(&path).as_deref(), Some("quantile"));

        save_last_page(&path, "garch").unwrap();
        assert_eq!(load_last_page(&path).as_deref(), Some("garch"));
        assert!(!path.with_file_name(".state.toml.tmp").exists());
    }

    #[test]
    fn test_corrupt_state_file_is_ignored() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("state.toml");
        std::fs::write(&path, "last_page = [").unwrap();

        assert_eq!(load_preferences(&path), None);
        save_last_page(&path, "home").unwrap();
        assert_eq!(load_last_page(&path).as_deref(), Some("home"));
    }

    #[test]
    #[serial]
    #[cfg(target_os = "linux")]
    fn test_default_config_path_honours_xdg() {
        let temp = tempdir().unwrap();
        let previous = std::env::var_os("XDG_CONFIG_HOME");
        std::env::set_var("XDG_CONFIG_HOME", temp.path());

        let path = default_config_path();

        match previous {
            Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
        assert_eq!(path, Some(temp.path().join("econ-course").join("config.toml")));
    }

    #[test]
    #[serial]
    fn test_default_paths_use_app_dir() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("econ-course/config.toml"));
        }
        if let Some(path) = default_state_path() {
            assert!(path.ends_with("econ-course/state.toml"));
        }
    }
}
