use std::path::Path;

use super::types::Settings;
use crate::errors::SettingsError;

/// Parse settings from TOML text. The result is normalized.
pub fn parse_settings(text: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(text)?;
    Ok(s.normalized())
}

/// Read the settings file at `path`.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let text = std::fs::read_to_string(path)?;
    parse_settings(&text)
}

/// Load settings from `explicit` or the default config location.
///
/// Never fails: a missing file gives defaults silently, an unreadable or
/// invalid one gives defaults with a warning.
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match super::config_dirs::default_settings_path() {
            Some(p) => p,
            None => return Settings::default(),
        },
    };
    if !path.exists() {
        if explicit.is_some() {
            tracing::warn!("settings file {} not found, using defaults", path.display());
        }
        return Settings::default();
    }
    match load_settings_from(&path) {
        Ok(s) => {
            tracing::debug!("settings loaded from {}", path.display());
            s
        }
        Err(e) => {
            tracing::warn!("ignoring settings file {}: {}", path.display(), e);
            Settings::default()
        }
    }
}
