use directories_next::ProjectDirs;
use std::path::PathBuf;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "tackleBox")
}

/// Directory holding `settings.toml` (e.g. `~/.config/tackleBox`).
pub fn project_config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Directory for the log file (e.g. `~/.cache/tackleBox`). Falls back to the
/// system temp dir when no home directory is known.
pub fn user_cache_dir() -> PathBuf {
    project_dirs()
        .map(|d| d.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("tackleBox"))
}

/// Default location of the settings file.
pub fn default_settings_path() -> Option<PathBuf> {
    project_config_dir().map(|d| d.join("settings.toml"))
}
