pub mod config_dirs;
pub mod keybinds;
pub mod read_settings;
pub mod types;

// Re-export commonly used types/functions for convenience
pub use config_dirs::{default_settings_path, project_config_dir, user_cache_dir};
pub use keybinds::{parse_key, Keybinds};
pub use read_settings::{load_settings, load_settings_from, parse_settings};
pub use types::{LayoutSettings, Settings};
