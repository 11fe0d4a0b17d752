pub mod config_dirs;
pub mod keybinds;
pub mod read_settings;

// Re-export commonly used types/functions for convenience
pub use config_dirs::{lock_file, log_dir, user_config_file, user_data_dir};
pub use read_settings::{load_settings, Settings};
