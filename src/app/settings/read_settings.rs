use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::app::settings::config_dirs;

/// User configuration, loaded once at startup from a TOML file. Every field
/// has a default so a missing file (or a partial one) just works.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Root of the media tree the browser is confined to.
    pub browse_dir: PathBuf,
    /// Durable catalog file.
    pub catalog_file: PathBuf,
    /// File extensions (case-insensitive) the browser shows besides
    /// directories.
    pub extensions: Vec<String>,
    /// Player argv template; `{path}` is replaced with the entry's path.
    pub player: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            browse_dir: config_dirs::home_dir(),
            catalog_file: config_dirs::user_data_dir().join("catalog.json"),
            extensions: [
                "avi", "flv", "iso", "mkv", "mov", "mp4", "mpeg", "mpg", "wmv",
            ]
            .map(String::from)
            .to_vec(),
            player: vec!["vlc".to_string(), "{path}".to_string()],
        }
    }
}

/// Load settings from `path`, falling back to defaults when the file does
/// not exist. A file that exists but fails to parse is an error; silently
/// ignoring a broken config would be worse than refusing to start.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    if !path.is_file() {
        info!("no config at {}, using defaults", path.display());
        return Ok(Settings::default());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let mut settings: Settings =
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
    settings.browse_dir = config_dirs::expand_home(&settings.browse_dir);
    settings.catalog_file = config_dirs::expand_home(&settings.catalog_file);
    Ok(settings)
}
