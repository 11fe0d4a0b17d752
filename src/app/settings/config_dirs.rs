use std::path::{Path, PathBuf};

use directories_next::{BaseDirs, ProjectDirs};

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "vidman")
}

/// Default location of the config file, under the platform config directory.
pub fn user_config_file() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("vidman.toml"))
}

/// Platform data directory holding the catalog, lockfile and logs.
pub fn user_data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn lock_file() -> PathBuf {
    user_data_dir().join("vidman.lock")
}

pub fn log_dir() -> PathBuf {
    user_data_dir().join("logs")
}

pub fn home_dir() -> PathBuf {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Expand a leading `~` or `~/` to the user's home directory; any other path
/// passes through untouched.
pub fn expand_home(path: &Path) -> PathBuf {
    let Some(text) = path.to_str() else {
        return path.to_path_buf();
    };
    if text == "~" {
        return home_dir();
    }
    match text.strip_prefix("~/") {
        Some(rest) => home_dir().join(rest),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_home_only_touches_tilde_prefixes() {
        assert_eq!(expand_home(Path::new("/a/b")), PathBuf::from("/a/b"));
        assert_eq!(expand_home(Path::new("rel/b")), PathBuf::from("rel/b"));
        let expanded = expand_home(Path::new("~/media"));
        assert!(expanded.ends_with("media"));
        assert!(!expanded.starts_with("~"));
    }
}
