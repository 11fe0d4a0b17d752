use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use dialoguer::Select;
use tracing::info;

/// Single-instance guard for the catalog file.
///
/// Two concurrent processes rewriting the same catalog would clobber each
/// other, so a lockfile in the data directory marks a running instance.
/// When a stale lock is found the user decides (on the plain terminal,
/// before the alternate screen) whether to abort, delete it, or ignore it.
/// Ignoring keeps the existing file and leaves it in place on exit, exactly
/// as it was found.
pub struct InstanceLock {
    path: PathBuf,
    remove_on_drop: bool,
}

impl InstanceLock {
    pub fn acquire(path: PathBuf, force: bool) -> Result<Self> {
        let mut remove_on_drop = true;
        if path.is_file() && !force {
            let choice = Select::new()
                .with_prompt(format!(
                    "Lockfile {} found. Is another instance already running?",
                    path.display()
                ))
                .items(&["Abort", "Delete the lockfile", "Ignore it"])
                .default(0)
                .interact()
                .context("lockfile prompt")?;
            match choice {
                0 => bail!("aborted: lockfile {} exists", path.display()),
                1 => fs::remove_file(&path)
                    .with_context(|| format!("deleting lockfile {}", path.display()))?,
                _ => remove_on_drop = false,
            }
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, std::process::id().to_string())
            .with_context(|| format!("writing lockfile {}", path.display()))?;
        info!("instance lock at {}", path.display());
        Ok(InstanceLock {
            path,
            remove_on_drop,
        })
    }
}

impl Drop for InstanceLock {
    fn drop(&mut self) {
        if self.remove_on_drop {
            let _ = fs::remove_file(&self.path);
        }
    }
}
