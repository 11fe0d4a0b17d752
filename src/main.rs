use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vidman::app::settings::{self, config_dirs};
use vidman::lockfile::InstanceLock;
use vidman::runner;

#[derive(Parser)]
#[command(name = "vidman", version, about = "Terminal media catalog manager")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the catalog file location
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Override the browse root directory
    #[arg(long)]
    browse_dir: Option<PathBuf>,

    /// Skip the lockfile prompt and take over a stale lock
    #[arg(long)]
    force: bool,
}

// Logs go to a rotating file in the data directory; the terminal belongs to
// the TUI.
fn init_logging() -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = config_dirs::log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let appender = tracing_appender::rolling::daily(&log_dir, "vidman.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
    Ok(guard)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging()?;

    let config_path = cli.config.unwrap_or_else(config_dirs::user_config_file);
    let mut settings = settings::load_settings(&config_path)?;
    if let Some(catalog) = cli.catalog {
        settings.catalog_file = catalog;
    }
    if let Some(dir) = cli.browse_dir {
        settings.browse_dir = dir;
    }

    // Acquired before the alternate screen so the prompt renders normally;
    // released on drop after the terminal is restored.
    let _lock = InstanceLock::acquire(config_dirs::lock_file(), cli.force)?;

    info!(
        "vidman starting; catalog {}, browse root {}",
        settings.catalog_file.display(),
        settings.browse_dir.display()
    );
    runner::run_app(settings)
}
