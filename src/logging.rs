use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `todo_panel=trace`)
pub const LOG_ENV: &str = "TODO_PANEL_LOG";

pub fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join("todo-panel.log")
}

/// Install a global subscriber appending plain-text logs to
/// `<data_dir>/todo-panel.log`. The terminal belongs to the TUI, so nothing
/// is ever written to stdout or stderr.
pub fn init(data_dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(data_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path(data_dir))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    Ok(())
}
