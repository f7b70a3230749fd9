use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::AppConfig;

pub const CONFIG_FILE: &str = "todo.toml";

/// Error type for reading todo.toml
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Read todo.toml from the data directory. A missing file yields defaults.
pub fn read_config(data_dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = data_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError { path, source: e })
}

/// Pick the data directory: explicit flag, then `TODO_PANEL_DIR`, then
/// `$XDG_DATA_HOME/todo-panel`, then `~/.local/share/todo-panel`.
pub fn resolve_data_dir<F>(explicit: Option<&Path>, env: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    if let Some(dir) = env("TODO_PANEL_DIR").filter(|s| !s.is_empty()) {
        return PathBuf::from(dir);
    }
    let data_home = env("XDG_DATA_HOME")
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            env("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("/"))
                .join(".local")
                .join("share")
        });
    data_home.join("todo-panel")
}

/// `resolve_data_dir` against the real process environment
pub fn default_data_dir(explicit: Option<&Path>) -> PathBuf {
    resolve_data_dir(explicit, |key| std::env::var(key).ok())
}
