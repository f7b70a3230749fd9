//! Host bridge: the boundary to the environment that owns the user profile
//! and the persistent key/value storage.

pub mod local;
pub mod memory;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::io::config_io::ConfigError;
use crate::model::UserProfile;

pub use local::LocalBridge;
pub use memory::MemoryBridge;

/// Error type for host calls
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("storage file {path} is corrupt: {source}")]
    CorruptStorage {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not serialize storage: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{method} was rejected: {reason}")]
    Rejected {
        method: &'static str,
        reason: String,
    },
}

/// Calls the app makes into its host.
pub trait HostBridge {
    /// Current user's profile; `None` when the host has none to give
    fn get_user_info(&self) -> Result<Option<UserProfile>, BridgeError>;

    /// Values for the requested keys. Keys with no stored value are absent
    /// from the result.
    fn storage_get(&self, keys: &[&str]) -> Result<HashMap<String, String>, BridgeError>;

    /// Store `value` under `key`, replacing any previous value
    fn storage_set(&mut self, key: &str, value: &str) -> Result<(), BridgeError>;

    /// Directory for side files (recovery log, UI state), if the host has one
    fn data_dir(&self) -> Option<&Path> {
        None
    }
}
