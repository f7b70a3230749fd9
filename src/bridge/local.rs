use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::io::config_io::read_config;
use crate::io::recovery::atomic_write;
use crate::model::UserProfile;

use super::{BridgeError, HostBridge};

pub const STORAGE_FILE: &str = "storage.json";

/// Host backed by a data directory: the profile comes from todo.toml and
/// storage is a JSON object of string values in storage.json.
#[derive(Debug, Clone)]
pub struct LocalBridge {
    data_dir: PathBuf,
}

impl LocalBridge {
    /// Open the data directory, creating it if needed
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, BridgeError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|e| BridgeError::WriteError {
            path: data_dir.clone(),
            source: e,
        })?;
        Ok(LocalBridge { data_dir })
    }

    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE)
    }

    fn read_storage(&self) -> Result<BTreeMap<String, String>, BridgeError> {
        let path = self.storage_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&path).map_err(|e| BridgeError::ReadError {
            path: path.clone(),
            source: e,
        })?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| BridgeError::CorruptStorage { path, source: e })
    }
}

impl HostBridge for LocalBridge {
    fn get_user_info(&self) -> Result<Option<UserProfile>, BridgeError> {
        Ok(read_config(&self.data_dir)?.profile)
    }

    fn storage_get(&self, keys: &[&str]) -> Result<HashMap<String, String>, BridgeError> {
        let mut storage = self.read_storage()?;
        Ok(keys
            .iter()
            .filter_map(|key| storage.remove_entry(*key))
            .collect())
    }

    fn storage_set(&mut self, key: &str, value: &str) -> Result<(), BridgeError> {
        let mut storage = self.read_storage()?;
        storage.insert(key.to_string(), value.to_string());
        let content = serde_json::to_string_pretty(&storage)?;
        let path = self.storage_path();
        atomic_write(&path, content.as_bytes())
            .map_err(|e| BridgeError::WriteError { path, source: e })?;
        tracing::debug!(key, bytes = value.len(), "storage value written");
        Ok(())
    }

    fn data_dir(&self) -> Option<&Path> {
        Some(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::config_io::CONFIG_FILE;
    use tempfile::TempDir;

    #[test]
    fn open_creates_data_dir() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("a/b");
        let bridge = LocalBridge::open(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(bridge.data_dir(), Some(dir.as_path()));
    }

    #[test]
    fn get_on_empty_dir_returns_nothing() {
        let tmp = TempDir::new().unwrap();
        let bridge = LocalBridge::open(tmp.path()).unwrap();
        assert!(bridge.storage_get(&["todos"]).unwrap().is_empty());
    }

    #[test]
    fn set_then_get_only_requested_keys() {
        let tmp = TempDir::new().unwrap();
        let mut bridge = LocalBridge::open(tmp.path()).unwrap();
        bridge.storage_set("todos", "[]").unwrap();
        bridge.storage_set("other", "x").unwrap();
        bridge.storage_set("todos", "[1]").unwrap();

        let values = bridge.storage_get(&["todos", "missing"]).unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values.get("todos").map(String::as_str), Some("[1]"));

        let reopened = LocalBridge::open(tmp.path()).unwrap();
        let values = reopened.storage_get(&["other"]).unwrap();
        assert_eq!(values.get("other").map(String::as_str), Some("x"));
    }

    #[test]
    fn corrupt_storage_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(STORAGE_FILE), "[not an object").unwrap();
        let mut bridge = LocalBridge::open(tmp.path()).unwrap();
        assert!(matches!(
            bridge.storage_get(&["todos"]),
            Err(BridgeError::CorruptStorage { .. })
        ));
        // Refuses to overwrite what it cannot read
        assert!(bridge.storage_set("todos", "[]").is_err());
        assert_eq!(
            fs::read_to_string(tmp.path().join(STORAGE_FILE)).unwrap(),
            "[not an object"
        );
    }

    #[test]
    fn profile_comes_from_config() {
        let tmp = TempDir::new().unwrap();
        let bridge = LocalBridge::open(tmp.path()).unwrap();
        assert_eq!(bridge.get_user_info().unwrap(), None);

        fs::write(
            tmp.path().join(CONFIG_FILE),
            "[profile]\nfirst_name = \"Ivan\"\nlast_name = \"Petrov\"\n",
        )
        .unwrap();
        let profile = bridge.get_user_info().unwrap().unwrap();
        assert_eq!(profile.first_name, "Ivan");
        assert_eq!(profile.last_name, "Petrov");
    }

    #[test]
    fn broken_config_fails_profile_call() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[profile").unwrap();
        let bridge = LocalBridge::open(tmp.path()).unwrap();
        assert!(matches!(
            bridge.get_user_info(),
            Err(BridgeError::Config(_))
        ));
    }
}
