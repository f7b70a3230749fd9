use std::collections::HashMap;

use crate::model::UserProfile;

use super::{BridgeError, HostBridge};

/// Host held entirely in memory. Used for `--ephemeral` sessions and tests;
/// individual calls can be made to fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryBridge {
    profile: Option<UserProfile>,
    values: HashMap<String, String>,
    fail_profile: bool,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

impl MemoryBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn failing_profile(mut self) -> Self {
        self.fail_profile = true;
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Number of successful `storage_set` calls so far
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl HostBridge for MemoryBridge {
    fn get_user_info(&self) -> Result<Option<UserProfile>, BridgeError> {
        if self.fail_profile {
            return Err(BridgeError::Rejected {
                method: "get_user_info",
                reason: "profile unavailable".into(),
            });
        }
        Ok(self.profile.clone())
    }

    fn storage_get(&self, keys: &[&str]) -> Result<HashMap<String, String>, BridgeError> {
        if self.fail_reads {
            return Err(BridgeError::Rejected {
                method: "storage_get",
                reason: "storage unavailable".into(),
            });
        }
        Ok(keys
            .iter()
            .filter_map(|key| {
                self.values
                    .get(*key)
                    .map(|value| (key.to_string(), value.clone()))
            })
            .collect())
    }

    fn storage_set(&mut self, key: &str, value: &str) -> Result<(), BridgeError> {
        if self.fail_writes {
            return Err(BridgeError::Rejected {
                method: "storage_set",
                reason: "storage unavailable".into(),
            });
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
