use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::profile::UserProfile;

/// Configuration from todo.toml in the data directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Profile served by the local host bridge
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// strftime pattern for the "Created:" line
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            date_format: default_date_format(),
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}
