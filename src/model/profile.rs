use serde::{Deserialize, Serialize};

/// The host user's profile, used only for the greeting header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Avatar URL (200px variant)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_200: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<City>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
}

impl UserProfile {
    /// "First Last", skipping whichever part is empty
    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Up to two uppercase initials for the avatar badge
    pub fn initials(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .into_iter()
            .filter_map(|s| s.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn city_title(&self) -> Option<&str> {
        self.city
            .as_ref()
            .map(|c| c.title.trim())
            .filter(|t| !t.is_empty())
    }
}

/// Header greeting; falls back to a generic name when no profile is known
pub fn greeting(profile: Option<&UserProfile>) -> String {
    let name = profile.map(UserProfile::full_name).unwrap_or_default();
    if name.is_empty() {
        "Hi, User".to_string()
    } else {
        format!("Hi, {}", name)
    }
}
