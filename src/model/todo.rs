use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do record, as persisted under the `todos` storage key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Opaque identifier (hyphenated UUID v4), never reused
    pub id: String,
    /// Short title
    pub title: String,
    /// Body text; newlines are display line breaks
    pub text: String,
    /// Creation instant, untouched by edits
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Create a record with a fresh identifier, stamped with the current instant
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Todo::with_id(Uuid::new_v4().to_string(), title, text, Utc::now())
    }

    /// Create a record with explicit identity fields
    pub fn with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        text: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Todo {
            id: id.into(),
            title: title.into(),
            text: text.into(),
            created_at,
        }
    }

    /// Body text split into display lines (empty body yields no lines)
    pub fn text_lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

/// Title and body being typed into the create or edit form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub text: String,
}

impl TodoDraft {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        TodoDraft {
            title: title.into(),
            text: text.into(),
        }
    }
}
