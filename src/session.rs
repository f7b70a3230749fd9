//! The session container: owns the host bridge, the user profile and the
//! task collection, and applies every mutation followed by a write-through
//! of the whole collection.

use std::path::Path;

use crate::bridge::HostBridge;
use crate::io::recovery::{RecoveryCategory, RecoveryEntry, log_recovery};
use crate::io::todo_io::{self, StoreError, TODOS_KEY};
use crate::model::{TodoDraft, UserProfile};
use crate::ops::todo_ops::{TodoError, TodoList};

/// Error type for session mutations
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The input was rejected; nothing changed
    #[error(transparent)]
    Invalid(#[from] TodoError),
    /// The change was applied in memory but could not be persisted
    #[error("change not saved: {0}")]
    NotSaved(#[from] StoreError),
}

pub struct Session {
    bridge: Box<dyn HostBridge>,
    profile: Option<UserProfile>,
    todos: TodoList,
}

impl Session {
    /// Load the profile and the stored collection. Never fails: host errors
    /// and unreadable data fall back to no profile / an empty list, and are
    /// reported as notices.
    pub fn load(bridge: Box<dyn HostBridge>) -> (Session, Vec<String>) {
        let mut notices = Vec::new();

        let profile = match bridge.get_user_info() {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(error = %e, "profile request failed");
                notices.push(format!("could not load profile: {}", e));
                None
            }
        };

        let todos = match todo_io::load_todos(bridge.as_ref()) {
            Ok(todos) => todos,
            Err(StoreError::Decode { raw, source }) => {
                tracing::warn!(error = %source, bytes = raw.len(), "discarding unreadable task list");
                match bridge.data_dir() {
                    Some(dir) => {
                        log_recovery(
                            dir,
                            RecoveryEntry::new(RecoveryCategory::Load, "unreadable task list")
                                .field("Key", TODOS_KEY)
                                .field("Error", source.to_string())
                                .body(raw),
                        );
                        notices.push(
                            "stored tasks were unreadable; starting empty (copy kept in recovery.log)"
                                .to_string(),
                        );
                    }
                    None => notices.push("stored tasks were unreadable; starting empty".to_string()),
                }
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "task list request failed");
                notices.push(format!("could not load tasks: {}", e));
                Vec::new()
            }
        };

        tracing::info!(
            tasks = todos.len(),
            has_profile = profile.is_some(),
            "session loaded"
        );

        let session = Session {
            bridge,
            profile,
            todos: TodoList::new(todos),
        };
        (session, notices)
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    pub fn bridge(&self) -> &dyn HostBridge {
        self.bridge.as_ref()
    }

    pub fn data_dir(&self) -> Option<&Path> {
        self.bridge.data_dir()
    }

    /// Append a task and persist. Returns the new task's id.
    pub fn add(&mut self, draft: &TodoDraft) -> Result<String, SessionError> {
        let id = self.todos.add(draft)?.id.clone();
        tracing::debug!(id = %id, "task added");
        self.write_through("add")?;
        Ok(id)
    }

    /// Edit a task's title and text and persist. `Ok(false)` when `id` is
    /// unknown; nothing is written then.
    pub fn update(&mut self, id: &str, draft: &TodoDraft) -> Result<bool, SessionError> {
        if !self.todos.update(id, draft)? {
            tracing::debug!(id, "update for unknown task ignored");
            return Ok(false);
        }
        tracing::debug!(id, "task updated");
        self.write_through("update")?;
        Ok(true)
    }

    /// Remove a task and persist. `Ok(false)` when `id` is unknown.
    pub fn delete(&mut self, id: &str) -> Result<bool, SessionError> {
        if self.todos.delete(id).is_none() {
            tracing::debug!(id, "delete for unknown task ignored");
            return Ok(false);
        }
        tracing::debug!(id, "task deleted");
        self.write_through("delete")?;
        Ok(true)
    }

    fn write_through(&mut self, operation: &str) -> Result<(), StoreError> {
        let result = todo_io::store_todos(self.bridge.as_mut(), self.todos.as_slice());
        if let Err(e) = &result {
            tracing::warn!(error = %e, operation, "write-through failed");
            if let Some(dir) = self.bridge.data_dir() {
                let body = todo_io::encode_todos(self.todos.as_slice()).unwrap_or_default();
                log_recovery(
                    dir,
                    RecoveryEntry::new(RecoveryCategory::Write, "write-through failed")
                        .field("Key", TODOS_KEY)
                        .field("Operation", operation)
                        .field("Error", e.to_string())
                        .body(body),
                );
            }
        }
        result
    }
}
