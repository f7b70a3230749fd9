use crate::bridge::{BridgeError, HostBridge};
use crate::model::Todo;

/// Storage key holding the serialized task collection
pub const TODOS_KEY: &str = "todos";

/// Error type for loading and storing the task collection
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("stored task list is malformed: {source}")]
    Decode {
        /// The value as found in storage
        raw: String,
        source: serde_json::Error,
    },
    #[error("could not encode task list: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

/// Serialize the collection as a JSON array, preserving order
pub fn encode_todos(todos: &[Todo]) -> Result<String, serde_json::Error> {
    serde_json::to_string(todos)
}

/// Parse a stored JSON array. A blank value is an empty collection.
pub fn decode_todos(raw: &str) -> Result<Vec<Todo>, serde_json::Error> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw)
}

/// Read the collection from host storage. A missing key is an empty
/// collection; an unparsable value is a `StoreError::Decode` carrying the raw
/// text so the caller can preserve it.
pub fn load_todos(bridge: &dyn HostBridge) -> Result<Vec<Todo>, StoreError> {
    let mut values = bridge.storage_get(&[TODOS_KEY])?;
    let Some(raw) = values.remove(TODOS_KEY) else {
        return Ok(Vec::new());
    };
    decode_todos(&raw).map_err(|source| StoreError::Decode { raw, source })
}

/// Write the whole collection back under `TODOS_KEY`
pub fn store_todos(bridge: &mut dyn HostBridge, todos: &[Todo]) -> Result<(), StoreError> {
    let value = encode_todos(todos)?;
    bridge.storage_set(TODOS_KEY, &value)?;
    Ok(())
}
