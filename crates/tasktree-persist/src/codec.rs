//! JSON collection codec
//!
//! Persisted collections are JSON arrays. Absent or unparsable data loads
//! as an empty collection so a damaged store never blocks startup.

use crate::backend::StorageBackend;
use crate::error::{PersistenceError, PersistenceResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Load the collection stored under `key`
///
/// Returns an empty vector when the key is absent or its content does not
/// parse as a JSON array of `T`. Corrupt content is logged at `warn` and
/// treated as "no data".
pub fn load_collection<B, T>(backend: &B, key: &str) -> Vec<T>
where
    B: StorageBackend,
    T: DeserializeOwned,
{
    let Some(raw) = backend.get(key) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!("discarding unparsable content under '{}': {}", key, err);
            Vec::new()
        }
    }
}

/// Serialize `items` as a JSON array and write it under `key`
pub fn save_collection<B, T>(backend: &mut B, key: &str, items: &[T]) -> PersistenceResult<()>
where
    B: StorageBackend,
    T: Serialize,
{
    let encoded =
        serde_json::to_string(items).map_err(|source| PersistenceError::encode(key, source))?;
    backend.set(key, encoded)
}
