//! Key-value backend contract and the in-memory backend

use crate::error::{PersistenceError, PersistenceResult};
use std::collections::HashMap;

/// Durable key-value contract the task store writes through
///
/// A value passed to [`set`](StorageBackend::set) must be returned verbatim
/// by later [`get`](StorageBackend::get) calls on the same backend until it
/// is overwritten or removed. Backends carry no business logic.
pub trait StorageBackend {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Durably store `value` under `key`, replacing any previous value
    ///
    /// A failed write leaves the previously stored value intact.
    fn set(&mut self, key: &str, value: String) -> PersistenceResult<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove(&mut self, key: &str) -> PersistenceResult<()>;
}

/// In-process backend backed by a `HashMap`
///
/// The optional quota caps the total stored bytes (keys plus values), which
/// lets tests provoke the same failure mode as a full browser store.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryBackend {
    /// Create an unbounded backend
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend that rejects writes once the total stored bytes
    /// would exceed `quota_bytes`
    #[inline]
    #[must_use]
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Number of stored keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the backend holds no keys
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored bytes not counting the entry under `key`
    fn stored_bytes_excluding(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> PersistenceResult<()> {
        if let Some(quota) = self.quota_bytes {
            let projected = self.stored_bytes_excluding(key) + key.len() + value.len();
            if projected > quota {
                return Err(PersistenceError::quota_exceeded(key));
            }
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> PersistenceResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
