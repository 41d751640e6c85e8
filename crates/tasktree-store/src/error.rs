//! Error types for store operations
//!
//! Every variant is recoverable. `DuplicateTask`, `NotFound`, `EmptyText`
//! and `UnknownParent` guarantee no mutation and no write happened;
//! `Persistence` means the in-memory mutation was applied but the
//! write-through failed, leaving memory ahead of the persisted state.

use tasktree_persist::PersistenceError;

/// Errors returned by [`TaskStore`](crate::TaskStore) operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An add collided with an existing key
    #[error("task already added: '{0}'")]
    DuplicateTask(String),

    /// A mutation referenced a key with no matching entry
    #[error("no such task: '{0}'")]
    NotFound(String),

    /// Task text was empty after trimming
    #[error("task text must not be empty")]
    EmptyText,

    /// Sub-task parent does not reference an existing task
    ///
    /// Only returned when the store is configured with
    /// `require_existing_parent`.
    #[error("no parent task: '{0}'")]
    UnknownParent(String),

    /// The backend rejected a write
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl StoreError {
    /// User-visible rendering of a sub-task key
    pub(crate) fn subtask_key(parent_text: &str, text: &str) -> String {
        format!("{parent_text} / {text}")
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_display() {
        let err = StoreError::DuplicateTask("Buy milk".to_string());
        assert_eq!(err.to_string(), "task already added: 'Buy milk'");
    }

    #[test]
    fn not_found_display_includes_subtask_key() {
        let err = StoreError::NotFound(StoreError::subtask_key("Buy milk", "2% fat"));
        assert_eq!(err.to_string(), "no such task: 'Buy milk / 2% fat'");
    }

    #[test]
    fn empty_text_display() {
        assert_eq!(
            StoreError::EmptyText.to_string(),
            "task text must not be empty"
        );
    }

    #[test]
    fn persistence_error_converts() {
        let inner = PersistenceError::quota_exceeded("allTasks");
        let err: StoreError = inner.into();
        assert!(matches!(err, StoreError::Persistence(_)));
        assert_eq!(err.to_string(), "quota exceeded writing key 'allTasks'");
    }
}
