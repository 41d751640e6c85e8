//! tasktree store
//!
//! Two-level to-do list state: top-level [`Task`]s, each optionally owning
//! [`SubTask`]s, with uniqueness and cascade-delete invariants, mirrored to
//! a key-value backend on every mutation.
//!
//! # Core Concepts
//!
//! - [`TaskStore`]: owns both collections, enforces the invariants, and
//!   writes through to a [`StorageBackend`](tasktree_persist::StorageBackend)
//! - [`Task`] / [`SubTask`]: the two record types; a task's text is its key,
//!   a sub-task is keyed by `(parent_text, text)`
//! - [`StoreConfig`]: persisted key names and the optional referential
//!   check for sub-task parents
//! - [`StoreError`]: recoverable error taxonomy for every operation
//!
//! # Example
//!
//! ```rust
//! use tasktree_persist::MemoryBackend;
//! use tasktree_store::TaskStore;
//!
//! let mut store = TaskStore::new(MemoryBackend::new());
//! store.add_task("Buy milk")?;
//! store.add_subtask("Buy milk", "2% fat")?;
//!
//! let subs = store.subtasks("Buy milk");
//! assert_eq!(subs.len(), 1);
//! assert!(!subs[0].done);
//! # Ok::<(), tasktree_store::StoreError>(())
//! ```

mod config;
mod error;
mod store;
mod types;

pub use config::{StoreConfig, SUBTASK_KEY, TASK_KEY};
pub use error::{StoreError, StoreResult};
pub use store::TaskStore;
pub use types::{SubTask, Task};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
