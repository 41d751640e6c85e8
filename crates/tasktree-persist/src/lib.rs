//! tasktree persistence layer
//!
//! The durability contract the task store writes through, plus the two
//! built-in backends and the JSON collection codec.
//!
//! # Core Concepts
//!
//! - [`StorageBackend`]: the minimal get/set/remove key-value contract
//! - [`MemoryBackend`]: in-process map with an optional write quota
//! - [`FileBackend`]: one file per key under a root directory
//! - [`load_collection`] / [`save_collection`]: JSON-array codec; absent or
//!   corrupt data loads as an empty collection, never as an error
//!
//! # Example
//!
//! ```rust
//! use tasktree_persist::{save_collection, load_collection, MemoryBackend};
//!
//! let mut backend = MemoryBackend::new();
//! save_collection(&mut backend, "allTasks", &["milk", "eggs"])?;
//!
//! let restored: Vec<String> = load_collection(&backend, "allTasks");
//! assert_eq!(restored, vec!["milk", "eggs"]);
//! # Ok::<(), tasktree_persist::PersistenceError>(())
//! ```

mod backend;
mod codec;
mod error;
mod file;

pub use backend::{MemoryBackend, StorageBackend};
pub use codec::{load_collection, save_collection};
pub use error::{PersistenceError, PersistenceResult};
pub use file::FileBackend;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
