//! Testing utilities for the tasktree workspace
//!
//! Shared store fixtures and sample data.

#![allow(missing_docs)]

use tasktree_persist::MemoryBackend;
use tasktree_store::{StoreConfig, TaskStore};

pub const SAMPLE_TASKS: [&str; 3] = ["Buy milk", "Walk the dog", "Write report"];

/// Store over a fresh unbounded in-memory backend.
pub fn memory_store() -> TaskStore<MemoryBackend> {
    TaskStore::new(MemoryBackend::new())
}

/// Store that rejects sub-tasks whose parent task does not exist.
pub fn strict_store() -> TaskStore<MemoryBackend> {
    TaskStore::with_config(
        MemoryBackend::new(),
        StoreConfig::new().with_required_parent(true),
    )
}

/// Store pre-seeded with tasks and `(parent, text)` sub-task pairs.
pub fn seeded_store(tasks: &[&str], subtasks: &[(&str, &str)]) -> TaskStore<MemoryBackend> {
    let mut store = memory_store();
    for text in tasks {
        store.add_task(text).unwrap();
    }
    for (parent, text) in subtasks {
        store.add_subtask(parent, text).unwrap();
    }
    store
}

/// Store holding the three sample tasks, no sub-tasks.
pub fn sample_store() -> TaskStore<MemoryBackend> {
    seeded_store(&SAMPLE_TASKS, &[])
}
