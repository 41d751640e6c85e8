//! The task store
//!
//! Owns the in-memory task and sub-task collections, enforces uniqueness
//! and cascade invariants, and mirrors every mutation to the configured
//! backend. The UI layer is a thin consumer: it calls an operation and
//! re-renders from the returned state, it never holds a mutable reference
//! into the collections.

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::types::{SubTask, Task};
use tasktree_persist::{load_collection, save_collection, PersistenceResult, StorageBackend};

/// Two-level to-do list state with write-through persistence
///
/// Every operation is synchronous and runs to completion before the next
/// begins; mutations take `&mut self`, so a store is never shared across
/// threads. Readers receive defensive copies.
///
/// Mutations apply in memory first and then persist. A failed write is
/// surfaced as [`StoreError::Persistence`] with the in-memory state left
/// ahead of the persisted state; the caller decides whether to retry.
#[derive(Debug)]
pub struct TaskStore<B: StorageBackend> {
    backend: B,
    config: StoreConfig,
    tasks: Vec<Task>,
    subtasks: Vec<SubTask>,
}

impl<B: StorageBackend> TaskStore<B> {
    /// Create a store with the default configuration, rehydrating both
    /// collections from `backend`
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, StoreConfig::default())
    }

    /// Create a store with an explicit configuration
    ///
    /// Corrupt persisted content loads as an empty collection, and records
    /// whose text is empty are dropped during rehydration.
    #[must_use]
    pub fn with_config(backend: B, config: StoreConfig) -> Self {
        let mut tasks: Vec<Task> = load_collection(&backend, &config.task_key);
        tasks.retain(|task| !task.text.is_empty());

        let mut subtasks: Vec<SubTask> = load_collection(&backend, &config.subtask_key);
        subtasks.retain(|sub| !sub.text.is_empty());

        tracing::debug!(
            "rehydrated {} task(s), {} sub-task(s)",
            tasks.len(),
            subtasks.len()
        );
        Self {
            backend,
            config,
            tasks,
            subtasks,
        }
    }

    /// All tasks in insertion order (defensive copy)
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Sub-tasks of `parent_text` in insertion order (defensive copy)
    #[must_use]
    pub fn subtasks(&self, parent_text: &str) -> Vec<SubTask> {
        self.subtasks
            .iter()
            .filter(|sub| sub.parent_text == parent_text)
            .cloned()
            .collect()
    }

    /// Configuration in effect
    #[inline]
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Add a task
    ///
    /// The text is trimmed first; empty text is rejected. Duplicate
    /// detection is exact and case-sensitive. On failure nothing is
    /// mutated or written.
    pub fn add_task(&mut self, text: &str) -> StoreResult<Task> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }
        if self.tasks.iter().any(|task| task.text == text) {
            return Err(StoreError::DuplicateTask(text.to_string()));
        }

        let task = Task::new(text);
        self.tasks.push(task.clone());
        self.persist_tasks()?;
        tracing::debug!("added task '{}'", task.text);
        Ok(task)
    }

    /// Remove a task and cascade-remove its sub-tasks
    ///
    /// After this returns `Ok`, the persisted state holds no sub-task
    /// whose parent is the removed task.
    pub fn remove_task(&mut self, text: &str) -> StoreResult<()> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.text == text)
            .ok_or_else(|| StoreError::NotFound(text.to_string()))?;
        self.tasks.remove(index);

        let before = self.subtasks.len();
        self.subtasks.retain(|sub| sub.parent_text != text);
        let cascaded = before - self.subtasks.len();

        self.persist_tasks()?;
        self.persist_subtasks()?;
        tracing::debug!("removed task '{}' and {} sub-task(s)", text, cascaded);
        Ok(())
    }

    /// Flip a task's completion flag, returning the updated task
    ///
    /// Toggling twice restores the original value.
    pub fn toggle_task(&mut self, text: &str) -> StoreResult<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.text == text)
            .ok_or_else(|| StoreError::NotFound(text.to_string()))?;
        task.done = !task.done;
        let updated = task.clone();

        self.persist_tasks()?;
        Ok(updated)
    }

    /// Add a sub-task under `parent_text`
    ///
    /// The parent is not required to exist unless the store was configured
    /// with `require_existing_parent`. The sub-task text is trimmed and
    /// must be non-empty; the `(parent_text, text)` pair must be unique.
    pub fn add_subtask(&mut self, parent_text: &str, text: &str) -> StoreResult<SubTask> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }
        if self.config.require_existing_parent
            && !self.tasks.iter().any(|task| task.text == parent_text)
        {
            return Err(StoreError::UnknownParent(parent_text.to_string()));
        }
        if self.subtasks.iter().any(|sub| sub.matches(parent_text, text)) {
            return Err(StoreError::DuplicateTask(StoreError::subtask_key(
                parent_text,
                text,
            )));
        }

        let subtask = SubTask::new(parent_text, text);
        self.subtasks.push(subtask.clone());
        self.persist_subtasks()?;
        tracing::debug!("added sub-task '{}' under '{}'", subtask.text, parent_text);
        Ok(subtask)
    }

    /// Remove a single sub-task
    pub fn remove_subtask(&mut self, parent_text: &str, text: &str) -> StoreResult<()> {
        let index = self
            .subtasks
            .iter()
            .position(|sub| sub.matches(parent_text, text))
            .ok_or_else(|| StoreError::NotFound(StoreError::subtask_key(parent_text, text)))?;
        self.subtasks.remove(index);

        self.persist_subtasks()?;
        Ok(())
    }

    /// Flip a sub-task's completion flag, returning the updated sub-task
    pub fn toggle_subtask(&mut self, parent_text: &str, text: &str) -> StoreResult<SubTask> {
        let subtask = self
            .subtasks
            .iter_mut()
            .find(|sub| sub.matches(parent_text, text))
            .ok_or_else(|| StoreError::NotFound(StoreError::subtask_key(parent_text, text)))?;
        subtask.done = !subtask.done;
        let updated = subtask.clone();

        self.persist_subtasks()?;
        Ok(updated)
    }

    /// Empty both collections and persist both as empty arrays
    ///
    /// Never fails with `DuplicateTask` or `NotFound`; only a rejected
    /// write can surface here.
    pub fn clear_all(&mut self) -> PersistenceResult<()> {
        self.tasks.clear();
        self.subtasks.clear();
        self.persist_tasks()?;
        self.persist_subtasks()?;
        tracing::info!("cleared all tasks and sub-tasks");
        Ok(())
    }

    /// Consume the store, returning the backend
    ///
    /// Useful for handing the persisted state to a fresh store in tests.
    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }

    fn persist_tasks(&mut self) -> PersistenceResult<()> {
        save_collection(&mut self.backend, &self.config.task_key, &self.tasks)
    }

    fn persist_subtasks(&mut self) -> PersistenceResult<()> {
        save_collection(&mut self.backend, &self.config.subtask_key, &self.subtasks)
    }
}
