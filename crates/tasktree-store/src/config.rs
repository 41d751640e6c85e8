//! Store configuration

/// Default persisted key for the task collection
pub const TASK_KEY: &str = "allTasks";

/// Default persisted key for the sub-task collection
pub const SUBTASK_KEY: &str = "innerTasks";

/// Configuration for a [`TaskStore`](crate::TaskStore)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key the task collection is persisted under
    pub task_key: String,

    /// Key the sub-task collection is persisted under
    pub subtask_key: String,

    /// Reject `add_subtask` when no task carries the given parent text
    ///
    /// Off by default: the observed source designs allow orphan sub-tasks
    /// and leave referential checks to the UI.
    pub require_existing_parent: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            task_key: TASK_KEY.to_string(),
            subtask_key: SUBTASK_KEY.to_string(),
            require_existing_parent: false,
        }
    }
}

impl StoreConfig {
    /// Create the default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the persisted key for the task collection
    #[inline]
    #[must_use]
    pub fn with_task_key(mut self, key: impl Into<String>) -> Self {
        self.task_key = key.into();
        self
    }

    /// Set the persisted key for the sub-task collection
    #[inline]
    #[must_use]
    pub fn with_subtask_key(mut self, key: impl Into<String>) -> Self {
        self.subtask_key = key.into();
        self
    }

    /// Enable or disable the referential check on sub-task parents
    #[inline]
    #[must_use]
    pub fn with_required_parent(mut self, required: bool) -> Self {
        self.require_existing_parent = required;
        self
    }
}
