//! Domain types and their persisted wire form
//!
//! Field names on the wire preserve the historical browser format:
//! `done` serializes as `check`, and sub-task fields as `upperTaskText` /
//! `mainText`, so existing persisted data keeps loading.

use serde::{Deserialize, Serialize};

/// A top-level to-do item
///
/// `text` is the identifying key within the task collection: unique
/// (exact, case-sensitive) and non-empty among all tasks at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Display text; also the identifying key
    pub text: String,

    /// Completion flag
    #[serde(rename = "check")]
    pub done: bool,
}

impl Task {
    /// Create an unfinished task
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }
}

/// A to-do item owned by one parent [`Task`]
///
/// Identified by the `(parent_text, text)` pair; pairs are unique within
/// the sub-task collection. `parent_text` is not required to reference an
/// existing task unless the store is configured with a referential check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTask {
    /// Text of the owning task
    #[serde(rename = "upperTaskText")]
    pub parent_text: String,

    /// Display text of this sub-task
    #[serde(rename = "mainText")]
    pub text: String,

    /// Completion flag
    #[serde(rename = "check")]
    pub done: bool,
}

impl SubTask {
    /// Create an unfinished sub-task under `parent_text`
    #[inline]
    #[must_use]
    pub fn new(parent_text: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            parent_text: parent_text.into(),
            text: text.into(),
            done: false,
        }
    }

    /// True when this sub-task is keyed by `(parent_text, text)`
    #[inline]
    pub(crate) fn matches(&self, parent_text: &str, text: &str) -> bool {
        self.parent_text == parent_text && self.text == text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_new_is_unfinished() {
        let task = Task::new("Buy milk");
        assert_eq!(task.text, "Buy milk");
        assert!(!task.done);
    }

    #[test]
    fn task_wire_format_uses_check() {
        let task = Task {
            text: "Buy milk".to_string(),
            done: true,
        };
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, "{\"text\":\"Buy milk\",\"check\":true}");
    }

    #[test]
    fn task_parses_observed_wire_format() {
        let task: Task = serde_json::from_str("{\"text\":\"Walk the dog\",\"check\":false}").unwrap();
        assert_eq!(task, Task::new("Walk the dog"));
    }

    #[test]
    fn subtask_wire_format_uses_upper_and_main() {
        let sub = SubTask::new("Buy milk", "2% fat");
        let json = serde_json::to_string(&sub).unwrap();
        assert_eq!(
            json,
            "{\"upperTaskText\":\"Buy milk\",\"mainText\":\"2% fat\",\"check\":false}"
        );
    }

    #[test]
    fn subtask_parses_observed_wire_format() {
        let sub: SubTask = serde_json::from_str(
            "{\"upperTaskText\":\"Buy milk\",\"mainText\":\"2% fat\",\"check\":true}",
        )
        .unwrap();
        assert_eq!(sub.parent_text, "Buy milk");
        assert_eq!(sub.text, "2% fat");
        assert!(sub.done);
    }

    #[test]
    fn subtask_matches_full_pair_only() {
        let sub = SubTask::new("Buy milk", "2% fat");
        assert!(sub.matches("Buy milk", "2% fat"));
        assert!(!sub.matches("Buy milk", "skim"));
        assert!(!sub.matches("Walk the dog", "2% fat"));
    }
}
