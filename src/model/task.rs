use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a task, unique within one task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Task title text (never empty)
    pub title: String,
    pub done: bool,
}

impl Task {
    /// Create a new, not yet done task
    pub fn new(id: TaskId, title: String) -> Self {
        Task {
            id,
            title,
            done: false,
        }
    }

    /// The marker drawn in front of the title
    pub fn marker(&self) -> &'static str {
        if self.done { "[x]" } else { "[ ]" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_not_done() {
        let task = Task::new(TaskId(7), "Buy milk".into());
        assert_eq!(task.id, TaskId(7));
        assert_eq!(task.title, "Buy milk");
        assert!(!task.done);
        assert_eq!(task.marker(), "[ ]");
    }

    #[test]
    fn serializes_id_as_plain_number() {
        let mut task = Task::new(TaskId(3), "Read".into());
        task.done = true;
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"id":3,"title":"Read","done":true}"#);
    }

    #[test]
    fn display_id() {
        assert_eq!(TaskId(42).to_string(), "#42");
    }
}
