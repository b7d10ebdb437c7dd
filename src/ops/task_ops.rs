use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::model::task::{Task, TaskId};

/// Hands out task IDs in strictly increasing order, starting at 1.
/// IDs are never reused, even after the task holding one is removed.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator { next: 1 }
    }
}

impl IdGenerator {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next += 1;
        id
    }
}

/// Result of [`TaskList::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The task was appended with this ID
    Added(TaskId),
    /// A task with exactly this title already exists; nothing changed
    Duplicate,
    /// The title was empty or whitespace only; nothing changed
    Blank,
}

/// Whether `add` refuses titles that already exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    Reject,
    Allow,
}

/// The ordered task collection.
///
/// Tasks keep insertion order; new tasks go to the end and nothing ever
/// re-sorts. Every lookup is by ID, and an unknown ID is a no-op rather
/// than an error.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: IndexMap<TaskId, Task>,
    ids: IdGenerator,
}

/// Serializes as a plain array of tasks in display order
impl Serialize for TaskList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.tasks.values())
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Task at a display position
    pub fn get_index(&self, index: usize) -> Option<&Task> {
        self.tasks.get_index(index).map(|(_, task)| task)
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.tasks.values().any(|t| t.title == title)
    }

    /// Append a new task with a fresh ID.
    ///
    /// The title is stored as given. Blank titles are refused, and so are
    /// exact duplicates of an existing title when `policy` is `Reject`.
    pub fn add(&mut self, title: &str, policy: DuplicatePolicy) -> AddOutcome {
        if title.trim().is_empty() {
            return AddOutcome::Blank;
        }
        if policy == DuplicatePolicy::Reject && self.contains_title(title) {
            return AddOutcome::Duplicate;
        }
        let id = self.ids.next_id();
        self.tasks.insert(id, Task::new(id, title.to_string()));
        AddOutcome::Added(id)
    }

    /// Flip the done flag. Returns the new value, or `None` if no task has `id`.
    pub fn toggle_done(&mut self, id: TaskId) -> Option<bool> {
        let task = self.tasks.get_mut(&id)?;
        task.done = !task.done;
        Some(task.done)
    }

    /// Remove a task, keeping the order of the rest.
    /// Returns the removed task, or `None` if no task has `id`.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        self.tasks.shift_remove(&id)
    }

    /// Replace a task's title. No duplicate check is made.
    /// Returns `false` if no task has `id`.
    pub fn edit(&mut self, id: TaskId, new_title: &str) -> bool {
        match self.tasks.get_mut(&id) {
            Some(task) => {
                task.title = new_title.to_string();
                true
            }
            None => false,
        }
    }
}
