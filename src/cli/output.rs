use serde::Serialize;

use crate::ops::task_ops::TaskList;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskListJson<'a> {
    pub total: usize,
    pub done: usize,
    pub tasks: &'a TaskList,
}

impl<'a> TaskListJson<'a> {
    pub fn new(tasks: &'a TaskList) -> Self {
        TaskListJson {
            total: tasks.len(),
            done: tasks.iter().filter(|t| t.done).count(),
            tasks,
        }
    }
}
