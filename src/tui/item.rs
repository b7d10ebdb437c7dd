use crate::model::task::{Task, TaskId};

use super::text_input::TextInput;

/// Local state of one task row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RowState {
    #[default]
    Viewing,
    /// Title being edited in place; `buffer` starts as the stored title
    Editing { buffer: TextInput },
}

/// What a row asks of the screen that owns the task list.
/// Rows never mutate the list themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowEvent {
    ToggleDone(TaskId),
    Remove(TaskId),
    Edit { id: TaskId, title: String },
}

impl RowState {
    pub fn is_editing(&self) -> bool {
        matches!(self, RowState::Editing { .. })
    }

    pub fn buffer(&self) -> Option<&TextInput> {
        match self {
            RowState::Editing { buffer } => Some(buffer),
            RowState::Viewing => None,
        }
    }

    pub fn buffer_mut(&mut self) -> Option<&mut TextInput> {
        match self {
            RowState::Editing { buffer } => Some(buffer),
            RowState::Viewing => None,
        }
    }

    /// Viewing → Editing, seeding the buffer with the task's title.
    /// Already editing: the buffer is left alone.
    pub fn start_edit(&mut self, task: &Task) {
        if !self.is_editing() {
            *self = RowState::Editing {
                buffer: TextInput::new(task.title.clone()),
            };
        }
    }

    /// Editing → Viewing, dropping the buffer
    pub fn cancel_edit(&mut self) {
        *self = RowState::Viewing;
    }

    /// Editing → Viewing, handing the buffer up as an edit.
    /// A blank buffer behaves like cancel.
    pub fn submit(&mut self, id: TaskId) -> Option<RowEvent> {
        match std::mem::take(self) {
            RowState::Editing { buffer } if !buffer.is_blank() => Some(RowEvent::Edit {
                id,
                title: buffer.value().to_string(),
            }),
            _ => None,
        }
    }

    /// Toggle request; only available while viewing
    pub fn toggle(&self, id: TaskId) -> Option<RowEvent> {
        (!self.is_editing()).then_some(RowEvent::ToggleDone(id))
    }

    /// Remove request; only available while viewing
    pub fn remove(&self, id: TaskId) -> Option<RowEvent> {
        (!self.is_editing()).then_some(RowEvent::Remove(id))
    }
}
