use std::collections::HashMap;

use crate::model::task::TaskId;
use crate::ops::task_ops::TaskList;

use super::item::RowState;

/// Per-row local state, keyed by task ID so a row keeps its edit state
/// while sibling rows come and go. Rows absent from the map are viewing.
pub type RowStates = HashMap<TaskId, RowState>;

/// What one rendered row shows and which of its controls are enabled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: TaskId,
    /// Edit buffer while editing, stored title otherwise
    pub title: String,
    pub done: bool,
    pub marker: &'static str,
    pub editing: bool,
    /// Cursor position inside `title` (byte offset) while editing
    pub edit_cursor: Option<usize>,
    pub can_toggle: bool,
    pub can_edit: bool,
    pub can_cancel: bool,
    pub can_remove: bool,
}

/// One row per task, in list order.
pub fn row_views(tasks: &TaskList, rows: &RowStates) -> Vec<RowView> {
    tasks
        .iter()
        .map(|task| {
            let buffer = rows.get(&task.id).and_then(RowState::buffer);
            let editing = buffer.is_some();
            RowView {
                id: task.id,
                title: buffer.map_or_else(|| task.title.clone(), |b| b.value().to_string()),
                done: task.done,
                marker: task.marker(),
                editing,
                edit_cursor: buffer.map(|b| b.cursor()),
                can_toggle: !editing,
                can_edit: !editing,
                can_cancel: editing,
                can_remove: !editing,
            }
        })
        .collect()
}

/// Drop state for rows whose task no longer exists, and rows that went
/// back to viewing.
pub fn prune_rows(rows: &mut RowStates, tasks: &TaskList) {
    rows.retain(|id, state| state.is_editing() && tasks.get(*id).is_some());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::task_ops::{AddOutcome, DuplicatePolicy};
    use pretty_assertions::assert_eq;

    fn list_of(titles: &[&str]) -> (TaskList, Vec<TaskId>) {
        let mut list = TaskList::new();
        let ids = titles
            .iter()
            .map(|t| match list.add(t, DuplicatePolicy::Reject) {
                AddOutcome::Added(id) => id,
                other => panic!("unexpected {:?}", other),
            })
            .collect();
        (list, ids)
    }

    #[test]
    fn one_view_per_task_in_order() {
        let (mut list, ids) = list_of(&["a", "b", "c"]);
        list.toggle_done(ids[1]);
        let views = row_views(&list, &RowStates::new());
        assert_eq!(views.iter().map(|v| v.id).collect::<Vec<_>>(), ids);
        assert_eq!(
            views.iter().map(|v| v.title.as_str()).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
        assert!(!views[0].done);
        assert!(views[1].done);
        assert_eq!(views[0].marker, "[ ]");
        assert_eq!(views[1].marker, "[x]");
        assert!(views.iter().all(|v| v.can_toggle && v.can_remove && !v.editing));
    }

    #[test]
    fn editing_row_shows_buffer_and_disables_controls() {
        let (list, ids) = list_of(&["a", "b"]);
        let mut rows = RowStates::new();
        let state = rows.entry(ids[0]).or_default();
        state.start_edit(list.get(ids[0]).unwrap());
        state.buffer_mut().unwrap().insert('!');

        let views = row_views(&list, &rows);
        assert_eq!(views[0].title, "a!");
        assert!(views[0].editing);
        assert_eq!(views[0].edit_cursor, Some(2));
        assert!(!views[0].can_toggle);
        assert!(!views[0].can_remove);
        assert!(views[0].can_cancel);
        assert!(!views[1].editing);
        assert_eq!(views[1].title, "b");
    }

    #[test]
    fn edit_state_survives_sibling_removal() {
        let (mut list, ids) = list_of(&["a", "b", "c"]);
        let mut rows = RowStates::new();
        rows.entry(ids[2])
            .or_default()
            .start_edit(list.get(ids[2]).unwrap());

        list.remove(ids[0]);
        prune_rows(&mut rows, &list);

        let views = row_views(&list, &rows);
        assert_eq!(views.len(), 2);
        assert!(views[1].editing);
        assert_eq!(views[1].id, ids[2]);
    }

    #[test]
    fn prune_drops_removed_and_viewing_rows() {
        let (mut list, ids) = list_of(&["a", "b"]);
        let mut rows = RowStates::new();
        rows.entry(ids[0])
            .or_default()
            .start_edit(list.get(ids[0]).unwrap());
        rows.insert(ids[1], RowState::Viewing);
        list.remove(ids[0]);
        prune_rows(&mut rows, &list);
        assert!(rows.is_empty());
    }
}
