use crossterm::event::{KeyCode, KeyEvent};

use crate::model::task::TaskId;
use crate::tui::app::{App, Focus};
use crate::tui::item::RowState;

/// Keys while the task list has focus and no row is editing
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // Cursor movement
        KeyCode::Up | KeyCode::Char('k') => {
            if app.cursor == 0 {
                app.focus = Focus::NewTask;
            } else {
                app.cursor -= 1;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.cursor + 1 < app.tasks.len() {
                app.cursor += 1;
            }
        }
        KeyCode::Home | KeyCode::Char('g') => app.cursor = 0,
        KeyCode::End | KeyCode::Char('G') => {
            app.cursor = app.tasks.len().saturating_sub(1);
        }

        // Row controls
        KeyCode::Char(' ') | KeyCode::Char('x') => toggle_selected(app),
        KeyCode::Enter | KeyCode::Char('e') => start_edit_selected(app),
        KeyCode::Delete | KeyCode::Char('d') => remove_selected(app),

        // Back to the new-task field
        KeyCode::Tab | KeyCode::Esc | KeyCode::Char('i' | 'a' | '/') => {
            app.focus = Focus::NewTask;
        }
        _ => {}
    }
}

fn selected_row(app: &App) -> Option<(TaskId, RowState)> {
    let id = app.selected_task_id()?;
    let state = app.rows.get(&id).cloned().unwrap_or_default();
    Some((id, state))
}

pub(super) fn toggle_selected(app: &mut App) {
    if let Some((id, row)) = selected_row(app)
        && let Some(event) = row.toggle(id)
    {
        app.handle_row_event(event);
    }
}

pub(super) fn remove_selected(app: &mut App) {
    if let Some((id, row)) = selected_row(app)
        && let Some(event) = row.remove(id)
    {
        app.handle_row_event(event);
    }
}

/// Put the row under the cursor into edit mode, focusing its text field
pub(super) fn start_edit_selected(app: &mut App) {
    let Some(id) = app.selected_task_id() else {
        return;
    };
    let Some(task) = app.tasks.get(id).cloned() else {
        return;
    };
    app.focus = Focus::List;
    app.row_state_mut(id).start_edit(&task);
}
