use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::task::TaskId;
use crate::tui::app::{App, Focus};
use crate::tui::list::prune_rows;
use crate::tui::text_input::TextInput;

/// Apply a line-editing key to a text field. Returns false for keys that
/// are not text editing, so the caller can treat them as commands.
pub(super) fn edit_text(input: &mut TextInput, key: KeyEvent) -> bool {
    let word = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match (key.modifiers, key.code) {
        (m, KeyCode::Char(c)) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            input.insert(c);
        }
        (KeyModifiers::CONTROL, KeyCode::Char('a')) | (_, KeyCode::Home) => input.home(),
        (KeyModifiers::CONTROL, KeyCode::Char('e')) | (_, KeyCode::End) => input.end(),
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => input.clear(),
        (KeyModifiers::CONTROL, KeyCode::Char('w')) => input.delete_word(),
        (_, KeyCode::Backspace) if word => input.delete_word(),
        (_, KeyCode::Backspace) => input.backspace(),
        (_, KeyCode::Delete) => input.delete(),
        (_, KeyCode::Left) if word => input.word_left(),
        (_, KeyCode::Left) => input.move_left(),
        (_, KeyCode::Right) if word => input.word_right(),
        (_, KeyCode::Right) => input.move_right(),
        _ => return false,
    }
    true
}

/// Keys while the new-task field has focus
pub(super) fn handle_new_task(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_new_task(),
        KeyCode::Tab | KeyCode::Down => {
            if !app.tasks.is_empty() {
                app.focus = Focus::List;
            }
        }
        KeyCode::Esc => app.new_task.clear(),
        _ => {
            edit_text(&mut app.new_task, key);
        }
    }
}

/// Keys while a row is editing its title: Enter submits, Esc cancels,
/// everything else edits the buffer.
pub(super) fn handle_row_edit(app: &mut App, id: TaskId, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            let event = app.row_state_mut(id).submit(id);
            prune_rows(&mut app.rows, &app.tasks);
            if let Some(event) = event {
                app.handle_row_event(event);
            }
        }
        KeyCode::Esc => {
            app.row_state_mut(id).cancel_edit();
            prune_rows(&mut app.rows, &app.tasks);
        }
        _ => {
            if let Some(buffer) = app.row_state_mut(id).buffer_mut() {
                edit_text(buffer, key);
            }
        }
    }
}
