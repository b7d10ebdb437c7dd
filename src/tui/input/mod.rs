mod dialog;
mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};

// Import all submodule functions into this module's namespace
// so that submodules can access cross-module functions via `use super::*;`
#[allow(unused_imports)]
use dialog::*;
#[allow(unused_imports)]
use edit::*;
#[allow(unused_imports)]
use navigate::*;

/// Handle a key event: dialog first, then an editing row, then whatever has focus
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }
    app.status_message = None;

    if app.dialog.is_some() {
        handle_dialog(app, key);
        return;
    }

    if let Some(id) = app.editing_row() {
        handle_row_edit(app, id, key);
        return;
    }

    match app.focus {
        Focus::NewTask => handle_new_task(app, key),
        Focus::List => handle_navigate(app, key),
    }
}

/// Handle a bracketed paste event (terminal sends pasted text as a single string).
/// Goes to whichever text field has focus; ignored while a dialog is open.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.dialog.is_some() || text.is_empty() {
        return;
    }
    if let Some(id) = app.editing_row() {
        if let Some(buffer) = app.row_state_mut(id).buffer_mut() {
            buffer.insert_str(text);
        }
        return;
    }
    if app.focus == Focus::NewTask {
        app.new_task.insert_str(text);
    }
}
