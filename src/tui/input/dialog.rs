use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

/// Keys while a dialog is open. Every key stops here.
pub(super) fn handle_dialog(app: &mut App, key: KeyEvent) {
    let Some(dialog) = app.dialog.as_mut() else {
        return;
    };
    let action = match (key.modifiers, key.code) {
        (_, KeyCode::Left | KeyCode::BackTab) | (KeyModifiers::NONE, KeyCode::Char('h')) => {
            dialog.select_prev();
            None
        }
        (_, KeyCode::Right | KeyCode::Tab) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
            dialog.select_next();
            None
        }
        (_, KeyCode::Enter) | (_, KeyCode::Char(' ')) => Some(dialog.press_selected()),
        (_, KeyCode::Esc) => Some(dialog.press_cancel()),
        (_, KeyCode::Char(c)) => dialog.press_hotkey(c),
        _ => None,
    };
    if let Some(action) = action {
        app.run_dialog_action(action);
    }
}
