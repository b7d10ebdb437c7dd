use crate::model::task::TaskId;

pub const DUPLICATE_TITLE: &str = "Task já cadastrada";
pub const DUPLICATE_BODY: &str = "Você não pode cadastrar uma task com o mesmo nome";
pub const REMOVE_TITLE: &str = "Remover item";
pub const REMOVE_BODY: &str = "Tem certeza que você deseja remover este item?";

/// What happens when a dialog button is pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    /// Close the dialog, nothing else
    Dismiss,
    RemoveTask(TaskId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Default,
    /// Also pressed by Esc
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogButton {
    pub label: &'static str,
    pub style: ButtonStyle,
    pub action: DialogAction,
}

/// A modal prompt. Opening one only changes what is drawn and where keys go;
/// the button's action runs later, when the user presses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: &'static str,
    pub body: &'static str,
    pub buttons: Vec<DialogButton>,
    /// Index of the highlighted button
    pub selected: usize,
}

impl Dialog {
    /// Notice shown when adding a title that already exists
    pub fn duplicate_task() -> Self {
        Dialog {
            title: DUPLICATE_TITLE,
            body: DUPLICATE_BODY,
            buttons: vec![DialogButton {
                label: "OK",
                style: ButtonStyle::Cancel,
                action: DialogAction::Dismiss,
            }],
            selected: 0,
        }
    }

    /// Confirmation before removing a task
    pub fn confirm_remove(id: TaskId) -> Self {
        Dialog {
            title: REMOVE_TITLE,
            body: REMOVE_BODY,
            buttons: vec![
                DialogButton {
                    label: "Sim",
                    style: ButtonStyle::Default,
                    action: DialogAction::RemoveTask(id),
                },
                DialogButton {
                    label: "Não",
                    style: ButtonStyle::Cancel,
                    action: DialogAction::Dismiss,
                },
            ],
            selected: 0,
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.buttons.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + self.buttons.len() - 1) % self.buttons.len();
    }

    /// Action of the highlighted button
    pub fn press_selected(&self) -> DialogAction {
        self.buttons
            .get(self.selected)
            .map_or(DialogAction::Dismiss, |b| b.action)
    }

    /// Action of the button whose label starts with `c` (case-insensitive)
    pub fn press_hotkey(&self, c: char) -> Option<DialogAction> {
        let c = c.to_lowercase().next()?;
        self.buttons
            .iter()
            .find(|b| b.label.chars().next().and_then(|f| f.to_lowercase().next()) == Some(c))
            .map(|b| b.action)
    }

    /// Action of the first cancel-style button, or dismiss if none
    pub fn press_cancel(&self) -> DialogAction {
        self.buttons
            .iter()
            .find(|b| b.style == ButtonStyle::Cancel)
            .map_or(DialogAction::Dismiss, |b| b.action)
    }
}
