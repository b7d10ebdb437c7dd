use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::ConfigError;
use crate::model::config::AppConfig;
use crate::model::task::TaskId;
use crate::ops::task_ops::{AddOutcome, DuplicatePolicy, TaskList};

use super::dialog::{Dialog, DialogAction};
use super::input;
use super::item::{RowEvent, RowState};
use super::list::{RowStates, prune_rows};
use super::render;
use super::text_input::TextInput;
use super::theme::Theme;

/// Which text field or list receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The "new task" field above the list
    NewTask,
    /// The task list (a row may be editing its title)
    List,
}

/// Add/remove policies in effect for this session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub duplicate_policy: DuplicatePolicy,
    pub confirm_remove: bool,
    pub show_key_hints: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            duplicate_policy: DuplicatePolicy::Reject,
            confirm_remove: true,
            show_key_hints: true,
        }
    }
}

impl Settings {
    pub fn from_config(config: &AppConfig) -> Self {
        Settings {
            duplicate_policy: if config.behavior.reject_duplicates {
                DuplicatePolicy::Reject
            } else {
                DuplicatePolicy::Allow
            },
            confirm_remove: config.behavior.confirm_remove,
            show_key_hints: config.ui.show_key_hints,
        }
    }
}

/// The to-do screen.
///
/// Owns the task list; rows and dialogs only ever reach it through
/// `handle_row_event` and `run_dialog_action`.
pub struct App {
    pub tasks: TaskList,
    /// Local state of rows that are editing, keyed by task ID
    pub rows: RowStates,
    pub focus: Focus,
    /// Cursor index into the task list
    pub cursor: usize,
    /// First visible row of the task list
    pub scroll_offset: usize,
    pub new_task: TextInput,
    /// Open modal dialog; while set it receives all input
    pub dialog: Option<Dialog>,
    pub status_message: Option<String>,
    pub should_quit: bool,
    pub theme: Theme,
    pub settings: Settings,
}

impl App {
    pub fn new(settings: Settings, theme: Theme) -> Self {
        App {
            tasks: TaskList::new(),
            rows: RowStates::new(),
            focus: Focus::NewTask,
            cursor: 0,
            scroll_offset: 0,
            new_task: TextInput::default(),
            dialog: None,
            status_message: None,
            should_quit: false,
            theme,
            settings,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let theme = Theme::from_config(&config.ui)?;
        Ok(App::new(Settings::from_config(config), theme))
    }

    /// Add a task. A duplicate title opens the "already added" notice.
    pub fn add_task(&mut self, title: &str) -> AddOutcome {
        let outcome = self.tasks.add(title, self.settings.duplicate_policy);
        match outcome {
            AddOutcome::Added(id) => {
                log::info!("event=task_added id={} title_len={}", id.0, title.len());
            }
            AddOutcome::Duplicate => {
                log::debug!("event=task_add_rejected reason=duplicate");
                self.dialog = Some(Dialog::duplicate_task());
            }
            AddOutcome::Blank => {}
        }
        outcome
    }

    /// Add the text of the new-task field; the field clears on success.
    pub fn submit_new_task(&mut self) {
        let title = self.new_task.value().to_string();
        if let AddOutcome::Added(_) = self.add_task(&title) {
            self.new_task.clear();
        }
    }

    /// Add tasks before the screen opens. Rejected titles are skipped.
    pub fn seed_tasks<I, S>(&mut self, titles: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for title in titles {
            match self.tasks.add(title.as_ref(), self.settings.duplicate_policy) {
                AddOutcome::Added(id) => log::info!("event=task_seeded id={}", id.0),
                rejected => log::warn!("event=task_seed_skipped reason={:?}", rejected),
            }
        }
    }

    pub fn toggle_task_done(&mut self, id: TaskId) {
        if let Some(done) = self.tasks.toggle_done(id) {
            log::debug!("event=task_toggled id={} done={}", id.0, done);
        }
    }

    /// Ask to remove a task: opens the confirmation dialog, or removes
    /// right away when confirmation is turned off.
    pub fn request_remove(&mut self, id: TaskId) {
        if self.tasks.get(id).is_none() {
            return;
        }
        if self.settings.confirm_remove {
            self.dialog = Some(Dialog::confirm_remove(id));
        } else {
            self.remove_task(id);
        }
    }

    pub fn remove_task(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.remove(id) {
            log::info!("event=task_removed id={}", id.0);
            self.status_message = Some(format!("removed \"{}\"", task.title));
            prune_rows(&mut self.rows, &self.tasks);
            self.clamp_cursor();
        }
    }

    pub fn edit_task(&mut self, id: TaskId, title: &str) {
        if self.tasks.edit(id, title) {
            log::info!("event=task_edited id={} title_len={}", id.0, title.len());
        }
    }

    /// Apply a request coming up from a row
    pub fn handle_row_event(&mut self, event: RowEvent) {
        match event {
            RowEvent::ToggleDone(id) => self.toggle_task_done(id),
            RowEvent::Remove(id) => self.request_remove(id),
            RowEvent::Edit { id, title } => self.edit_task(id, &title),
        }
    }

    /// Close the open dialog and run the pressed button's action
    pub fn run_dialog_action(&mut self, action: DialogAction) {
        self.dialog = None;
        match action {
            DialogAction::Dismiss => {}
            DialogAction::RemoveTask(id) => self.remove_task(id),
        }
    }

    /// ID of the task under the cursor
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.tasks.get_index(self.cursor).map(|t| t.id)
    }

    /// ID of the row currently editing its title, if any
    pub fn editing_row(&self) -> Option<TaskId> {
        self.rows
            .iter()
            .find(|(_, state)| state.is_editing())
            .map(|(id, _)| *id)
    }

    pub fn row_state_mut(&mut self, id: TaskId) -> &mut RowState {
        self.rows.entry(id).or_default()
    }

    pub fn clamp_cursor(&mut self) {
        let count = self.tasks.len();
        if count == 0 {
            self.cursor = 0;
            if self.focus == Focus::List {
                self.focus = Focus::NewTask;
            }
        } else {
            self.cursor = self.cursor.min(count - 1);
        }
    }

    /// Adjust `scroll_offset` so the cursor row is inside a window of `height` rows
    pub fn scroll_to_cursor(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
        let max_offset = self.tasks.len().saturating_sub(height);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}

/// Run the TUI until the user quits. Returns the app so the caller can
/// report the final task list.
pub fn run(mut app: App) -> Result<App, Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    log::info!("event=app_exit tasks={}", app.tasks.len());
    result.map(|()| app)
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
