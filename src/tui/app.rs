use std::io;
use std::path::PathBuf;
use std::time::Duration;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};
use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::bridge::{HostBridge, LocalBridge, MemoryBridge};
use crate::io::config_io::read_config;
use crate::model::{AppConfig, Todo, TodoDraft, UiConfig};
use crate::session::{Session, SessionError};

use super::editor::TextField;
use super::input;
use super::render;
use super::theme::Theme;

/// Which screen is displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// The task list
    List,
    /// The create-task form
    Create,
    /// The edit form for the task with this id
    Edit { id: String },
}

/// Which form input has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Text,
}

/// Inputs of the create or edit form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub title: TextField,
    pub text: TextField,
    pub focus: FormField,
}

impl Default for FormState {
    fn default() -> Self {
        FormState {
            title: TextField::single_line(),
            text: TextField::multiline(),
            focus: FormField::Title,
        }
    }
}

impl FormState {
    pub fn from_todo(todo: &Todo) -> Self {
        let mut form = FormState::default();
        form.title.set_text(&todo.title);
        form.text.set_text(&todo.text);
        form
    }

    pub fn draft(&self) -> TodoDraft {
        TodoDraft::new(self.title.text(), self.text.text())
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.text.clear();
        self.focus = FormField::Title;
    }

    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Text => &mut self.text,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Text,
            FormField::Text => FormField::Title,
        };
    }
}

/// Main application state
pub struct App {
    pub session: Session,
    pub view: View,
    pub should_quit: bool,
    pub theme: Theme,
    /// Index of the selected task in the list
    pub cursor: usize,
    /// First visible line of the list (adjusted during render)
    pub scroll: usize,
    /// Create form; kept when navigating back, cleared after a successful add
    pub create_form: FormState,
    pub edit_form: FormState,
    /// Task awaiting delete confirmation
    pub pending_delete: Option<String>,
    /// Transient message shown in the status row
    pub status_message: Option<String>,
    pub status_is_error: bool,
    pub show_key_hints: bool,
    pub date_format: String,
}

impl App {
    pub fn new(session: Session, ui: &UiConfig) -> Self {
        let date_format = if is_valid_date_format(&ui.date_format) {
            ui.date_format.clone()
        } else {
            tracing::warn!(format = %ui.date_format, "invalid date_format, using default");
            UiConfig::default().date_format
        };

        App {
            session,
            view: View::List,
            should_quit: false,
            theme: Theme::from_config(ui),
            cursor: 0,
            scroll: 0,
            create_form: FormState::default(),
            edit_form: FormState::default(),
            pending_delete: None,
            status_message: None,
            status_is_error: false,
            show_key_hints: ui.show_key_hints,
            date_format,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        self.session.todos().as_slice()
    }

    pub fn selected_todo(&self) -> Option<&Todo> {
        self.todos().get(self.cursor)
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let count = self.todos().len();
        if count == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(count - 1);
    }

    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.todos().len().saturating_sub(1));
    }

    /// The form behind the current view, if any
    pub fn active_form_mut(&mut self) -> Option<&mut FormState> {
        match self.view {
            View::List => None,
            View::Create => Some(&mut self.create_form),
            View::Edit { .. } => Some(&mut self.edit_form),
        }
    }

    pub fn active_form(&self) -> Option<&FormState> {
        match self.view {
            View::List => None,
            View::Create => Some(&self.create_form),
            View::Edit { .. } => Some(&self.edit_form),
        }
    }

    /// Format a creation instant for display in local time
    pub fn format_date(&self, at: &DateTime<Utc>) -> String {
        at.with_timezone(&Local).format(&self.date_format).to_string()
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = false;
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = true;
    }

    pub fn open_create(&mut self) {
        self.view = View::Create;
    }

    /// Open the edit form pre-filled from the selected task
    pub fn open_edit(&mut self) {
        let Some(todo) = self.selected_todo() else {
            return;
        };
        let id = todo.id.clone();
        let form = FormState::from_todo(todo);
        self.edit_form = form;
        self.view = View::Edit { id };
    }

    pub fn back_to_list(&mut self) {
        self.view = View::List;
    }

    /// Submit the create or edit form
    pub fn submit_form(&mut self) {
        match self.view.clone() {
            View::List => {}
            View::Create => self.submit_create(),
            View::Edit { id } => self.submit_edit(&id),
        }
    }

    fn submit_create(&mut self) {
        let draft = self.create_form.draft();
        match self.session.add(&draft) {
            Ok(_) => {
                self.finish_create();
                self.notify("task created");
            }
            Err(SessionError::Invalid(e)) => self.notify_error(e.to_string()),
            Err(e @ SessionError::NotSaved(_)) => {
                self.finish_create();
                self.notify_error(e.to_string());
            }
        }
    }

    fn finish_create(&mut self) {
        self.create_form.clear();
        self.cursor = self.todos().len().saturating_sub(1);
        self.view = View::List;
    }

    fn submit_edit(&mut self, id: &str) {
        let draft = self.edit_form.draft();
        match self.session.update(id, &draft) {
            Ok(true) => {
                self.view = View::List;
                self.notify("task saved");
            }
            Ok(false) => self.view = View::List,
            Err(SessionError::Invalid(e)) => self.notify_error(e.to_string()),
            Err(e @ SessionError::NotSaved(_)) => {
                self.view = View::List;
                self.notify_error(e.to_string());
            }
        }
    }

    /// Ask for confirmation before deleting the selected task
    pub fn request_delete(&mut self) {
        if let Some(todo) = self.selected_todo() {
            self.pending_delete = Some(todo.id.clone());
        }
    }

    pub fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        match self.session.delete(&id) {
            Ok(true) => self.notify("task deleted"),
            Ok(false) => {}
            Err(e) => self.notify_error(e.to_string()),
        }
        self.clamp_cursor();
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }
}

fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Restore the list cursor from .state.json
pub fn restore_ui_state(app: &mut App) {
    use crate::io::state::read_ui_state;

    let Some(dir) = app.session.data_dir() else {
        return;
    };
    let Some(ui_state) = read_ui_state(dir) else {
        return;
    };

    app.cursor = ui_state
        .selected_id
        .and_then(|id| app.session.todos().position(&id))
        .unwrap_or(ui_state.cursor);
    app.clamp_cursor();
}

/// Save the list cursor to .state.json
pub fn save_ui_state(app: &App) {
    use crate::io::state::{UiState, write_ui_state};

    let Some(dir) = app.session.data_dir() else {
        return;
    };
    let ui_state = UiState {
        selected_id: app.selected_todo().map(|t| t.id.clone()),
        cursor: app.cursor,
    };
    if let Err(e) = write_ui_state(dir, &ui_state) {
        tracing::warn!(error = %e, "could not save UI state");
    }
}

/// How to start the TUI
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub data_dir: PathBuf,
    /// Use an in-memory host instead of the data directory
    pub ephemeral: bool,
}

/// Build the host bridge and the UI config for these options
fn open_host(
    options: &RunOptions,
) -> Result<(Box<dyn HostBridge>, UiConfig), Box<dyn std::error::Error>> {
    if options.ephemeral {
        let bridge: Box<dyn HostBridge> = Box::new(MemoryBridge::new());
        return Ok((bridge, UiConfig::default()));
    }
    // A broken todo.toml resurfaces as a profile notice in Session::load
    let config = read_config(&options.data_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "using default config");
        AppConfig::default()
    });
    let bridge: Box<dyn HostBridge> = Box::new(LocalBridge::open(&options.data_dir)?);
    Ok((bridge, config.ui))
}

/// Run the TUI application
pub fn run(options: &RunOptions) -> Result<(), Box<dyn std::error::Error>> {
    let (bridge, ui) = open_host(options)?;
    let (session, notices) = Session::load(bridge);

    let mut app = App::new(session, &ui);
    if !notices.is_empty() {
        app.notify_error(notices.join("; "));
    }
    restore_ui_state(&mut app);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    save_ui_state(&app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    tracing::info!(tasks = app.todos().len(), "session closed");
    result
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
