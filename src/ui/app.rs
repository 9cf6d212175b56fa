use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::core::{AdminTable, TableError};
use crate::data::{Member, MemberField, MemberId};
use crate::ui::action::Action;
use crate::ui::components::MemberTable;
use crate::ui::events::{AppEvent, InputMode};
use crate::ui::keys::action_for_key;
use crate::ui::terminal_guard::TerminalGuard;

/// Main application state
pub struct App {
    /// Application configuration
    config: Config,
    /// Member table engine
    table: AdminTable,
    /// Which input receives keystrokes
    input_mode: InputMode,
    /// Cursor row within the current page
    cursor: usize,
    /// Focused field while editing
    edit_field: MemberField,
    /// Whether the initial fetch is still running
    loading: bool,
    /// One-line message shown in the footer
    status: Option<String>,
    /// Whether the app should quit
    should_quit: bool,
    /// Event channel sender
    event_tx: mpsc::UnboundedSender<AppEvent>,
    /// Event channel receiver
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Self {
            config,
            table: AdminTable::new(),
            input_mode: InputMode::Normal,
            cursor: 0,
            edit_field: MemberField::Name,
            loading: false,
            status: None,
            should_quit: false,
            event_tx,
            event_rx,
        }
    }

    pub fn table(&self) -> &AdminTable {
        &self.table
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn edit_field(&self) -> MemberField {
        self.edit_field
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Kick off the one-shot member fetch. The result arrives as an [`AppEvent`].
    pub fn spawn_load(&mut self) {
        self.loading = true;
        let tx = self.event_tx.clone();
        let source = self.config.source.clone();
        let timeout = self.config.request_timeout;

        tokio::spawn(async move {
            let event = match source.load(timeout).await {
                Ok(members) => AppEvent::MembersLoaded(members),
                Err(e) => {
                    tracing::warn!(source = %source, error = %e, "Failed to load members");
                    AppEvent::LoadFailed(e.to_string())
                }
            };
            if tx.send(event).is_err() {
                tracing::debug!("UI closed before members arrived");
            }
        });
    }

    /// Wait for the next application event (used by tests and the event loop)
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.event_rx.recv().await
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        self.spawn_load();
        let result = self.event_loop(&mut terminal).await;

        guard.cleanup()?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                _ = tokio::time::sleep(Duration::from_millis(16)) => {
                    while event::poll(Duration::from_millis(0))? {
                        if let Event::Key(key) = event::read()? {
                            if key.kind != KeyEventKind::Press {
                                continue;
                            }
                            if let Some(action) = action_for_key(self.input_mode, &key) {
                                self.apply(action);
                            }
                        }
                    }
                }

                Some(event) = self.event_rx.recv() => {
                    self.handle_app_event(event);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    pub fn draw(&self, f: &mut Frame) {
        let view = self.table.view();
        let widget = MemberTable::new(&view)
            .mode(self.input_mode)
            .cursor(self.cursor)
            .edit_field(self.edit_field)
            .status(self.status.as_deref())
            .loading(self.loading);
        f.render_widget(widget, f.area());
    }

    pub fn handle_app_event(&mut self, event: AppEvent) {
        self.loading = false;
        match event {
            AppEvent::MembersLoaded(members) => {
                self.load_members(members);
            }
            AppEvent::LoadFailed(message) => {
                self.status = Some(format!("Could not load members: {}", message));
            }
        }
    }

    /// Replace the table contents
    pub fn load_members(&mut self, members: Vec<Member>) {
        self.table.load(members);
        self.status = None;
        self.clamp_cursor();
    }

    fn cursor_id(&self) -> Option<MemberId> {
        self.table
            .page()
            .get(self.cursor)
            .map(|member| member.id.clone())
    }

    fn clamp_cursor(&mut self) {
        let rows = self.table.page().len();
        self.cursor = self.cursor.min(rows.saturating_sub(1));
    }

    fn ignore_table_error(&self, err: TableError) {
        tracing::debug!(error = %err, "Ignored table command");
    }

    /// Apply a single action to the table and view state
    pub fn apply(&mut self, action: Action) {
        if !matches!(action, Action::Quit) {
            self.status = None;
        }

        match action {
            Action::Quit => self.should_quit = true,

            Action::SelectUp => self.cursor = self.cursor.saturating_sub(1),
            Action::SelectDown => self.cursor += 1,

            Action::ToggleRow => {
                if let Some(id) = self.cursor_id() {
                    let selected = !self.table.is_selected(&id);
                    self.table.toggle_row(&id, selected);
                }
            }
            Action::TogglePage => self.table.toggle_header(),

            Action::DeleteSelected => {
                let removed = self.table.delete_selected();
                if removed > 0 {
                    self.status = Some(format!("Deleted {} member(s)", removed));
                }
            }
            Action::DeleteRow => {
                if let Some(id) = self.cursor_id() {
                    self.table.delete_row(&id);
                }
            }

            Action::BeginEdit => {
                if let Some(id) = self.cursor_id() {
                    match self.table.begin_edit(&id) {
                        Ok(()) => {
                            self.input_mode = InputMode::Edit;
                            self.edit_field = MemberField::Name;
                        }
                        Err(e) => self.ignore_table_error(e),
                    }
                }
            }
            Action::CommitEdit => {
                if let Err(e) = self.table.commit_edit() {
                    self.ignore_table_error(e);
                }
                self.input_mode = InputMode::Normal;
            }
            Action::CancelEdit => {
                if let Err(e) = self.table.cancel_edit() {
                    self.ignore_table_error(e);
                }
                self.input_mode = InputMode::Normal;
            }
            Action::NextField => self.edit_field = self.edit_field.next(),

            Action::FirstPage => {
                self.table.first_page();
                self.cursor = 0;
            }
            Action::PrevPage => {
                self.table.prev_page();
                self.cursor = 0;
            }
            Action::NextPage => {
                self.table.next_page();
                self.cursor = 0;
            }
            Action::LastPage => {
                self.table.last_page();
                self.cursor = 0;
            }
            Action::GoToPage(page) => {
                self.table.go_to(page);
                self.cursor = 0;
            }

            Action::FocusSearch => self.input_mode = InputMode::Search,
            Action::ExitSearch => self.input_mode = InputMode::Normal,
            Action::ClearSearch => {
                if !self.table.query().is_empty() {
                    self.table.search("");
                    self.cursor = 0;
                }
                self.input_mode = InputMode::Normal;
            }

            Action::InsertChar(c) => self.insert_char(c),
            Action::Backspace => self.backspace(),
        }

        // A commit can drop the edit, so re-sync the mode with the table
        if self.input_mode == InputMode::Edit && self.table.edit_session().is_none() {
            self.input_mode = InputMode::Normal;
        }
        self.clamp_cursor();
    }

    fn insert_char(&mut self, c: char) {
        match self.input_mode {
            InputMode::Search => {
                let mut query = self.table.query().to_string();
                query.push(c);
                self.table.search(query);
                self.cursor = 0;
            }
            InputMode::Edit => {
                if let Err(e) = self.table.push_char(self.edit_field, c) {
                    self.ignore_table_error(e);
                }
            }
            InputMode::Normal => {}
        }
    }

    fn backspace(&mut self) {
        match self.input_mode {
            InputMode::Search => {
                let mut query = self.table.query().to_string();
                if query.pop().is_some() {
                    self.table.search(query);
                    self.cursor = 0;
                }
            }
            InputMode::Edit => {
                if let Err(e) = self.table.pop_char(self.edit_field) {
                    self.ignore_table_error(e);
                }
            }
            InputMode::Normal => {}
        }
    }
}
