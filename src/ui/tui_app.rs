use crate::config::Config;
use crate::contact::{Contact, ContactId};
use crate::error::StoreError;
use crate::store::ContactStore;
use crate::utils::logging::LogRingBuffer;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::io;
use tracing::{debug, info};
use tui_input::{backend::crossterm::EventHandler, Input};

/// Which widget receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Name,
    Number,
    Filter,
    List,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Name => Focus::Number,
            Focus::Number => Focus::Filter,
            Focus::Filter => Focus::List,
            Focus::List => Focus::Name,
        }
    }

    fn previous(self) -> Self {
        match self {
            Focus::Name => Focus::List,
            Focus::Number => Focus::Name,
            Focus::Filter => Focus::Number,
            Focus::List => Focus::Filter,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Focus::Name => "NAME",
            Focus::Number => "NUMBER",
            Focus::Filter => "FILTER",
            Focus::List => "LIST",
        }
    }
}

/// Message shown on the status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Info(s) | Notice::Success(s) | Notice::Error(s) => s,
        }
    }
}

pub struct PhonebookApp {
    store: ContactStore,
    config: Config,
    name_input: Input,
    number_input: Input,
    filter_input: Input,
    focus: Focus,
    table_state: TableState,
    show_help: bool,
    show_log: bool,
    pending_delete: Option<ContactId>,
    status: Notice,
    log_buffer: Option<LogRingBuffer>,
    should_quit: bool,
}

impl PhonebookApp {
    pub fn new(store: ContactStore, config: Config) -> Self {
        let mut table_state = TableState::default();
        if !store.is_empty() {
            table_state.select(Some(0));
        }
        Self {
            name_input: Input::from(store.draft().name.clone()),
            number_input: Input::from(store.draft().number.clone()),
            filter_input: Input::from(store.filter().to_string()),
            store,
            config,
            focus: Focus::Name,
            table_state,
            show_help: false,
            show_log: false,
            pending_delete: None,
            status: Notice::Info(
                "Ready - Tab to switch fields, Enter to add, F1 for help".to_string(),
            ),
            log_buffer: None,
            should_quit: false,
        }
    }

    pub fn with_log_buffer(mut self, buffer: LogRingBuffer) -> Self {
        self.log_buffer = Some(buffer);
        self
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn status(&self) -> &Notice {
        &self.status
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn pending_delete(&self) -> Option<&ContactId> {
        self.pending_delete.as_ref()
    }

    /// The contact under the list cursor, if any
    pub fn selected_contact(&self) -> Option<&Contact> {
        let visible = self.store.visible_contacts();
        self.table_state
            .selected()
            .and_then(|idx| visible.get(idx).copied())
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.ui(f))?;

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        debug!(target: "tui", "Key: {:?} in {:?}", key.code, self.focus);

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if let Some(id) = self.pending_delete.take() {
            if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
                self.delete(&id);
            } else {
                self.status = Notice::Info("Delete cancelled".to_string());
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                if self.show_help {
                    self.show_help = false;
                } else if self.show_log {
                    self.show_log = false;
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::F(1) => self.show_help = !self.show_help,
            KeyCode::F(5) => self.show_log = !self.show_log,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            KeyCode::Enter => {
                if matches!(self.focus, Focus::Name | Focus::Number) {
                    self.submit();
                }
            }
            _ => match self.focus {
                Focus::List => self.handle_list_key(key.code),
                Focus::Name => {
                    self.name_input.handle_event(&Event::Key(key));
                    self.store.set_draft_name(self.name_input.value());
                }
                Focus::Number => {
                    self.number_input.handle_event(&Event::Key(key));
                    self.store.set_draft_number(self.number_input.value());
                }
                Focus::Filter => {
                    self.filter_input.handle_event(&Event::Key(key));
                    self.store.set_filter(self.filter_input.value());
                    self.clamp_selection();
                }
            },
        }
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        let len = self.store.visible_contacts().len();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                let next = if current > 0 { current - 1 } else { len - 1 };
                self.table_state.select(Some(next));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let next = if current + 1 < len { current + 1 } else { 0 };
                self.table_state.select(Some(next));
            }
            KeyCode::Home | KeyCode::Char('g') => self.table_state.select(Some(0)),
            KeyCode::End | KeyCode::Char('G') => self.table_state.select(Some(len - 1)),
            KeyCode::Delete | KeyCode::Char('d') => self.request_delete(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        match self.store.submit_draft() {
            Ok(contact) => {
                self.name_input.reset();
                self.number_input.reset();
                self.focus = Focus::Name;
                self.clamp_selection();
                self.status = Notice::Success(format!(
                    "{} Added {} {}",
                    self.config.display.icons.success, contact.name, contact.number
                ));
            }
            Err(e) => {
                let message = match &e {
                    StoreError::DuplicateName { .. } => e.to_string(),
                    _ => format!("Error: {}", e),
                };
                self.status = Notice::Error(format!(
                    "{} {}",
                    self.config.display.icons.error, message
                ));
            }
        }
    }

    fn request_delete(&mut self) {
        let Some(contact) = self.selected_contact() else {
            return;
        };
        let id = contact.id.clone();
        if self.config.behavior.confirm_delete {
            self.status = Notice::Info(format!("Delete {}? (y/n)", contact.name));
            self.pending_delete = Some(id);
        } else {
            self.delete(&id);
        }
    }

    fn delete(&mut self, id: &ContactId) {
        if let Some(removed) = self.store.delete_contact(id) {
            info!(target: "tui", "Removed {} via UI", removed.name);
            self.status = Notice::Info(format!(
                "{} Deleted {}",
                self.config.display.icons.info, removed.name
            ));
        }
        self.clamp_selection();
    }

    /// Keep the list cursor inside the visible rows
    fn clamp_selection(&mut self) {
        let len = self.store.visible_contacts().len();
        let selected = match (len, self.table_state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(idx)) => Some(idx.min(len - 1)),
        };
        self.table_state.select(selected);
    }

    pub fn ui(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(3), // Name
                Constraint::Length(3), // Number
                Constraint::Length(3), // Filter
                Constraint::Min(5),    // Contacts
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());

        let title = Paragraph::new(Line::from(Span::styled(
            "Phonebook",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        f.render_widget(title, chunks[0]);

        self.render_input(f, chunks[1], "Name", &self.name_input, Focus::Name);
        self.render_input(f, chunks[2], "Number", &self.number_input, Focus::Number);
        self.render_input(
            f,
            chunks[3],
            "Find contacts by name",
            &self.filter_input,
            Focus::Filter,
        );
        self.render_contacts(f, chunks[4]);

        let status_style = match self.status {
            Notice::Info(_) => Style::default().fg(Color::White),
            Notice::Success(_) => Style::default().fg(Color::Green),
            Notice::Error(_) => Style::default().fg(Color::Red),
        };
        let status_line = Line::from(vec![
            Span::styled(self.status.text(), status_style),
            Span::raw(" | "),
            Span::styled(
                self.focus.label(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | F1=Help | Esc=Exit"),
        ]);
        let status = Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray));
        f.render_widget(status, chunks[5]);

        if self.show_help {
            self.render_help_popup(f);
        } else if self.show_log {
            self.render_log_popup(f);
        }
    }

    fn render_input(&self, f: &mut Frame, area: Rect, title: &str, input: &Input, focus: Focus) {
        let focused = self.focus == focus;
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        let paragraph = Paragraph::new(input.value())
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(style);
        f.render_widget(paragraph, area);

        if focused && !self.show_help && !self.show_log {
            f.set_cursor_position((area.x + input.visual_cursor() as u16 + 1, area.y + 1));
        }
    }

    fn render_contacts(&self, f: &mut Frame, area: Rect) {
        let visible = self.store.visible_contacts();
        let title = format!("Contacts ({} of {})", visible.len(), self.store.len());
        let block = Block::default().borders(Borders::ALL).title(title);

        if visible.is_empty() {
            let text = if self.store.is_empty() {
                "No contacts yet"
            } else {
                "No contacts match the filter"
            };
            f.render_widget(Paragraph::new(text).block(block), area);
            return;
        }

        let show_ids = self.config.display.show_ids;
        let mut headers = vec!["Name", "Number"];
        if show_ids {
            headers.push("Id");
        }
        let header = Row::new(
            headers
                .iter()
                .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow))),
        )
        .height(1)
        .bottom_margin(1);

        let rows: Vec<Row> = visible
            .iter()
            .map(|contact| {
                let mut cells = vec![
                    Cell::from(contact.name.as_str()),
                    Cell::from(contact.number.as_str()),
                ];
                if show_ids {
                    cells.push(
                        Cell::from(contact.id.as_str()).style(Style::default().fg(Color::Gray)),
                    );
                }
                Row::new(cells).height(1)
            })
            .collect();

        let widths = if show_ids {
            vec![
                Constraint::Percentage(40),
                Constraint::Percentage(20),
                Constraint::Percentage(40),
            ]
        } else {
            vec![Constraint::Percentage(60), Constraint::Percentage(40)]
        };

        let highlight = if self.focus == Focus::List {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(highlight)
            .highlight_symbol(">> ");

        f.render_stateful_widget(table, area, &mut self.table_state.clone());
    }

    fn render_help_popup(&self, f: &mut Frame) {
        let area = centered_rect(70, 60, f.area());
        f.render_widget(Clear, area);

        let help_text = vec![
            Line::from(vec![Span::styled(
                "Phonebook Help",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from("Fields:"),
            Line::from("  Tab / Shift+Tab - Next / previous field"),
            Line::from("  Enter           - Add contact (from Name or Number)"),
            Line::from(""),
            Line::from("Contact list:"),
            Line::from("  ↑↓ / j k        - Move selection"),
            Line::from("  Del / d         - Delete selected contact"),
            Line::from(""),
            Line::from("Global:"),
            Line::from("  F1              - Toggle this help"),
            Line::from("  F5              - Toggle log view"),
            Line::from("  Esc / Ctrl+C    - Exit"),
            Line::from(""),
            Line::from("Names: letters, apostrophe, dash and spaces, at least 2 characters"),
            Line::from("Numbers: 6-10 characters, digits, spaces, dashes, parentheses, leading +"),
        ];

        let popup = Paragraph::new(help_text)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .wrap(Wrap { trim: true });
        f.render_widget(popup, area);
    }

    fn render_log_popup(&self, f: &mut Frame) {
        let area = centered_rect(90, 80, f.area());
        f.render_widget(Clear, area);

        let visible_rows = area.height.saturating_sub(2) as usize;
        let lines: Vec<Line> = match &self.log_buffer {
            Some(buffer) => buffer
                .get_recent(visible_rows)
                .into_iter()
                .map(|entry| Line::from(entry.format_for_display()))
                .collect(),
            None => vec![Line::from("Logging is not initialized")],
        };

        let popup = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Log (F5 to close)"));
        f.render_widget(popup, area);
    }
}

// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn run_tui_app(store: ContactStore, config: Config, log_buffer: LogRingBuffer) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!(target: "tui", "Starting TUI with {} contacts", store.len());
    let mut app = PhonebookApp::new(store, config).with_log_buffer(log_buffer);
    let res = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
