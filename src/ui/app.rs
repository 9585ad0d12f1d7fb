//! Main TUI application state and logic

use crate::algorithms::Algorithm;
use crate::config::Config;
use crate::replay::{Replay, ReplayError, StepOutcome};
use crate::trace::StepKind;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use super::panes::{self, ParamsRenderData, StatusRenderData};
use super::theme::DEFAULT_THEME;

/// Which screen is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Visualizer,
}

/// Content of the lower-right panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputView {
    Console,
    Code,
}

impl OutputView {
    pub fn toggle(self) -> Self {
        match self {
            OutputView::Console => OutputView::Code,
            OutputView::Code => OutputView::Console,
        }
    }
}

/// Editable input fields of the parameters panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Array,
    Target,
}

/// The main application state
pub struct App {
    /// The replay engine for the selected algorithm
    pub replay: Replay,

    /// Defaults used when switching between sorting and searching
    config: Config,

    pub screen: Screen,

    /// Highlighted entry of the selection screen, index into [`Algorithm::ALL`]
    pub menu_selection: usize,

    pub view: OutputView,

    /// Field being edited and its pending text
    pub editing: Option<(InputField, String)>,

    /// Per-panel scroll offsets
    pub log_scroll: usize,
    pub code_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
    pub status_is_error: bool,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Option<Instant>,
}

impl App {
    /// Create an app around `replay`, opening on the selection screen when `on_menu`
    pub fn new(replay: Replay, config: Config, on_menu: bool) -> Self {
        let menu_selection = Algorithm::ALL
            .iter()
            .position(|&a| a == replay.algorithm())
            .unwrap_or(0);
        App {
            replay,
            config,
            screen: if on_menu {
                Screen::Menu
            } else {
                Screen::Visualizer
            },
            menu_selection,
            view: OutputView::Console,
            editing: None,
            log_scroll: 0,
            code_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            last_space_press: None,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.on_tick(Instant::now());

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance auto-play if its interval has elapsed
    pub fn on_tick(&mut self, now: Instant) {
        match self.replay.tick(now) {
            None => {}
            Some(Ok(_)) if self.replay.is_finished() => {
                self.set_status(self.finish_message());
                self.log_scroll = usize::MAX;
            }
            Some(Ok(_)) => {
                self.set_status("Playing...");
                self.log_scroll = usize::MAX;
            }
            Some(Err(e)) => self.set_error(&e),
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, error: &ReplayError) {
        self.status_message = format!("Error: {}", error);
        self.status_is_error = true;
    }

    fn finish_message(&self) -> String {
        match self.replay.current_step().map(|s| s.kind) {
            Some(StepKind::Found) => "Playback complete: target found".to_string(),
            Some(StepKind::NotFound) => "Playback complete: target not found".to_string(),
            _ => "Playback complete".to_string(),
        }
    }

    // ========== Rendering ==========

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        match self.screen {
            Screen::Menu => panes::render_menu(frame, main_chunks[0], self.menu_selection),
            Screen::Visualizer => self.render_visualizer(frame, main_chunks[0]),
        }

        let status = StatusRenderData {
            message: &self.status_message,
            is_error: self.status_is_error,
            current_step: self.replay.cursor(),
            total_steps: self.replay.total_steps(),
            is_playing: self.replay.is_running(),
            is_editing: self.editing.is_some(),
            on_menu: self.screen == Screen::Menu,
        };
        panes::render_status_bar(frame, main_chunks[1], &status);
    }

    fn render_visualizer(&mut self, frame: &mut Frame, area: Rect) {
        let algorithm = self.replay.algorithm();

        // Header | body
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header = vec![
            Line::from(Span::styled(
                algorithm.name(),
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                algorithm.description(),
                Style::default().fg(DEFAULT_THEME.comment),
            )),
        ];
        frame.render_widget(Paragraph::new(header), rows[0]);

        // Left: parameters/controls, right: array over output
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(28), Constraint::Percentage(72)])
            .split(rows[1]);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(columns[1]);

        let params = ParamsRenderData {
            replay: &self.replay,
            editing: self
                .editing
                .as_ref()
                .map(|(field, text)| (*field, text.as_str())),
        };
        panes::render_params_pane(frame, columns[0], &params);

        panes::render_array_pane(
            frame,
            right_rows[0],
            self.replay.current_array(),
            self.replay.current_step(),
        );

        let block = self.output_block();
        match self.view {
            OutputView::Console => panes::render_log_pane(
                frame,
                right_rows[1],
                block,
                self.replay.visible_log(),
                self.replay.is_running(),
                &mut self.log_scroll,
            ),
            OutputView::Code => panes::render_code_pane(
                frame,
                right_rows[1],
                block,
                algorithm.listing(),
                &mut self.code_scroll,
            ),
        }
    }

    /// Bordered block whose title doubles as the OUTPUT / CODE tab strip
    fn output_block(&self) -> Block<'static> {
        let tab = |label: &'static str, active: bool| {
            if active {
                Span::styled(
                    label,
                    Style::default()
                        .bg(DEFAULT_THEME.primary)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(label, Style::default().fg(DEFAULT_THEME.primary))
            }
        };

        let title = Line::from(vec![
            Span::raw(" "),
            tab(" OUTPUT ", self.view == OutputView::Console),
            Span::raw(" "),
            tab(" CODE ", self.view == OutputView::Code),
            Span::raw(" "),
        ]);

        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
    }

    // ========== Input handling ==========

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        tracing::debug!(code = ?key.code, screen = ?self.screen, "key press");

        if self.editing.is_some() {
            self.handle_edit_key(key);
            return;
        }

        match self.screen {
            Screen::Menu => self.handle_menu_key(key),
            Screen::Visualizer => self.handle_visualizer_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_selection = self.menu_selection.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu_selection = (self.menu_selection + 1).min(Algorithm::ALL.len() - 1);
            }
            KeyCode::Enter => {
                if let Some(&algorithm) = Algorithm::ALL.get(self.menu_selection) {
                    self.open(algorithm);
                }
            }
            _ => {}
        }
    }

    /// Switch the visualizer to `algorithm`.
    ///
    /// Moving to another category loads that category's default input.
    pub fn open(&mut self, algorithm: Algorithm) {
        if algorithm.category() != self.replay.algorithm().category() {
            let (array, target) = if algorithm.needs_target() {
                (
                    self.config.searching.array.clone(),
                    self.config.searching.target.clone(),
                )
            } else {
                (self.config.sorting.array.clone(), self.replay.target_input().to_string())
            };
            self.replay.set_array_input(array);
            self.replay.set_target_input(target);
        }
        self.replay.set_algorithm(algorithm);
        tracing::info!(algorithm = algorithm.name(), "opened visualizer");

        self.screen = Screen::Visualizer;
        self.log_scroll = 0;
        self.code_scroll = 0;
        self.set_status(format!("{} ready", algorithm.name()));
    }

    fn handle_visualizer_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('b') | KeyCode::Tab | KeyCode::Esc => {
                self.replay.pause();
                self.screen = Screen::Menu;
                self.set_status("Select an algorithm");
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.replay.pause();
                let n = c.to_digit(10).unwrap_or(1);
                let mut stepped = 0;
                for _ in 0..n {
                    match self.replay.step() {
                        Ok(StepOutcome::Advanced(_)) => stepped += 1,
                        Ok(StepOutcome::Exhausted) => break,
                        Err(e) => {
                            self.set_error(&e);
                            return;
                        }
                    }
                }
                self.set_status(format!("Stepped forward {} step(s)", stepped));
                self.log_scroll = usize::MAX;
            }
            KeyCode::Right => {
                self.replay.pause();
                self.step_forward();
            }
            KeyCode::Left => {
                self.replay.pause();
                match self.replay.step_back() {
                    Ok(()) => self.set_status("Stepped backward"),
                    Err(e) => self.set_status(format!("Cannot step backward: {}", e)),
                }
                self.log_scroll = usize::MAX;
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                let debounced = self
                    .last_space_press
                    .map_or(true, |t| t.elapsed() >= Duration::from_millis(200));
                if debounced {
                    self.last_space_press = Some(Instant::now());
                    match self.replay.toggle_play() {
                        Ok(true) => self.set_status("Playing..."),
                        Ok(false) if self.replay.is_finished() => {
                            self.set_status("Playback complete, press r to reset")
                        }
                        Ok(false) => self.set_status("Paused"),
                        Err(e) => self.set_error(&e),
                    }
                }
            }
            KeyCode::Enter => match self.replay.jump_to_end() {
                Ok(()) => {
                    self.set_status("Jumped to end");
                    self.log_scroll = usize::MAX;
                }
                Err(e) => self.set_error(&e),
            },
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.replay.reset();
                self.log_scroll = 0;
                self.set_status("Reset");
            }
            KeyCode::Char('e') => {
                self.replay.pause();
                self.editing = Some((InputField::Array, self.replay.array_input().to_string()));
                self.set_status("Editing array");
            }
            KeyCode::Char('t') if self.replay.algorithm().needs_target() => {
                self.replay.pause();
                self.editing = Some((InputField::Target, self.replay.target_input().to_string()));
                self.set_status("Editing target");
            }
            KeyCode::Char('c') => {
                self.view = self.view.toggle();
            }
            KeyCode::Up => match self.view {
                OutputView::Console => self.log_scroll = self.log_scroll.saturating_sub(1),
                OutputView::Code => self.code_scroll = self.code_scroll.saturating_sub(1),
            },
            KeyCode::Down => match self.view {
                OutputView::Console => self.log_scroll = self.log_scroll.saturating_add(1),
                OutputView::Code => self.code_scroll = self.code_scroll.saturating_add(1),
            },
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some((field, text)) = self.editing.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Char(c) => text.push(c),
            KeyCode::Backspace => {
                text.pop();
            }
            KeyCode::Enter => {
                let field = *field;
                let text = std::mem::take(text);
                self.editing = None;
                match field {
                    InputField::Array => self.replay.set_array_input(text),
                    InputField::Target => self.replay.set_target_input(text),
                }
                self.log_scroll = 0;
                self.set_status("Input updated, trace reset");
            }
            KeyCode::Esc => {
                self.editing = None;
                self.set_status("Edit cancelled");
            }
            _ => {}
        }
    }

    /// Step forward in the trace
    fn step_forward(&mut self) {
        match self.replay.step() {
            Ok(StepOutcome::Advanced(_)) if self.replay.is_finished() => {
                self.set_status(self.finish_message());
                self.log_scroll = usize::MAX;
            }
            Ok(StepOutcome::Advanced(_)) => {
                self.set_status("Stepped forward");
                self.log_scroll = usize::MAX;
            }
            Ok(StepOutcome::Exhausted) => {
                self.set_status("Cannot step forward: trace finished");
            }
            Err(e) => self.set_error(&e),
        }
    }
}
