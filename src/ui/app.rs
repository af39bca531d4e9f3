//! Main TUI application state and logic

use crate::errors::GuideError;
use crate::levels::{self, Context};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Levels,
    Output,
    Heap,
}

impl FocusedPane {
    /// Move focus to the next pane (levels -> output -> heap)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Levels => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Heap,
            FocusedPane::Heap => FocusedPane::Levels,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Levels => FocusedPane::Heap,
            FocusedPane::Output => FocusedPane::Levels,
            FocusedPane::Heap => FocusedPane::Output,
        }
    }
}

/// The main application state
pub struct App {
    /// Context whose levels have already run
    pub context: Context,

    /// Level numbers that returned an error
    pub failed_levels: Vec<u32>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Index into the level registry
    pub selected_level: usize,

    /// Index into the context's list history
    pub snapshot_index: usize,

    /// Per-pane scroll offsets
    pub output_scroll: usize,
    pub heap_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app over a context and the failures its run produced
    pub fn new(context: Context, failures: &[(u32, GuideError)]) -> Self {
        let status_message = match failures.first() {
            Some((number, e)) => format!("Level {} failed: {}", number, e),
            None => String::from("Ready!"),
        };
        // Open on the level that was asked for, since it is the only one that ran
        let selected_level = context
            .config
            .level
            .and_then(|number| levels::all().iter().position(|l| l.number == number))
            .unwrap_or(0);
        App {
            context,
            failed_levels: failures.iter().map(|(number, _)| *number).collect(),
            focused_pane: FocusedPane::Levels,
            selected_level,
            snapshot_index: 0,
            output_scroll: 0,
            heap_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

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

    /// Number of the selected level
    pub fn selected_number(&self) -> u32 {
        levels::all()[self.selected_level].number
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(main_chunks[0]);

        // Right column: Output (top) | Heap (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        super::panes::render_levels_pane(
            frame,
            columns[0],
            levels::all(),
            self.selected_level,
            &self.failed_levels,
            self.focused_pane == FocusedPane::Levels,
        );

        let number = self.selected_number();
        super::panes::render_output_pane(
            frame,
            right_rows[0],
            &self.context.terminal,
            number,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        let history = &self.context.list_history;
        super::panes::render_heap_pane(
            frame,
            right_rows[1],
            history.get(self.snapshot_index),
            self.snapshot_index,
            history.len(),
            self.focused_pane == FocusedPane::Heap,
            &mut self.heap_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            number,
            levels::all().len(),
            self.failed_levels.len(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Levels => self.select_level(self.selected_level.saturating_sub(1)),
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_sub(1);
                }
                FocusedPane::Heap => {
                    self.heap_scroll = self.heap_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Levels => self.select_level(self.selected_level + 1),
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_add(1);
                }
                FocusedPane::Heap => {
                    self.heap_scroll = self.heap_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    self.select_level(digit as usize - 1);
                }
            }
            KeyCode::Char('0') => self.select_level(9),
            KeyCode::Char('l') | KeyCode::Char('L') => self.select_level(levels::all().len() - 1),
            KeyCode::Left => self.step_snapshot(false),
            KeyCode::Right => self.step_snapshot(true),
            _ => {}
        }
    }

    fn select_level(&mut self, index: usize) {
        let last = levels::all().len() - 1;
        self.selected_level = index.min(last);
        self.output_scroll = 0;
        let level = &levels::all()[self.selected_level];
        self.status_message = format!("Level {}: {}", level.number, level.title);
    }

    /// Move through the recorded list history
    fn step_snapshot(&mut self, forward: bool) {
        let total = self.context.list_history.len();
        if total == 0 {
            self.status_message = "No list history recorded".to_string();
            return;
        }
        if forward && self.snapshot_index + 1 < total {
            self.snapshot_index += 1;
        } else if !forward && self.snapshot_index > 0 {
            self.snapshot_index -= 1;
        } else {
            self.status_message = if forward {
                "Already at the last list step".to_string()
            } else {
                "Already at the first list step".to_string()
            };
            return;
        }
        self.heap_scroll = 0;
        self.status_message = format!(
            "List step {}/{}: {}",
            self.snapshot_index + 1,
            total,
            self.context.list_history[self.snapshot_index].label
        );
    }
}
