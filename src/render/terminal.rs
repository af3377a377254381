//! Terminal UI implementation using ratatui
//!
//! Vertical boards draw each list as a column; horizontal boards draw each list as a
//! row of items.

use crate::app::{Board, Position};
use crate::error::{KbDragError, Result};
use crate::render::{BoardRenderer, ColorTheme};
use crate::sensor::Axis;
use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Terminal UI implementation with ratatui backend
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
}

impl TerminalUI {
    pub fn new() -> Result<Self> {
        Self::with_theme(ColorTheme::default())
    }

    pub fn with_theme(theme: ColorTheme) -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme,
        })
    }

    fn list_lines<'a>(board: &'a Board, list: usize, theme: &ColorTheme) -> Vec<Span<'a>> {
        let engine = board.engine();
        let focus = engine.focus();
        let carried = engine.carried();

        engine.lists()[list]
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let pos = Position { list, index };
                let style = theme.item_style(pos == focus, carried == Some(pos));
                Span::styled(format!(" {} ", item), style)
            })
            .collect()
    }

    fn render_list(
        frame: &mut Frame,
        area: Rect,
        board: &Board,
        list: usize,
        theme: &ColorTheme,
    ) {
        let holds_carried = board
            .engine()
            .carried()
            .map_or(false, |pos| pos.list == list);
        let border_style = if holds_carried {
            theme.active_border
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" List {} ", list + 1));

        let spans = Self::list_lines(board, list, theme);
        let paragraph = match board.axis() {
            Axis::Vertical => {
                Paragraph::new(spans.into_iter().map(Line::from).collect::<Vec<_>>())
            }
            Axis::Horizontal => Paragraph::new(Line::from(spans)),
        };
        frame.render_widget(paragraph.block(block), area);
    }

    fn render_status(frame: &mut Frame, area: Rect, board: &Board, theme: &ColorTheme) {
        let mode = if board.is_dragging() { "DRAG" } else { "IDLE" };
        let text = format!(
            " {} | {} | {}",
            mode,
            board.axis().name(),
            board.engine().status()
        );
        let style = Style::default().bg(theme.status_bg).fg(theme.status_fg);
        frame.render_widget(Paragraph::new(text).style(style), area);
    }
}

impl BoardRenderer for TerminalUI {
    fn render(&mut self, board: &Board) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            let theme = &self.theme;

            terminal.draw(move |frame| {
                let size = frame.size();
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(1)])
                    .split(size);

                let count = board.engine().lists().len();
                let direction = match board.axis() {
                    Axis::Vertical => Direction::Horizontal,
                    Axis::Horizontal => Direction::Vertical,
                };
                let areas = Layout::default()
                    .direction(direction)
                    .constraints(vec![Constraint::Ratio(1, count as u32); count])
                    .split(chunks[0]);

                for (list, area) in areas.iter().enumerate() {
                    Self::render_list(frame, *area, board, list, theme);
                }
                Self::render_status(frame, chunks[1], board, theme);
            })?;
        }
        Ok(())
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode().map_err(|err| KbDragError::terminal("cannot enable raw mode", err))?;
        let mut stdout = io::stdout();
        // Mouse capture is what turns the wheel into scroll events.
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .map_err(|err| KbDragError::terminal("cannot enter the alternate screen", err))?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)
            .map_err(|err| KbDragError::terminal("cannot create the terminal backend", err))?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode()
                .map_err(|err| KbDragError::terminal("cannot disable raw mode", err))?;
            execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
                .map_err(|err| KbDragError::terminal("cannot restore the main screen", err))?;
            self.terminal = None;
        }
        Ok(())
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
