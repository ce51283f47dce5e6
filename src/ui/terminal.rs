//! Terminal display: owns the ratatui terminal and paints display lists.

use super::canvas::{Canvas, MIN_PIXEL_HEIGHT, MIN_PIXEL_WIDTH};
use super::surface::DisplayList;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};

/// Something a finished frame can be shown on.
pub trait Presenter {
    fn present(&mut self, frame: &DisplayList) -> io::Result<()>;
}

/// Raw-mode alternate-screen terminal.
pub struct TerminalDisplay {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalDisplay {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        Ok(Self { terminal })
    }

    /// Leave the alternate screen and give the terminal back to the shell.
    pub fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        self.terminal.backend_mut().execute(LeaveAlternateScreen)?;
        self.terminal.show_cursor()
    }
}

impl Presenter for TerminalDisplay {
    fn present(&mut self, list: &DisplayList) -> io::Result<()> {
        self.terminal.draw(|frame| render_display_list(frame, list))?;
        Ok(())
    }
}

/// Draw the bordered game panel with the canvas centered inside it.
pub fn render_display_list(frame: &mut Frame, list: &DisplayList) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Flappy Bird ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match Canvas::from_display_list(list, inner.width, inner.height) {
        Some(canvas) => {
            let (cols, rows) = canvas.cell_size();
            let target = Rect {
                x: inner.x + inner.width.saturating_sub(cols) / 2,
                y: inner.y + inner.height.saturating_sub(rows) / 2,
                width: cols.min(inner.width),
                height: rows.min(inner.height),
            };
            canvas.paint(frame.buffer_mut(), target);
        }
        None => render_too_small(frame, inner),
    }
}

/// Shown instead of the field when the terminal cannot fit a legible canvas.
fn render_too_small(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Terminal too small",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Need at least {}x{} cells",
                MIN_PIXEL_WIDTH + 2,
                MIN_PIXEL_HEIGHT / 2 + 2
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Please resize your terminal.",
            Style::default().fg(Color::White),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, area);
}
