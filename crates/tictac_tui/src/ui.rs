//! Stateless UI rendering for tic-tac-toe.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictac_core::{Cell, Mark, Position};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const GAP_X: u16 = 1;
const GAP_Y: u16 = 1;
const GRID_WIDTH: u16 = CELL_WIDTH * 3 + GAP_X * 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + GAP_Y * 2;
const BUTTON_WIDTH: u16 = 18;

/// Something on screen that reacts to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board cell.
    Cell(Position),
    /// The restart button.
    Restart,
}

/// Where everything goes for a given terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Whole frame.
    pub area: Rect,
    /// Title line.
    pub title: Rect,
    /// Status line.
    pub status: Rect,
    /// The nine cells in row-major order.
    pub cells: [Rect; 9],
    /// Winner banner.
    pub banner: Rect,
    /// Restart button.
    pub restart: Rect,
    /// Key hints.
    pub hints: Rect,
}

impl ScreenLayout {
    /// Rectangle of one cell.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// What lies under a terminal coordinate. Cells win over the button.
    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        Position::ALL
            .into_iter()
            .find(|pos| contains(self.cell(*pos), column, row))
            .map(Target::Cell)
            .or_else(|| contains(self.restart, column, row).then_some(Target::Restart))
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Computes the layout for a frame area.
pub fn layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // Title
            Constraint::Length(1),           // Status
            Constraint::Length(1),           // Spacer
            Constraint::Length(GRID_HEIGHT), // Board
            Constraint::Length(3),           // Banner
            Constraint::Length(3),           // Restart
            Constraint::Min(0),              // Filler
            Constraint::Length(1),           // Hints
        ])
        .split(area);

    let board = chunks[3];
    let grid = center_horizontally(board, GRID_WIDTH);
    // Short terminals squeeze the board chunk; cells must not spill into the button.
    let cells = Position::ALL.map(|pos| {
        Rect::new(
            grid.x + pos.col() as u16 * (CELL_WIDTH + GAP_X),
            grid.y + pos.row() as u16 * (CELL_HEIGHT + GAP_Y),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(board)
    });

    ScreenLayout {
        area,
        title: chunks[0],
        status: chunks[1],
        cells,
        banner: chunks[4],
        restart: center_horizontally(chunks[5], BUTTON_WIDTH),
        hints: chunks[7],
    }
}

fn center_horizontally(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = layout(frame.area());

    let title = Paragraph::new("TIC-TAC-TOE")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    let status = Paragraph::new(app.status_text())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(status, layout.status);

    for pos in Position::ALL {
        draw_cell(frame, layout.cell(pos), app, pos);
    }

    if let Some(celebration) = app.celebration() {
        let banner = Paragraph::new(celebration.banner_text())
            .style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(banner, centered_line(layout.banner));
    }

    draw_restart(frame, layout.restart, app);

    let hints = Paragraph::new("1-9 / arrows+Enter / click: place   r: restart   q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hints, layout.hints);

    if let Some(confetti) = app.celebration().and_then(|c| c.confetti()) {
        frame.render_widget(confetti, layout.area);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    if area.is_empty() {
        return;
    }

    let snapshot = app.snapshot();
    let (text, mut style) = match snapshot.board.get(pos) {
        Cell::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(mark) => (mark.to_string(), mark_style(mark)),
    };

    let on_line = app.winning_line().is_some_and(|line| line.contains(pos));
    let focused = app.cursor() == pos || app.hover() == Some(Target::Cell(pos));

    let mut border = Style::default().fg(Color::Gray);
    if on_line {
        style = style.fg(Color::Green);
        border = border.fg(Color::Green).add_modifier(Modifier::BOLD);
    } else if focused && !snapshot.outcome.is_decided() {
        border = border.fg(Color::Yellow).add_modifier(Modifier::BOLD);
    }
    if app.pressed() == Some(Target::Cell(pos)) {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(text, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

fn draw_restart(frame: &mut Frame, area: Rect, app: &App) {
    if area.is_empty() {
        return;
    }

    let mut style = Style::default().fg(Color::White);
    let mut border = Style::default().fg(Color::Gray);
    if app.hover() == Some(Target::Restart) {
        border = border.fg(Color::Yellow).add_modifier(Modifier::BOLD);
    }
    if app.pressed() == Some(Target::Restart) {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let button = Paragraph::new(Span::styled("Restart Game", style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(button, area);
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Middle line of a three-line area.
fn centered_line(area: Rect) -> Rect {
    Rect::new(area.x, area.y + area.height / 2, area.width, area.height.min(1))
}
