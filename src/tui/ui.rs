//! Stateless rendering of the board view.

use hotseat_tictactoe::{BoardView, Cell, Marker, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HELP: &str = "Arrows/1-9 move  Enter/Space place  r reset  s save  q quit";

/// Draws title, board, status line and key help.
pub fn draw(frame: &mut Frame, view: &BoardView, cursor: Position) {
    let [title, board, status, help] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(9),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let heading = Paragraph::new("Hotseat Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(heading, title);

    draw_board(frame, board, view, cursor);

    let status_line = Paragraph::new(view.message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_line, status);

    let help_line = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help_line, help);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &BoardView, cursor: Position) {
    let board_area = center_rect(area, 17, 5);
    let rows = Layout::vertical([Constraint::Length(1); 5]).split(board_area);

    for (row, positions) in Position::ALL.chunks(3).enumerate() {
        let mut spans = Vec::with_capacity(5);
        for (col, position) in positions.iter().enumerate() {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            spans.push(cell_span(view, *position, *position == cursor));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            rows[row * 2],
        );
        if row < 2 {
            frame.render_widget(
                Paragraph::new("─────┼─────┼─────")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center),
                rows[row * 2 + 1],
            );
        }
    }
}

fn cell_span(view: &BoardView, position: Position, highlighted: bool) -> Span<'static> {
    let cell = view.cell(position.index()).unwrap_or_default();
    let base = match cell {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::Marked(Marker::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Cell::Marked(Marker::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    let style = if highlighted {
        base.bg(Color::White).fg(Color::Black)
    } else {
        base
    };
    Span::styled(format!("  {}  ", cell.symbol()), style)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(middle);
    center
}
