use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::game::PieceColor;
use crate::ui::surface::CellFrame;

pub fn color_of(color: PieceColor) -> Color {
    match color {
        PieceColor::Cyan => Color::Cyan,
        PieceColor::Yellow => Color::Yellow,
        PieceColor::Purple => Color::Magenta,
        PieceColor::Green => Color::Green,
        PieceColor::Red => Color::Red,
        PieceColor::Blue => Color::Blue,
        PieceColor::Orange => Color::Rgb(255, 165, 0),
    }
}

pub fn ui(f: &mut Frame, cells: &CellFrame) {
    let size = f.size();

    let board_height = BOARD_HEIGHT as u16 + 2;
    let board_width = BOARD_WIDTH as u16 * 2 + 2; // 2 chars per cell

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_height),
            Constraint::Min(1),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_width),
            Constraint::Length(16),
            Constraint::Min(1),
        ])
        .split(vertical_chunks[1]);

    render_board(f, cells, horizontal_chunks[1]);
    render_controls(f, horizontal_chunks[2]);
}

fn render_board(f: &mut Frame, cells: &CellFrame, area: Rect) {
    let board_lines: Vec<Line> = cells
        .rows()
        .enumerate()
        .map(|(y, row)| {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .map(|(x, cell)| match cell {
                    Some(color) => Span::styled("██", Style::default().fg(color_of(*color))),
                    None if (x + y) % 2 == 0 => {
                        Span::styled("░░", Style::default().fg(Color::DarkGray))
                    }
                    None => Span::raw("  "),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default().borders(Borders::ALL).title("blockfall"));

    f.render_widget(board_widget, area);
}

fn render_controls(f: &mut Frame, area: Rect) {
    let help = vec![
        Line::from(vec![Span::styled("Keys", Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("← h  left")]),
        Line::from(vec![Span::raw("→ l  right")]),
        Line::from(vec![Span::raw("↓ j  drop")]),
        Line::from(vec![Span::raw("↑ k  rotate")]),
        Line::from(vec![Span::raw("q    quit")]),
    ];

    let help_widget = Paragraph::new(help)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    f.render_widget(help_widget, area);
}
