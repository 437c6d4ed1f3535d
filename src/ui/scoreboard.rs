//! The end-of-run panel with current and best score.

use crate::core::events::CrashCause;
use crate::game::Scoreboard;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub const PANEL_WIDTH: u16 = 22;
pub const PANEL_HEIGHT: u16 = 5;

/// Panel rectangle horizontally centred on `center_col` with its top at
/// `top_row`, pushed back inside `bounds` if it would overflow.
pub fn panel_area(center_col: u16, top_row: u16, bounds: Rect) -> Rect {
    let width = PANEL_WIDTH.min(bounds.width);
    let height = PANEL_HEIGHT.min(bounds.height);

    let max_x = bounds.right().saturating_sub(width);
    let max_y = bounds.bottom().saturating_sub(height);
    let x = center_col
        .saturating_sub(width / 2)
        .clamp(bounds.x, max_x.max(bounds.x));
    let y = top_row.clamp(bounds.y, max_y.max(bounds.y));
    Rect::new(x, y, width, height)
}

pub fn render_scoreboard(
    frame: &mut Frame,
    area: Rect,
    board: &Scoreboard,
    cause: Option<CrashCause>,
) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let new_best = board.current > 0 && board.current >= board.best;
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Score ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                board.current.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Best ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                board.best.to_string(),
                Style::default().fg(if new_best {
                    Color::Green
                } else {
                    Color::White
                }),
            ),
        ]),
    ];
    if let Some(cause) = cause {
        lines.push(Line::from(Span::styled(
            cause.describe(),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_centred_on_anchor() {
        let bounds = Rect::new(0, 0, 80, 40);
        assert_eq!(panel_area(40, 20, bounds), Rect::new(29, 20, 22, 5));
    }

    #[test]
    fn test_panel_kept_inside_bounds() {
        let bounds = Rect::new(5, 2, 40, 20);
        assert_eq!(panel_area(6, 30, bounds), Rect::new(5, 17, 22, 5));
        assert_eq!(panel_area(44, 0, bounds), Rect::new(23, 2, 22, 5));
    }

    #[test]
    fn test_panel_shrinks_in_tiny_area() {
        let bounds = Rect::new(0, 0, 10, 3);
        assert_eq!(panel_area(5, 0, bounds), Rect::new(0, 0, 10, 3));
    }
}
