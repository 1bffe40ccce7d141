use crate::game::{Cell, Player};
use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// Token color for each player.
pub fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

/// Styled three-column span for one board cell.
pub fn cell_span(cell: Cell) -> Span<'static> {
    match cell {
        Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(player) => {
            Span::styled(" \u{25cf} ", Style::default().fg(player_color(player)))
        }
    }
}
