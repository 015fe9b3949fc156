use crate::game::{Board, Pos};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Width of one rendered column, wide enough for a three-digit score.
pub const CELL_WIDTH: usize = 5;

/// A drop path to highlight, with the slot it ended in.
pub struct PathOverlay<'a> {
    pub path: &'a [Pos],
    pub slot: Option<usize>,
    pub color: Color,
}

fn centered(text: &str) -> String {
    format!("{text:^width$}", width = CELL_WIDTH)
}

/// Overlay color for a cell, later overlays winning.
fn overlay_color(overlays: &[PathOverlay<'_>], pos: Pos) -> Option<Color> {
    overlays
        .iter()
        .rev()
        .find(|o| o.path.contains(&pos))
        .map(|o| o.color)
}

/// Lines for the column selector, peg grid and slot scores.
pub fn board_lines(
    board: &Board,
    selected_column: Option<usize>,
    overlays: &[PathOverlay<'_>],
) -> Vec<Line<'static>> {
    let cols = board.columns();
    let mut lines = Vec::with_capacity(board.rows() + 4);

    let mut header = Vec::with_capacity(cols);
    for col in 0..cols {
        let label = centered(&col.to_string());
        if Some(col) == selected_column {
            header.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            header.push(Span::raw(label));
        }
    }
    lines.push(Line::from(header));

    let mut indicator = Vec::with_capacity(cols);
    for col in 0..cols {
        let symbol = if Some(col) == selected_column { "\u{25bc}" } else { " " };
        indicator.push(Span::styled(centered(symbol), Style::default().fg(Color::Cyan)));
    }
    lines.push(Line::from(indicator));

    for row in 0..board.rows() {
        let mut spans = Vec::with_capacity(cols);
        for col in 0..cols {
            let pos = Pos::new(row, col);
            let span = match (board.is_peg(row, col), overlay_color(overlays, pos)) {
                (true, Some(color)) => Span::styled(
                    centered("\u{25cf}"),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                (true, None) => Span::styled(centered("\u{00b7}"), Style::default().fg(Color::Gray)),
                (false, _) => Span::raw(centered(" ")),
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    let mut slots = Vec::with_capacity(cols);
    for (col, score) in board.slot_scores().iter().enumerate() {
        let hit = overlays.iter().rev().find(|o| o.slot == Some(col));
        let style = match hit {
            Some(o) => Style::default()
                .fg(Color::Black)
                .bg(o.color)
                .add_modifier(Modifier::BOLD),
            None => Style::default().fg(Color::Yellow),
        };
        slots.push(Span::styled(centered(&score.to_string()), style));
    }
    lines.push(Line::from(slots));

    lines
}
