//! Board generators: the staggered classic layout and literal text layouts.

use super::board::{Board, Cell, Score};
use crate::error::BoardError;

pub const CLASSIC_ROWS: usize = 30;
pub const CLASSIC_SLOT_SCORES: [Score; 7] = [25, 50, 75, 200, 75, 50, 25];

/// Parameters for [`staggered`].
#[derive(Debug, Clone, PartialEq)]
pub struct StaggeredLayout {
    pub rows: usize,
    pub slot_scores: Vec<Score>,
    /// Rows left empty at the top before the first row of pegs.
    pub empty_top_rows: usize,
    /// Fill the first and last column with pegs below the empty top rows.
    pub edge_pegs: bool,
}

impl Default for StaggeredLayout {
    fn default() -> Self {
        StaggeredLayout {
            rows: CLASSIC_ROWS,
            slot_scores: CLASSIC_SLOT_SCORES.to_vec(),
            empty_top_rows: 0,
            edge_pegs: true,
        }
    }
}

/// Pegs at odd columns on even rows and at even interior columns on odd
/// rows, so every peg sits diagonally between two pegs of the row below.
pub fn staggered(layout: &StaggeredLayout) -> Result<Board, BoardError> {
    let cols = layout.slot_scores.len();
    let mut board = Board::empty(layout.rows, layout.slot_scores.clone())?;

    for row in layout.empty_top_rows..layout.rows {
        let first = if row % 2 == 0 { 1 } else { 2 };
        for col in (first..cols.saturating_sub(1)).step_by(2) {
            board.add_peg(row, col)?;
        }
        if layout.edge_pegs {
            board.add_peg(row, 0)?;
            board.add_peg(row, cols - 1)?;
        }
    }

    Ok(board)
}

/// Parse literal rows such as `".o.o."`. Every row must be as wide as
/// `slot_scores`.
pub fn parse<S: AsRef<str>>(rows: &[S], slot_scores: Vec<Score>) -> Result<Board, BoardError> {
    let grid = rows
        .iter()
        .map(|line| line.as_ref().chars().map(Cell::from_char).collect())
        .collect::<Result<Vec<Vec<Cell>>, _>>()?;
    Board::new(grid, slot_scores)
}

impl Board {
    /// The 30-row, 7-column board with peg walls at both edges.
    pub fn default_board() -> Board {
        staggered(&StaggeredLayout::default()).expect("classic layout is valid")
    }
}
