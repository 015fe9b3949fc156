use rand::Rng;

use super::score::score_outcome;
use crate::ai::BRANCH_PROBABILITY;
use crate::error::BoardError;
use crate::game::{Board, Node, OffBoardPolicy, Pos, Score};

/// One concrete fall: the pegs touched in order, and the slot reached
/// (`None` when the ball left the board).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fall {
    pub path: Vec<Pos>,
    pub slot: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredFall {
    pub path: Vec<Pos>,
    pub slot: Option<usize>,
    pub score: Score,
}

/// Drop a ball into `start_column` and bounce it peg to peg until it
/// reaches a slot or leaves the board.
///
/// Each peg costs one uniform draw from `rng`: below 0.5 prefers the left
/// branch, otherwise the right. A ball that never meets a peg consumes no
/// randomness. The row strictly increases at every step, so the path holds
/// at most one peg per row.
pub fn simulate_fall<R: Rng + ?Sized>(
    board: &Board,
    start_column: usize,
    rng: &mut R,
) -> Result<Fall, BoardError> {
    let mut current = match board.column_entry(start_column)? {
        Node::Slot(col) => {
            return Ok(Fall {
                path: Vec::new(),
                slot: Some(col),
            })
        }
        Node::Peg(pos) => pos,
    };
    let mut path = vec![current];

    loop {
        let (left, right) = board.children_of_peg(current.row, current.col)?;
        if left.is_none() && right.is_none() {
            log::trace!("ball lost at ({}, {})", current.row, current.col);
            return Ok(Fall { path, slot: None });
        }

        let go_left = rng.random::<f64>() < BRANCH_PROBABILITY;
        let (preferred, other) = if go_left { (left, right) } else { (right, left) };
        let chosen = match board.off_board_policy() {
            OffBoardPolicy::Nudge => preferred.or(other),
            OffBoardPolicy::Lost => preferred,
        };

        match chosen {
            None => {
                log::trace!("ball left the board from ({}, {})", current.row, current.col);
                return Ok(Fall { path, slot: None });
            }
            Some(Node::Slot(col)) => {
                return Ok(Fall {
                    path,
                    slot: Some(col),
                })
            }
            Some(Node::Peg(next)) => {
                log::trace!(
                    "bounce ({}, {}) -> ({}, {})",
                    current.row,
                    current.col,
                    next.row,
                    next.col
                );
                path.push(next);
                current = next;
            }
        }
    }
}

/// [`simulate_fall`] plus the points the drop earned.
pub fn simulate_fall_and_score<R: Rng + ?Sized>(
    board: &Board,
    start_column: usize,
    rng: &mut R,
) -> Result<ScoredFall, BoardError> {
    let Fall { path, slot } = simulate_fall(board, start_column, rng)?;
    let score = score_outcome(board, slot)?;
    Ok(ScoredFall { path, slot, score })
}
