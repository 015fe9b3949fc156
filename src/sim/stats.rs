use rand::Rng;

use super::fall::{simulate_fall_and_score, ScoredFall};
use crate::error::BoardError;
use crate::game::{Board, Score};

/// Aggregate outcome of many drops into one column.
#[derive(Debug, Clone, PartialEq)]
pub struct DropStats {
    column: usize,
    drops: usize,
    lost: usize,
    total_score: Score,
    slot_counts: Vec<usize>,
}

impl DropStats {
    pub fn new(column: usize, columns: usize) -> Self {
        DropStats {
            column,
            drops: 0,
            lost: 0,
            total_score: 0,
            slot_counts: vec![0; columns],
        }
    }

    pub fn record(&mut self, fall: &ScoredFall) {
        self.drops += 1;
        self.total_score += fall.score;
        match fall.slot {
            Some(col) => {
                if let Some(count) = self.slot_counts.get_mut(col) {
                    *count += 1;
                }
            }
            None => self.lost += 1,
        }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn drops(&self) -> usize {
        self.drops
    }

    pub fn lost(&self) -> usize {
        self.lost
    }

    pub fn total_score(&self) -> Score {
        self.total_score
    }

    /// Mean score per drop, 0 before any drop.
    pub fn mean_score(&self) -> f64 {
        if self.drops == 0 {
            return 0.0;
        }
        self.total_score as f64 / self.drops as f64
    }

    /// Fraction of drops that left the board.
    pub fn loss_rate(&self) -> f64 {
        if self.drops == 0 {
            return 0.0;
        }
        self.lost as f64 / self.drops as f64
    }

    /// Fraction of drops that ended in `slot`.
    pub fn slot_frequency(&self, slot: usize) -> f64 {
        if self.drops == 0 {
            return 0.0;
        }
        self.slot_counts.get(slot).copied().unwrap_or(0) as f64 / self.drops as f64
    }

    pub fn slot_counts(&self) -> &[usize] {
        &self.slot_counts
    }
}

/// Drop `trials` balls into `column` and collect their outcomes.
pub fn run_trials<R: Rng + ?Sized>(
    board: &Board,
    column: usize,
    trials: usize,
    rng: &mut R,
) -> Result<DropStats, BoardError> {
    let mut stats = DropStats::new(column, board.columns());
    for _ in 0..trials {
        let fall = simulate_fall_and_score(board, column, rng)?;
        stats.record(&fall);
    }
    Ok(stats)
}
