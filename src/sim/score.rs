use crate::error::BoardError;
use crate::game::{Board, Score};

/// Points for a drop that ended in `slot`; a lost ball scores 0.
pub fn score_outcome(board: &Board, slot: Option<usize>) -> Result<Score, BoardError> {
    match slot {
        Some(col) => board.slot_score(col),
        None => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_scores_and_lost_balls() {
        let board = Board::empty(0, vec![5, 7, 9]).unwrap();
        assert_eq!(score_outcome(&board, Some(1)), Ok(7));
        assert_eq!(score_outcome(&board, None), Ok(0));
        assert!(score_outcome(&board, Some(3)).is_err());
    }
}
