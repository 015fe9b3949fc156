use crate::game::Board;

use super::expected_value::choose_best_column;

/// Universal interface for anything that picks a drop column.
pub trait Agent {
    /// Select a column in `0..board.columns()` for the next drop.
    fn select_column(&mut self, board: &Board) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Always drops into the column with the highest expected score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpectedValueAgent;

impl Agent for ExpectedValueAgent {
    fn select_column(&mut self, board: &Board) -> usize {
        choose_best_column(board).0
    }

    fn name(&self) -> &str {
        "Expected value"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::parse;

    #[test]
    fn test_expected_value_agent_picks_best_column() {
        let board = parse(&[".o."], vec![5, 7, 9]).unwrap();
        let mut agent = ExpectedValueAgent;
        assert_eq!(agent.select_column(&board), 2);
    }

    #[test]
    fn test_expected_value_agent_name() {
        assert_eq!(ExpectedValueAgent.name(), "Expected value");
    }
}
