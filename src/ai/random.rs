use crate::game::Board;
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that selects a column uniformly at random.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, board: &Board) -> usize {
        self.rng.random_range(0..board.columns())
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent_selects_valid_column() {
        let mut agent = RandomAgent::new();
        let board = Board::default_board();

        for _ in 0..100 {
            let col = agent.select_column(&board);
            assert!(col < board.columns(), "Column {} is out of range", col);
        }
    }

    #[test]
    fn test_seeded_agents_agree() {
        let board = Board::default_board();
        let mut a = RandomAgent::seeded(7);
        let mut b = RandomAgent::seeded(7);
        for _ in 0..20 {
            assert_eq!(a.select_column(&board), b.select_column(&board));
        }
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
