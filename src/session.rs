//! Round bookkeeping for front-ends: a fixed number of rounds in which the
//! human drops first and the AI answers. The board is always passed in.

use rand::Rng;

use crate::ai::Agent;
use crate::error::SessionError;
use crate::game::{Board, Player, Score};
use crate::sim::{simulate_fall_and_score, ScoredFall};

pub const DEFAULT_ROUNDS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Winner(Player),
    Tie,
}

/// One player's drop within a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub player: Player,
    pub column: usize,
    pub fall: ScoredFall,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub round: usize,
    pub human: Turn,
    pub ai: Turn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    rounds: usize,
    rounds_played: usize,
    human_score: Score,
    ai_score: Score,
    last_round: Option<RoundReport>,
}

impl Session {
    pub fn new(rounds: usize) -> Self {
        Session {
            rounds,
            rounds_played: 0,
            human_score: 0,
            ai_score: 0,
            last_round: None,
        }
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// 1-based number of the round about to be played.
    pub fn current_round(&self) -> usize {
        (self.rounds_played + 1).min(self.rounds)
    }

    pub fn score(&self, player: Player) -> Score {
        match player {
            Player::Human => self.human_score,
            Player::Ai => self.ai_score,
        }
    }

    pub fn last_round(&self) -> Option<&RoundReport> {
        self.last_round.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.rounds_played >= self.rounds
    }

    /// Final result, once every round has been played.
    pub fn outcome(&self) -> Option<SessionOutcome> {
        if !self.is_over() {
            return None;
        }
        Some(match self.human_score.cmp(&self.ai_score) {
            std::cmp::Ordering::Greater => SessionOutcome::Winner(Player::Human),
            std::cmp::Ordering::Less => SessionOutcome::Winner(Player::Ai),
            std::cmp::Ordering::Equal => SessionOutcome::Tie,
        })
    }

    /// Drop the human ball into `human_column`, then let `agent` pick and drop.
    /// Nothing changes if the column is invalid or the session is over.
    pub fn play_round<R: Rng + ?Sized>(
        &mut self,
        board: &Board,
        human_column: usize,
        agent: &mut dyn Agent,
        rng: &mut R,
    ) -> Result<&RoundReport, SessionError> {
        if self.is_over() {
            return Err(SessionError::GameOver {
                rounds: self.rounds,
            });
        }

        let human = Turn {
            player: Player::Human,
            column: human_column,
            fall: simulate_fall_and_score(board, human_column, rng)?,
        };
        let ai_column = agent.select_column(board);
        let ai = Turn {
            player: Player::Ai,
            column: ai_column,
            fall: simulate_fall_and_score(board, ai_column, rng)?,
        };

        self.human_score += human.fall.score;
        self.ai_score += ai.fall.score;
        self.rounds_played += 1;
        log::debug!(
            "round {}: human {} in column {}, {} {} in column {}",
            self.rounds_played,
            human.fall.score,
            human_column,
            agent.name(),
            ai.fall.score,
            ai_column
        );

        Ok(self.last_round.insert(RoundReport {
            round: self.rounds_played,
            human,
            ai,
        }))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_ROUNDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ExpectedValueAgent;
    use crate::error::BoardError;
    use crate::game::parse;
    use crate::sim::FixedRng;

    /// Always answers the same column.
    struct FixedAgent(usize);

    impl Agent for FixedAgent {
        fn select_column(&mut self, _board: &Board) -> usize {
            self.0
        }

        fn name(&self) -> &str {
            "Fixed"
        }
    }

    #[test]
    fn test_new_session() {
        let session = Session::default();
        assert_eq!(session.rounds(), 5);
        assert_eq!(session.current_round(), 1);
        assert!(!session.is_over());
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn test_round_accumulates_scores() {
        let board = parse(&[".o."], vec![5, 7, 9]).unwrap();
        let mut session = Session::new(2);
        let mut agent = ExpectedValueAgent;
        let mut rng = FixedRng::left();

        let report = session.play_round(&board, 1, &mut agent, &mut rng).unwrap();
        assert_eq!(report.round, 1);
        assert_eq!(report.human.fall.slot, Some(0));
        assert_eq!(report.ai.column, 2);
        assert_eq!(report.ai.fall.score, 9);

        assert_eq!(session.score(Player::Human), 5);
        assert_eq!(session.score(Player::Ai), 9);
        assert_eq!(session.current_round(), 2);
    }

    #[test]
    fn test_session_ends_after_last_round() {
        let board = Board::empty(1, vec![1, 2]).unwrap();
        let mut session = Session::new(1);
        let mut agent = FixedAgent(0);
        let mut rng = FixedRng::left();

        session.play_round(&board, 1, &mut agent, &mut rng).unwrap();
        assert!(session.is_over());
        assert_eq!(
            session.outcome(),
            Some(SessionOutcome::Winner(Player::Human))
        );
        assert_eq!(
            session.play_round(&board, 1, &mut agent, &mut rng),
            Err(SessionError::GameOver { rounds: 1 })
        );
    }

    #[test]
    fn test_tie() {
        let board = Board::empty(1, vec![3, 3]).unwrap();
        let mut session = Session::new(1);
        session
            .play_round(&board, 0, &mut FixedAgent(1), &mut FixedRng::left())
            .unwrap();
        assert_eq!(session.outcome(), Some(SessionOutcome::Tie));
    }

    #[test]
    fn test_invalid_column_leaves_session_untouched() {
        let board = Board::empty(1, vec![1, 2]).unwrap();
        let mut session = Session::new(3);
        let before = session.clone();
        let err = session
            .play_round(&board, 5, &mut FixedAgent(0), &mut FixedRng::left())
            .unwrap_err();
        assert_eq!(
            err,
            SessionError::Board(BoardError::ColumnOutOfRange { col: 5, cols: 2 })
        );
        assert_eq!(session, before);
    }
}
