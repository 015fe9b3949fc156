use crate::ai::{compute_expected_values, Agent, ExpectedValueAgent};
use crate::error::SessionError;
use crate::game::Board;
use crate::session::{Session, SessionOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use ratatui::{backend::Backend, Terminal};
use std::io;

use super::game_view::{self, GameView};

pub struct App {
    board: Board,
    session: Session,
    agent: Box<dyn Agent>,
    rng: StdRng,
    selected_column: usize,
    show_expected: bool,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(board: Board, rounds: usize, rng: StdRng) -> Self {
        let selected_column = board.columns() / 2; // Start in middle
        App {
            board,
            session: Session::new(rounds),
            agent: Box::new(ExpectedValueAgent),
            rng,
            selected_column,
            show_expected: false,
            should_quit: false,
            message: Some("Pick a column and press Enter to drop".to_string()),
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.board.columns() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_ball();
            }
            KeyCode::Char('e') => {
                self.show_expected = !self.show_expected;
            }
            KeyCode::Char('r') => {
                self.session = Session::new(self.session.rounds());
                self.selected_column = self.board.columns() / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Play one round with the human ball in the selected column
    fn drop_ball(&mut self) {
        let result = self.session.play_round(
            &self.board,
            self.selected_column,
            self.agent.as_mut(),
            &mut self.rng,
        );

        let text = match result {
            Ok(report) => {
                let mut text = format!(
                    "You: column {} -> +{}   |   AI: column {} -> +{}",
                    report.human.column,
                    report.human.fall.score,
                    report.ai.column,
                    report.ai.fall.score
                );
                match self.session.outcome() {
                    Some(SessionOutcome::Winner(player)) => {
                        text.push_str(&format!("   {} wins!", player.name()))
                    }
                    Some(SessionOutcome::Tie) => text.push_str("   It's a tie!"),
                    None => {}
                }
                text
            }
            Err(SessionError::GameOver { .. }) => "Game over! Press 'r' to restart.".to_string(),
            Err(SessionError::Board(err)) => format!("Invalid drop: {err}"),
        };
        self.message = Some(text);
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let expected = self.show_expected.then(|| compute_expected_values(&self.board));
        let view = GameView {
            board: &self.board,
            session: &self.session,
            selected_column: self.selected_column,
            message: &self.message,
            expected_values: expected.as_deref(),
        };
        game_view::render(frame, &view);
    }
}
