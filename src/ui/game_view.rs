use crate::game::{Board, Player};
use crate::session::{Session, SessionOutcome};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{board_lines, PathOverlay, CELL_WIDTH};

pub const HUMAN_COLOR: Color = Color::Cyan;
pub const AI_COLOR: Color = Color::Red;

/// Everything the game screen shows.
pub struct GameView<'a> {
    pub board: &'a Board,
    pub session: &'a Session,
    pub selected_column: usize,
    pub message: &'a Option<String>,
    pub expected_values: Option<&'a [f64]>,
}

pub fn render(frame: &mut Frame, view: &GameView<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, view.session, chunks[0]);
    render_board(frame, view, chunks[1]);
    render_message(frame, view.message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, session: &Session, area: Rect) {
    let status = match session.outcome() {
        Some(SessionOutcome::Winner(player)) => format!("Game Over  |  {} wins", player.name()),
        Some(SessionOutcome::Tie) => "Game Over  |  Tie".to_string(),
        None => format!("Round {}/{}", session.current_round(), session.rounds()),
    };

    let header = Line::from(vec![
        Span::styled(
            format!("Human {}", session.score(Player::Human)),
            Style::default().fg(HUMAN_COLOR).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("   {status}   ")),
        Span::styled(
            format!("AI {}", session.score(Player::Ai)),
            Style::default().fg(AI_COLOR).add_modifier(Modifier::BOLD),
        ),
    ]);

    let header = Paragraph::new(header)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Plinko"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, view: &GameView<'_>, area: Rect) {
    let mut overlays = Vec::new();
    if let Some(report) = view.session.last_round() {
        overlays.push(PathOverlay {
            path: &report.human.fall.path,
            slot: report.human.fall.slot,
            color: HUMAN_COLOR,
        });
        overlays.push(PathOverlay {
            path: &report.ai.fall.path,
            slot: report.ai.fall.slot,
            color: AI_COLOR,
        });
    }

    let mut lines = board_lines(view.board, Some(view.selected_column), &overlays);
    if let Some(values) = view.expected_values {
        let spans: Vec<Span> = values
            .iter()
            .map(|v| {
                Span::styled(
                    format!("{:^width$.0}", v, width = CELL_WIDTH),
                    Style::default().fg(Color::Magenta),
                )
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let board_widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter: Drop  |  E: Expected values  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
