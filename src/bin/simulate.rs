use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use plinko::ai::{
    choose_best_column, compute_expected_values, Agent, ExpectedValueAgent, RandomAgent,
};
use plinko::config::AppConfig;
use plinko::game::{Board, OffBoardPolicy, Player};
use plinko::session::{Session, SessionOutcome};
use plinko::sim::{run_trials, simulate_fall_and_score};

/// Evaluate a Plinko board headlessly.
#[derive(Parser)]
#[command(name = "simulate", about = "Expected values and Monte Carlo drops for a Plinko board")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "plinko.toml")]
    config: PathBuf,

    /// Override drops per column
    #[arg(long)]
    trials: Option<usize>,

    /// Seed for the random source
    #[arg(long)]
    seed: Option<u64>,

    /// Drop a single ball into this column and print its path
    #[arg(long)]
    column: Option<usize>,

    /// Play a headless match of this many rounds: random human vs AI
    #[arg(long)]
    rounds: Option<usize>,

    /// Off-board policy: nudge or lost
    #[arg(long)]
    off_board: Option<String>,

    /// Print the board layout
    #[arg(long)]
    show_board: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(trials) = cli.trials {
        config.simulation.trials = trials;
    }
    if let Some(seed) = cli.seed {
        config.simulation.seed = Some(seed);
    }
    if let Some(policy) = cli.off_board.as_deref() {
        config.board.off_board = match policy {
            "nudge" => OffBoardPolicy::Nudge,
            "lost" => OffBoardPolicy::Lost,
            other => bail!("unknown off-board policy '{}' (expected 'nudge' or 'lost')", other),
        };
    }
    config.validate().context("validating config")?;

    let board = config.board.build().context("building board")?;
    let mut rng = match config.simulation.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if cli.show_board {
        println!("{board}");
        println!();
    }

    if let Some(column) = cli.column {
        let fall = simulate_fall_and_score(&board, column, &mut rng)
            .with_context(|| format!("dropping into column {column}"))?;
        let path: Vec<String> = fall
            .path
            .iter()
            .map(|p| format!("({}, {})", p.row, p.col))
            .collect();
        println!("Path: {}", path.join(" -> "));
        match fall.slot {
            Some(slot) => println!("Landed in slot {} for {} points", slot, fall.score),
            None => println!("Ball left the board: 0 points"),
        }
        return Ok(());
    }

    if let Some(rounds) = cli.rounds {
        return play_match(&board, rounds, &mut rng);
    }

    report_columns(&board, config.simulation.trials, &mut rng)
}

/// Expected value next to the Monte Carlo mean for every column.
fn report_columns(board: &Board, trials: usize, rng: &mut StdRng) -> Result<()> {
    let expected = compute_expected_values(board);
    let (best, best_value) = choose_best_column(board);

    println!(
        "{}x{} board, {} drops per column",
        board.rows(),
        board.columns(),
        trials
    );
    println!("-------------------------------------------");
    println!("col | score | expected | simulated | lost");
    for (col, &ev) in expected.iter().enumerate() {
        let stats = run_trials(board, col, trials, rng)?;
        let marker = if col == best { " <- AI" } else { "" };
        println!(
            "{:>3} | {:>5} | {:>8.2} | {:>9.2} | {:>4.1}%{}",
            col,
            board.slot_scores()[col],
            ev,
            stats.mean_score(),
            stats.loss_rate() * 100.0,
            marker
        );
    }
    println!("-------------------------------------------");
    println!("AI chooses column {} (expected {:.2})", best, best_value);
    Ok(())
}

/// A random player against the expected-value AI.
fn play_match(board: &Board, rounds: usize, rng: &mut StdRng) -> Result<()> {
    if rounds == 0 {
        bail!("--rounds must be > 0");
    }
    let mut session = Session::new(rounds);
    let mut human = RandomAgent::seeded(rng.random());
    let mut ai = ExpectedValueAgent;

    while !session.is_over() {
        let column = human.select_column(board);
        let report = session.play_round(board, column, &mut ai, rng)?;
        println!(
            "Round {} | Human: column {} -> +{} | AI: column {} -> +{}",
            report.round,
            report.human.column,
            report.human.fall.score,
            report.ai.column,
            report.ai.fall.score
        );
    }

    println!("-------------------------------------------");
    println!(
        "Final score: Human {} - AI {}",
        session.score(Player::Human),
        session.score(Player::Ai)
    );
    match session.outcome() {
        Some(SessionOutcome::Winner(player)) => println!("{} wins!", player.name()),
        Some(SessionOutcome::Tie) => println!("It is a tie."),
        None => {}
    }
    Ok(())
}
