use std::path::Path;

use crate::error::ConfigError;
use crate::game::layout::{CLASSIC_ROWS, CLASSIC_SLOT_SCORES};
use crate::game::{parse, staggered, Board, OffBoardPolicy, Score, StaggeredLayout};
use crate::session::DEFAULT_ROUNDS;

/// Board layout settings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
    pub slot_scores: Vec<Score>,
    pub empty_top_rows: usize,
    pub edge_pegs: bool,
    /// Literal rows (`.` empty, `o` peg); overrides the generated layout.
    pub layout: Option<Vec<String>>,
    pub off_board: OffBoardPolicy,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: CLASSIC_ROWS,
            columns: CLASSIC_SLOT_SCORES.len(),
            slot_scores: CLASSIC_SLOT_SCORES.to_vec(),
            empty_top_rows: 0,
            edge_pegs: true,
            layout: None,
            off_board: OffBoardPolicy::Nudge,
        }
    }
}

impl BoardConfig {
    /// Build the configured board.
    pub fn build(&self) -> Result<Board, ConfigError> {
        let board = match &self.layout {
            Some(rows) => parse(rows, self.slot_scores.clone())?,
            None => staggered(&StaggeredLayout {
                rows: self.rows,
                slot_scores: self.slot_scores.clone(),
                empty_top_rows: self.empty_top_rows,
                edge_pegs: self.edge_pegs,
            })?,
        };
        Ok(board.with_off_board_policy(self.off_board))
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rounds: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rounds: DEFAULT_ROUNDS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Drops per column for Monte Carlo estimates.
    pub trials: usize,
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            trials: 10_000,
            seed: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub game: GameConfig,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let board = &self.board;
        if board.columns == 0 {
            return Err(ConfigError::Validation(
                "board.columns must be > 0".into(),
            ));
        }
        if board.slot_scores.len() != board.columns {
            return Err(ConfigError::Validation(format!(
                "board.slot_scores has {} entries, expected board.columns ({})",
                board.slot_scores.len(),
                board.columns
            )));
        }
        match &board.layout {
            Some(rows) if rows.is_empty() => {
                return Err(ConfigError::Validation(
                    "board.layout must have at least one row".into(),
                ));
            }
            Some(_) => {}
            None => {
                if board.rows == 0 {
                    return Err(ConfigError::Validation(
                        "board.rows must be > 0".into(),
                    ));
                }
                if board.empty_top_rows > board.rows {
                    return Err(ConfigError::Validation(
                        "board.empty_top_rows must be <= board.rows".into(),
                    ));
                }
            }
        }
        if self.game.rounds == 0 {
            return Err(ConfigError::Validation(
                "game.rounds must be > 0".into(),
            ));
        }
        if self.simulation.trials == 0 {
            return Err(ConfigError::Validation(
                "simulation.trials must be > 0".into(),
            ));
        }

        // Literal layouts are only checked by building them.
        board.build()?;
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
