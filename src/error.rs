use std::path::PathBuf;

/// Precondition violations raised by board queries, edits and drops.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("column {col} is out of range (board has {cols} columns)")]
    ColumnOutOfRange { col: usize, cols: usize },

    #[error("cell ({row}, {col}) is not a peg")]
    NotAPeg { row: usize, col: usize },

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("slot score table has {got} entries, expected one per column ({expected})")]
    ScoreCountMismatch { expected: usize, got: usize },

    #[error("invalid cell value {value:?} (expected EMPTY or PEG)")]
    InvalidCell { value: String },

    #[error("board must have at least one column")]
    NoColumns,
}

/// Errors raised while playing a session of rounds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("all {rounds} rounds have been played")]
    GameOver { rounds: usize },

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("invalid board layout: {0}")]
    Board(#[from] BoardError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::OutOfBounds {
            row: 4,
            col: 9,
            rows: 3,
            cols: 7,
        };
        assert_eq!(err.to_string(), "cell (4, 9) is outside the 3x7 board");
    }

    #[test]
    fn test_not_a_peg_display() {
        let err = BoardError::NotAPeg { row: 0, col: 2 };
        assert_eq!(err.to_string(), "cell (0, 2) is not a peg");
    }

    #[test]
    fn test_session_error_wraps_board_error() {
        let err: SessionError = BoardError::ColumnOutOfRange { col: 8, cols: 7 }.into();
        assert_eq!(
            err.to_string(),
            "column 8 is out of range (board has 7 columns)"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.rounds must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.rounds must be > 0"
        );
    }
}
