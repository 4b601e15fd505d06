//! Error types for the tic-tac-toe engine

use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("illegal move: position {position} is already occupied")]
    IllegalMove { position: usize },

    #[error("no legal moves available")]
    NoLegalMove,

    #[error("game already over")]
    GameOver,

    #[error("board has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid cell symbol '{symbol}' at position {position} (expected null, 'X' or 'O')")]
    InvalidCellSymbol { symbol: String, position: usize },

    #[error("invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("input closed before the game finished")]
    InputClosed,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
