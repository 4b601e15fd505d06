//! Tic-Tac-Toe board primitives and game session

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, Cell, Player};
pub use game::{Game, GameOutcome, MINIMAX_DEPTH};
pub use lines::{LineAnalyzer, WINNING_LINES};
