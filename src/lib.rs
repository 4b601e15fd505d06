//! Tic-Tac-Toe CPU opponent
//!
//! This crate provides:
//! - Board primitives: move legality, move application, win and draw detection
//! - A depth-bounded minimax search with alpha-beta pruning for the CPU side
//! - A console game loop and a JSON single-request endpoint built on the search

pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod ports;
pub mod tictactoe;
pub mod wire;

pub use config::EngineConfig;
pub use engine::{MinimaxPlayer, evaluate, find_best_move, minimax};
pub use error::{Error, Result};
pub use tictactoe::{Board, Cell, Game, GameOutcome, MINIMAX_DEPTH, Player};
