//! Search engine: minimax with alpha-beta pruning and the CPU player built on it

pub mod minimax;
pub mod player;

pub use minimax::{
    SCORE_MAX, SCORE_MIN, SearchStats, Searcher, evaluate, find_best_move, minimax,
};
pub use player::MinimaxPlayer;
