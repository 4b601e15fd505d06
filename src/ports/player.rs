//! Move source port - anything that can choose the next move of a game
//!
//! The console loop and the tests drive a [`Game`] through this trait, so the
//! CPU and the human (or a scripted stand-in for one) are interchangeable.

use crate::{Result, tictactoe::Game};

/// Chooses moves for one side of a game
pub trait MoveSource {
    /// Select a position (0-8) for the side to move in `game`.
    ///
    /// # Errors
    ///
    /// Returns an error if no move can be produced, e.g. the board is full or
    /// the input behind the source is exhausted.
    fn select_move(&mut self, game: &Game) -> Result<usize>;

    /// Name used in logs and messages
    fn name(&self) -> &str;
}
