//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, Player};

/// Full search depth: enough to reach every terminal state on a 3x3 board
pub const MINIMAX_DEPTH: u32 = 9;

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A game in progress: the board, the number of moves made and the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub board: Board,
    pub turn: u32,
    pub to_move: Player,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game with `first` to move
    pub fn new(first: Player) -> Self {
        Game {
            board: Board::new(),
            turn: 0,
            to_move: first,
            outcome: None,
        }
    }

    /// Play a move for the side to move.
    ///
    /// Returns the outcome once the move ends the game.
    pub fn play(&mut self, position: usize) -> Result<Option<GameOutcome>, crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let mover = self.to_move;
        self.board = self.board.try_make_move(position, mover)?;
        self.turn += 1;
        self.to_move = mover.opponent();

        self.outcome = if let Some(winner) = self.board.check_winner(mover) {
            Some(GameOutcome::Win(winner))
        } else if self.board.is_draw() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        Ok(self.outcome)
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Remaining search depth for this turn: `max_depth - turn`, floored at 0
    pub fn search_depth(&self, max_depth: u32) -> u32 {
        max_depth.saturating_sub(self.turn)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::Human)
    }
}
