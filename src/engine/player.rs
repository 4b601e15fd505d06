//! CPU player backed by the minimax search

use rand::rngs::StdRng;
use tracing::info;

use super::minimax::find_best_move;
use crate::{Result, config::EngineConfig, ports::MoveSource, tictactoe::Game};

/// Plays the CPU side, searching `max_depth - turn` plies each move.
pub struct MinimaxPlayer {
    name: String,
    max_depth: u32,
    rng: StdRng,
}

impl MinimaxPlayer {
    pub fn new(name: String, config: &EngineConfig) -> Self {
        Self {
            name,
            max_depth: config.max_depth,
            rng: config.rng(),
        }
    }
}

impl MoveSource for MinimaxPlayer {
    fn select_move(&mut self, game: &Game) -> Result<usize> {
        let depth = game.search_depth(self.max_depth);
        let position = find_best_move(&game.board, depth, &mut self.rng)?;
        info!(player = %self.name, turn = game.turn, depth, position, "cpu move");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
