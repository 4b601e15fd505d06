//! JSON board/turn exchange for the single-request endpoint
//!
//! A request carries nine cells (`null`, `"X"` or `"O"`) and the number of moves
//! made so far. Answering it goes through three steps:
//!
//! 1. placeholders are replaced by their display index `"1"`..`"9"`,
//! 2. the CPU makes one move at depth `max_depth - turn`,
//! 3. every cell that is not a mark goes back to `null` and `turn` is bumped.
//!
//! The response has the same shape as the request.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    Error, Result,
    engine::find_best_move,
    tictactoe::{Board, Cell, Player},
};

/// Request and response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Vec<Option<String>>,
    pub turn: u32,
}

/// Replace every placeholder with its 1-indexed position.
pub fn remove_placeholders(board: &[Option<String>]) -> Vec<String> {
    board
        .iter()
        .enumerate()
        .map(|(i, cell)| cell.clone().unwrap_or_else(|| (i + 1).to_string()))
        .collect()
}

/// Turn every cell that is not `"X"` or `"O"` back into a placeholder.
pub fn restore_placeholders(board: &[String]) -> Vec<Option<String>> {
    board
        .iter()
        .map(|cell| match cell.as_str() {
            "X" | "O" => Some(cell.clone()),
            _ => None,
        })
        .collect()
}

/// Parse display cells (`"X"`, `"O"` or a position digit) into a board
pub fn parse_display(cells: &[String]) -> Result<Board> {
    if cells.len() != 9 {
        return Err(Error::InvalidBoardLength {
            expected: 9,
            got: cells.len(),
            context: format!("{cells:?}"),
        });
    }

    let mut board = Board::new();
    for (i, symbol) in cells.iter().enumerate() {
        board.cells[i] = match symbol.as_str() {
            "X" => Cell::X,
            "O" => Cell::O,
            digit if digit == (i + 1).to_string() => Cell::Empty,
            _ => {
                return Err(Error::InvalidCellSymbol {
                    symbol: symbol.clone(),
                    position: i,
                });
            }
        };
    }
    Ok(board)
}

/// Render a board as display cells
pub fn to_display(board: &Board) -> Vec<String> {
    board
        .cells
        .iter()
        .enumerate()
        .map(|(i, cell)| match cell {
            Cell::Empty => (i + 1).to_string(),
            mark => mark.to_char().to_string(),
        })
        .collect()
}

/// One CPU move over a display-format board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Play {
    pub board: Vec<String>,
    pub turn: u32,
}

impl Play {
    /// Take a request and swap its placeholders for display indices
    pub fn from_request(state: &GameState) -> Self {
        Self {
            board: remove_placeholders(&state.board),
            turn: state.turn,
        }
    }

    /// Make the CPU move and advance the turn.
    ///
    /// A board that is already won or full is left as is and `None` is
    /// returned.
    pub fn cpu_move<R: Rng + ?Sized>(
        &mut self,
        max_depth: u32,
        rng: &mut R,
    ) -> Result<Option<usize>> {
        let board = parse_display(&self.board)?;
        if board.has_line() || board.is_full() {
            warn!(
                board = %board.encode(),
                turn = self.turn,
                "game already over, no move made"
            );
            return Ok(None);
        }

        let depth = max_depth.saturating_sub(self.turn);
        let position = find_best_move(&board, depth, rng)?;
        self.board = to_display(&board.make_move(position, Player::Cpu));
        self.turn += 1;
        debug!(position, turn = self.turn, "cpu move applied");
        Ok(Some(position))
    }

    /// Back to the request shape, placeholders restored
    pub fn into_response(self) -> GameState {
        GameState {
            board: restore_placeholders(&self.board),
            turn: self.turn,
        }
    }
}

/// Answer a request with one CPU move
pub fn respond<R: Rng + ?Sized>(
    state: &GameState,
    max_depth: u32,
    rng: &mut R,
) -> Result<GameState> {
    let mut play = Play::from_request(state);
    play.cpu_move(max_depth, rng)?;
    Ok(play.into_response())
}

/// Same as [`respond`] over JSON text
pub fn respond_json<R: Rng + ?Sized>(
    request: &str,
    max_depth: u32,
    rng: &mut R,
) -> Result<String> {
    let state: GameState = serde_json::from_str(request)?;
    let response = respond(&state, max_depth, rng)?;
    Ok(serde_json::to_string(&response)?)
}
