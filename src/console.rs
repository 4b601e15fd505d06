//! Interactive console game: human against a [`MoveSource`]

use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    Error, Result,
    ports::MoveSource,
    tictactoe::{Board, Game, GameOutcome, Player},
};

/// Console session over any input/output pair.
///
/// Reads 1-indexed moves for the human, prints the board before every turn
/// and announces the result.
pub struct ConsoleGame<I, W> {
    input: I,
    output: W,
}

impl<I: BufRead, W: Write> ConsoleGame<I, W> {
    pub fn new(input: I, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output, e.g. to inspect what was printed
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play one game to the end.
    ///
    /// # Errors
    ///
    /// Fails if the input closes before the game ends, on write errors, or if
    /// `cpu` cannot produce a legal move.
    pub fn run<C: MoveSource + ?Sized>(
        &mut self,
        cpu: &mut C,
        first: Player,
    ) -> Result<GameOutcome> {
        let mut game = Game::new(first);

        let outcome = loop {
            writeln!(self.output, "{}", game.board)?;

            let position = match game.to_move {
                Player::Human => self.read_human_move(&game.board)?,
                Player::Cpu => {
                    let position = cpu.select_move(&game)?;
                    debug!(source = cpu.name(), position, "opponent move");
                    writeln!(self.output, "CPU input move: {}", position + 1)?;
                    position
                }
            };

            if let Some(outcome) = game.play(position)? {
                break outcome;
            }
        };

        writeln!(self.output, "{}", game.board)?;
        match outcome {
            GameOutcome::Win(Player::Human) => writeln!(self.output, "Player wins!")?,
            GameOutcome::Win(Player::Cpu) => writeln!(self.output, "CPU wins!")?,
            GameOutcome::Draw => writeln!(self.output, "It's a draw!")?,
        }
        debug!(?outcome, turns = game.turn, "game finished");

        Ok(outcome)
    }

    /// Prompt until the human enters the number of an empty cell.
    ///
    /// Returns the 0-indexed position.
    pub fn read_human_move(&mut self, board: &Board) -> Result<usize> {
        loop {
            write!(self.output, "Player, enter your move (1-9): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InputClosed);
            }

            match parse_position(&line) {
                Ok(position) if board.is_legal(position) => return Ok(position),
                Ok(_) => writeln!(self.output, "Invalid move, choose another position!")?,
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }
}

/// Parse a 1-indexed position typed by the human into a 0-indexed one.
pub fn parse_position(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    let number: usize = trimmed.parse().map_err(|_| Error::InvalidInput {
        input: trimmed.to_string(),
        reason: "enter a number from 1 to 9".to_string(),
    })?;

    if !(1..=9).contains(&number) {
        return Err(Error::InvalidInput {
            input: trimmed.to_string(),
            reason: "position must be between 1 and 9".to_string(),
        });
    }

    Ok(number - 1)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    /// Plays a fixed list of positions
    struct Scripted {
        moves: Vec<usize>,
    }

    impl MoveSource for Scripted {
        fn select_move(&mut self, _game: &Game) -> Result<usize> {
            if self.moves.is_empty() {
                return Err(Error::NoLegalMove);
            }
            Ok(self.moves.remove(0))
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    fn play(input: &str, cpu_moves: Vec<usize>, first: Player) -> (Result<GameOutcome>, String) {
        let mut console = ConsoleGame::new(Cursor::new(input.to_string()), Vec::new());
        let mut cpu = Scripted { moves: cpu_moves };
        let outcome = console.run(&mut cpu, first);
        let output = String::from_utf8(console.into_output()).unwrap();
        (outcome, output)
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("1\n").unwrap(), 0);
        assert_eq!(parse_position(" 9 ").unwrap(), 8);
        assert!(parse_position("0").is_err());
        assert!(parse_position("10").is_err());
        assert!(parse_position("abc").is_err());
        assert!(parse_position("").is_err());
    }

    #[test]
    fn test_human_wins() {
        // Human takes the top row while the CPU plays 4 and 5
        let (outcome, output) = play("1\n2\n3\n", vec![3, 4], Player::Human);
        assert_eq!(outcome.unwrap(), GameOutcome::Win(Player::Human));
        assert!(output.contains("CPU input move: 4"));
        assert!(output.ends_with("Player wins!\n"));
    }

    #[test]
    fn test_cpu_wins() {
        let (outcome, output) = play("1\n2\n9\n", vec![3, 4, 5], Player::Human);
        assert_eq!(outcome.unwrap(), GameOutcome::Win(Player::Cpu));
        assert!(output.ends_with("CPU wins!\n"));
    }

    #[test]
    fn test_draw() {
        // X: 1 3 4 6 8, O: 2 5 7 9
        let (outcome, output) = play("1\n3\n4\n6\n8\n", vec![1, 4, 6, 8], Player::Human);
        assert_eq!(outcome.unwrap(), GameOutcome::Draw);
        assert!(output.ends_with("It's a draw!\n"));
    }

    #[test]
    fn test_invalid_input_is_retried() {
        // "x" and "12" are rejected, the second "5" is already taken
        let (outcome, output) = play("x\n12\n5\n5\n2\n8\n", vec![0, 2], Player::Human);

        assert_eq!(outcome.unwrap(), GameOutcome::Win(Player::Human));
        assert!(output.contains("enter a number from 1 to 9"));
        assert!(output.contains("position must be between 1 and 9"));
        assert!(output.contains("Invalid move, choose another position!"));
    }

    #[test]
    fn test_closed_input() {
        let (outcome, _) = play("1\n", vec![4], Player::Human);
        assert!(matches!(outcome, Err(Error::InputClosed)));
    }

    #[test]
    fn test_cpu_first() {
        let (outcome, output) = play("4\n5\n", vec![0, 1, 2], Player::Cpu);
        assert_eq!(outcome.unwrap(), GameOutcome::Win(Player::Cpu));
        assert!(output.starts_with("1 | 2 | 3"));
        assert!(output.contains("CPU input move: 1"));
    }
}
