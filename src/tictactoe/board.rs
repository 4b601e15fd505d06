//! Board representation and basic operations

use std::fmt;

use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// Parse a single cell.
    ///
    /// Display digits `1`-`9` stand for empty cells, so a board copied from
    /// the console grid parses back to the same position.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '1'..='9' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::Human),
            Cell::O => Some(Player::Cpu),
            Cell::Empty => None,
        }
    }
}

/// One of the two sides of the game.
///
/// The human ("Player") always marks `X`, the CPU always marks `O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Human,
    Cpu,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Cpu,
            Player::Cpu => Player::Human,
        }
    }

    /// Convert player to the mark it places
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Human => Cell::X,
            Player::Cpu => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "Player"),
            Player::Cpu => write!(f, "CPU"),
        }
    }
}

/// A 3x3 board, row-major, indices 0..8.
///
/// The board is a plain value: every move returns a new board and leaves the
/// original untouched, so search branches never alias each other. Mark
/// alternation is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Board { cells }
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace and the grid separators `|`, `+`, `-` and `,` are ignored,
    /// so both `"XX.OO...."` and the console rendering are accepted.
    ///
    /// # Errors
    ///
    /// Returns error if the string does not hold exactly 9 cells or a
    /// character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '|' | '+' | '-' | ','))
            .collect();

        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a move at `pos` is legal, i.e. the cell exists and is empty
    pub fn is_legal(&self, pos: usize) -> bool {
        self.cells.get(pos) == Some(&Cell::Empty)
    }

    /// Get all empty positions in board order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// All legal positions, shuffled with `rng`.
    ///
    /// The search relies on this order for tie-breaking: among equally scored
    /// moves the first one enumerated wins.
    pub fn possible_moves<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<usize> {
        let mut moves = self.empty_positions();
        moves.shuffle(rng);
        moves
    }

    /// Place `player`'s mark at `pos` and return the new board.
    ///
    /// Legality is not checked: an occupied cell is overwritten. Call
    /// [`is_legal`](Self::is_legal) first, or use
    /// [`try_make_move`](Self::try_make_move).
    ///
    /// # Panics
    ///
    /// Panics if `pos >= 9`.
    #[must_use = "make_move returns a new board; the original is unchanged"]
    pub fn make_move(&self, pos: usize, player: Player) -> Board {
        let mut next = *self;
        next.cells[pos] = player.to_cell();
        next
    }

    /// Checked variant of [`make_move`](Self::make_move)
    #[must_use = "try_make_move returns a new board; the original is unchanged"]
    pub fn try_make_move(&self, pos: usize, player: Player) -> Result<Board, crate::Error> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }

        if !self.is_legal(pos) {
            return Err(crate::Error::IllegalMove { position: pos });
        }

        Ok(self.make_move(pos, player))
    }

    /// Report `player` as the winner if any line is complete.
    ///
    /// The marks on the line are not matched against `player`; the label is
    /// taken on trust. Call this right after a move with the mover's identity.
    pub fn check_winner(&self, player: Player) -> Option<Player> {
        self.has_line().then_some(player)
    }

    /// Check if any row, column or diagonal holds three identical marks
    pub fn has_line(&self) -> bool {
        LineAnalyzer::has_line(&self.cells)
    }

    /// Check if no empty cell is left
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the position is a draw (all cells filled, no completed line)
    pub fn is_draw(&self) -> bool {
        self.is_full() && !self.has_line()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Compact single-line encoding, e.g. `XX.OO....`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Console grid, empty cells shown by their 1-indexed position:
///
/// ```text
/// X | 2 | 3
/// --+---+--
/// 4 | O | 6
/// --+---+--
/// 7 | 8 | 9
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let symbols: Vec<String> = (0..3)
                .map(|col| {
                    let pos = row * 3 + col;
                    match self.cells[pos] {
                        Cell::Empty => (pos + 1).to_string(),
                        cell => cell.to_char().to_string(),
                    }
                })
                .collect();
            write!(f, "{}", symbols.join(" | "))?;
            if row < 2 {
                write!(f, "\n--+---+--\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        for i in 0..9 {
            assert_eq!(board.cells[i], Cell::Empty);
            assert!(board.is_legal(i));
        }
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_make_move_returns_new_board() {
        let board = Board::new();
        let next = board.make_move(4, Player::Cpu);

        assert_eq!(next.cells[4], Cell::O);
        assert_eq!(board.cells[4], Cell::Empty);
        assert_eq!(next.occupied_count(), 1);
    }

    #[test]
    fn test_make_move_overwrites_occupied_cell() {
        let board = Board::new().make_move(0, Player::Human);
        let next = board.make_move(0, Player::Cpu);
        assert_eq!(next.cells[0], Cell::O);
    }

    #[test]
    fn test_try_make_move() {
        let board = Board::new().make_move(4, Player::Human);

        let result = board.try_make_move(4, Player::Cpu);
        assert!(result.unwrap_err().to_string().contains("occupied"));

        let result = board.try_make_move(9, Player::Cpu);
        assert!(matches!(
            result,
            Err(crate::Error::InvalidPosition { position: 9 })
        ));

        let next = board.try_make_move(0, Player::Cpu).unwrap();
        assert_eq!(next.cells[0], Cell::O);
    }

    #[test]
    fn test_is_legal_out_of_range() {
        assert!(!Board::new().is_legal(9));
        assert!(!Board::new().is_legal(usize::MAX));
    }

    #[test]
    fn test_possible_moves_are_the_empty_cells() {
        let board = Board::from_string("XO.X.O...").unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let mut moves = board.possible_moves(&mut rng);
        moves.sort_unstable();
        assert_eq!(moves, vec![2, 4, 6, 7, 8]);
    }

    #[test]
    fn test_possible_moves_order_follows_seed() {
        let board = Board::new();
        let first = board.possible_moves(&mut StdRng::seed_from_u64(7));
        let second = board.possible_moves(&mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn test_check_winner_uses_caller_label() {
        // X wins the top row, but the label is whatever the caller passes
        let board = Board::from_string("XXXOO....").unwrap();
        assert_eq!(board.check_winner(Player::Human), Some(Player::Human));
        assert_eq!(board.check_winner(Player::Cpu), Some(Player::Cpu));
    }

    #[test]
    fn test_check_winner_none_without_line() {
        let board = Board::from_string("XOXOXO...").unwrap();
        assert_eq!(board.check_winner(Player::Human), None);
        assert_eq!(Board::new().check_winner(Player::Cpu), None);
    }

    #[test]
    fn test_draw_detection() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert!(board.is_full());
        assert!(board.is_draw());

        // Full board with a line is not a draw
        let won = Board::from_string("XXXOOXOXO").unwrap();
        assert!(won.is_full());
        assert!(!won.is_draw());

        assert!(!Board::from_string("XOXXOOOX.").unwrap().is_draw());
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XO. ... ..O").unwrap();
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[1], Cell::O);
        assert_eq!(board.cells[8], Cell::O);

        assert!(matches!(
            Board::from_string("XO"),
            Err(crate::Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            Board::from_string("XOZ......"),
            Err(crate::Error::InvalidCellCharacter { character: 'Z', .. })
        ));
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("X...O...X").unwrap();
        let display = format!("{board}");
        assert_eq!(
            display,
            "X | 2 | 3\n--+---+--\n4 | O | 6\n--+---+--\n7 | 8 | X"
        );
    }

    #[test]
    fn test_display_parses_back() {
        let board = Board::from_string("XO..X...O").unwrap();
        let reparsed = Board::from_string(&board.to_string()).unwrap();
        assert_eq!(reparsed, board);
    }

    #[test]
    fn test_encode() {
        let board = Board::new()
            .make_move(0, Player::Human)
            .make_move(4, Player::Cpu);
        assert_eq!(board.encode(), "X...O....");
    }

    #[test]
    fn test_player_marks() {
        assert_eq!(Player::Human.to_cell(), Cell::X);
        assert_eq!(Player::Cpu.to_cell(), Cell::O);
        assert_eq!(Cell::O.to_player(), Some(Player::Cpu));
        assert_eq!(Player::Human.opponent(), Player::Cpu);
        assert_eq!(Player::Cpu.to_string(), "CPU");
    }
}
