//! Shared helpers for the integration tests.
#![allow(dead_code)]

use tictactoe_minimax::{Board, Cell};

/// Every assignment of `Empty`/`X`/`O` to the nine cells, 3^9 boards in total.
///
/// Most of them are unreachable in a real game; the board primitives don't
/// care about that.
pub fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(9)).map(|mut code| {
        let mut cells = [Cell::Empty; 9];
        for cell in cells.iter_mut() {
            *cell = match code % 3 {
                0 => Cell::Empty,
                1 => Cell::X,
                _ => Cell::O,
            };
            code /= 3;
        }
        Board::from_cells(cells)
    })
}

/// Three identical marks in a row, column or diagonal, checked cell by cell.
pub fn has_three_in_a_row(board: &Board) -> bool {
    let c = &board.cells;
    let same = |a: usize, b: usize, d: usize| c[a] != Cell::Empty && c[a] == c[b] && c[b] == c[d];

    (0..3).any(|row| same(row * 3, row * 3 + 1, row * 3 + 2))
        || (0..3).any(|col| same(col, col + 3, col + 6))
        || same(0, 4, 8)
        || same(2, 4, 6)
}
