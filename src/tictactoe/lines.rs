//! Winning line analysis for Tic-Tac-Toe

use super::Cell;

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Find the first line holding three identical marks.
    ///
    /// Empty cells never form a line, so an empty board has none.
    pub fn completed_line(cells: &[Cell; 9]) -> Option<[usize; 3]> {
        WINNING_LINES.iter().copied().find(|&[a, b, c]| {
            cells[a] != Cell::Empty && cells[a] == cells[b] && cells[b] == cells[c]
        })
    }

    /// Check if any line holds three identical marks
    pub fn has_line(cells: &[Cell; 9]) -> bool {
        Self::completed_line(cells).is_some()
    }
}
