//! Depth-bounded minimax with alpha-beta pruning
//!
//! Scores are seen from the CPU's side: `+1` CPU win, `-1` human win, `0`
//! for a draw or for any position where the depth ran out first. There is no
//! heuristic evaluation, so play is only as strong as the depth lets the search
//! reach real terminal states. A 3x3 board never needs more than 9 plies.

use rand::Rng;
use tracing::{debug, instrument};

use crate::{
    Result,
    error::Error,
    tictactoe::{Board, Player},
};

/// Initial alpha and the score a maximizing node starts from
pub const SCORE_MIN: i32 = i32::MIN;
/// Initial beta and the score a minimizing node starts from
pub const SCORE_MAX: i32 = i32::MAX;

/// Counters collected over one search
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, leaves included
    pub nodes: u64,
    /// Move loops cut short by `beta <= alpha`
    pub cutoffs: u64,
}

/// Score a position from the CPU's side.
///
/// Only reached from the base case of [`Searcher::minimax`], so a `0` can mean
/// either a true draw or a cutoff.
pub fn evaluate(board: &Board, player: Player) -> i32 {
    match board.check_winner(player) {
        Some(Player::Cpu) => 1,
        Some(Player::Human) => -1,
        None => 0,
    }
}

/// A single search over one random source.
///
/// The RNG only decides the order moves are tried in, which in turn decides
/// which of several equally scored moves is picked.
pub struct Searcher<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
    stats: SearchStats,
}

impl<'a, R: Rng + ?Sized> Searcher<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self {
            rng,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Score `board` after `player` has just moved.
    ///
    /// `maximizing` is true when the CPU is the next to move. Recursion stops at
    /// depth 0, on a completed line, or on a full board.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        player: Player,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 || board.check_winner(player).is_some() || board.is_full() {
            return evaluate(board, player);
        }

        if maximizing {
            let mut max_score = SCORE_MIN;
            for mv in board.possible_moves(&mut *self.rng) {
                let next = board.make_move(mv, Player::Cpu);
                let score = self.minimax(&next, depth - 1, alpha, beta, false, Player::Cpu);
                max_score = max_score.max(score);

                alpha = alpha.max(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            max_score
        } else {
            let mut min_score = SCORE_MAX;
            for mv in board.possible_moves(&mut *self.rng) {
                let next = board.make_move(mv, Player::Human);
                let score = self.minimax(&next, depth - 1, alpha, beta, true, Player::Human);
                min_score = min_score.min(score);

                beta = beta.min(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            min_score
        }
    }

    /// Score every CPU move on `board`, in the order they were enumerated.
    ///
    /// Each root move gets its own full `(SCORE_MIN, SCORE_MAX)` window, so the
    /// scores are exact for the given depth.
    pub fn score_moves(&mut self, board: &Board, depth: u32) -> Vec<(usize, i32)> {
        board
            .possible_moves(&mut *self.rng)
            .into_iter()
            .map(|mv| {
                let next = board.make_move(mv, Player::Cpu);
                let score = self.minimax(
                    &next,
                    depth.saturating_sub(1),
                    SCORE_MIN,
                    SCORE_MAX,
                    false,
                    Player::Cpu,
                );
                (mv, score)
            })
            .collect()
    }

    /// Pick the CPU move with the best score.
    ///
    /// Ties go to the move enumerated first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMove`] when the board has no empty cell.
    pub fn find_best_move(&mut self, board: &Board, depth: u32) -> Result<usize> {
        let mut best: Option<(usize, i32)> = None;
        for (mv, score) in self.score_moves(board, depth) {
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        best.map(|(mv, _)| mv).ok_or(Error::NoLegalMove)
    }
}

/// Run [`Searcher::minimax`] with a throwaway searcher
pub fn minimax<R: Rng + ?Sized>(
    board: &Board,
    depth: u32,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    player: Player,
    rng: &mut R,
) -> i32 {
    Searcher::new(rng).minimax(board, depth, alpha, beta, maximizing, player)
}

/// Find the best CPU move on `board`, searching `depth` plies.
///
/// # Errors
///
/// Returns [`Error::NoLegalMove`] when the board is full.
#[instrument(level = "debug", skip_all, fields(board = %board.encode(), depth = depth))]
pub fn find_best_move<R: Rng + ?Sized>(board: &Board, depth: u32, rng: &mut R) -> Result<usize> {
    let mut searcher = Searcher::new(rng);
    let best = searcher.find_best_move(board, depth)?;
    let stats = searcher.stats();
    debug!(
        best,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "search finished"
    );
    Ok(best)
}
