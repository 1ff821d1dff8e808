//! Depth-limited minimax with alpha-beta pruning.
//!
//! The search is rooted at a fixed maximizing player. Every leaf is scored
//! from that player's perspective, and the two sides alternate between
//! maximizing and minimizing that one score on the way back up.
//!
//! Columns are tried left to right and a child only replaces the current
//! best on a strict improvement, so among equally scored moves the leftmost
//! one wins. Each explored move works on its own copy of the board.

use super::heuristic::{Heuristic, LineHeuristic};
use crate::game::{has_four_in_a_row, Board, Player};

/// Depth used by the computer opponent unless configured otherwise.
pub const DEFAULT_DEPTH: usize = 7;

/// `(alpha, beta)` window for a root call: the widest symmetric range.
pub const FULL_WINDOW: (i32, i32) = (-i32::MAX, i32::MAX);

/// Score and column chosen at one node of the search tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub column: Option<usize>,
}

/// Work done by a single root search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, the root included
    pub nodes: u64,
}

pub struct Searcher<'h> {
    maximizer: Player,
    heuristic: &'h dyn Heuristic,
}

impl<'h> Searcher<'h> {
    pub fn new(maximizer: Player, heuristic: &'h dyn Heuristic) -> Self {
        Searcher {
            maximizer,
            heuristic,
        }
    }

    pub fn maximizer(&self) -> Player {
        self.maximizer
    }

    /// Search `depth` plies ahead with `side` to move.
    ///
    /// Returns the minimax score and the column achieving it. The column is
    /// `None` at depth 0, when `side`'s opponent has already connected four,
    /// or when no column is playable; the score is then the leaf evaluation
    /// or the extreme value for `side` (`i32::MIN` for the maximizer,
    /// `i32::MAX` for the minimizer).
    pub fn search(
        &self,
        board: &Board,
        depth: usize,
        alpha: i32,
        beta: i32,
        side: Player,
    ) -> SearchResult {
        self.search_with_stats(board, depth, alpha, beta, side).0
    }

    /// Like [`Searcher::search`], also reporting how many nodes were visited.
    pub fn search_with_stats(
        &self,
        board: &Board,
        depth: usize,
        alpha: i32,
        beta: i32,
        side: Player,
    ) -> (SearchResult, SearchStats) {
        let mut stats = SearchStats::default();
        let result = self.alpha_beta(board, depth, alpha, beta, side, &mut stats);
        (result, stats)
    }

    fn alpha_beta(
        &self,
        board: &Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        side: Player,
        stats: &mut SearchStats,
    ) -> SearchResult {
        stats.nodes += 1;

        if depth == 0 {
            return SearchResult {
                score: self.heuristic.evaluate(board, self.maximizer),
                column: None,
            };
        }

        let maximizing = side == self.maximizer;
        let mut best = SearchResult {
            score: if maximizing { i32::MIN } else { i32::MAX },
            column: None,
        };

        // Already lost: nothing to choose.
        if has_four_in_a_row(board, side.other()) {
            return best;
        }

        for col in 0..board.cols() {
            if board.is_column_full(col) {
                continue;
            }

            let mut child = board.clone();
            child.drop(col, side);
            let score = self
                .alpha_beta(&child, depth - 1, alpha, beta, side.other(), stats)
                .score;

            // The first playable column is always recorded so that a node
            // where every move loses still names one.
            let improves = if maximizing {
                score > best.score
            } else {
                score < best.score
            };
            if improves || best.column.is_none() {
                best = SearchResult {
                    score,
                    column: Some(col),
                };
            }

            if maximizing {
                alpha = alpha.max(best.score);
            } else {
                beta = beta.min(best.score);
            }
            if alpha >= beta {
                break;
            }
        }

        best
    }
}

/// Pick a column for `side` by searching `depth` plies with the line
/// heuristic, `side` maximizing over the full window.
///
/// Returns `None` if no column is playable, `depth` is 0, or the opponent
/// has already connected four.
pub fn choose_column(board: &Board, side: Player, depth: usize) -> Option<usize> {
    let heuristic = LineHeuristic;
    let (alpha, beta) = FULL_WINDOW;
    Searcher::new(side, &heuristic)
        .search(board, depth, alpha, beta, side)
        .column
}
