use crate::game::{lines, Board, Cell, Player, WIN_LENGTH};

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Piece counts of one line, relative to a perspective player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineTally {
    pub good: usize,
    pub bad: usize,
    pub empty: usize,
}

impl LineTally {
    pub fn of(cells: &[Cell; WIN_LENGTH], perspective: Player) -> Self {
        let mut tally = LineTally::default();
        for &cell in cells {
            match cell.owner() {
                None => tally.empty += 1,
                Some(owner) if owner == perspective => tally.good += 1,
                Some(_) => tally.bad += 1,
            }
        }
        tally
    }

    /// Score of a line with these counts. A line holding pieces of both
    /// players can never be completed and falls through to 0.
    pub fn score(self) -> i32 {
        match (self.good, self.bad, self.empty) {
            (4, _, _) => 500_001,
            (3, _, 1) => 5_000,
            (2, _, 2) => 500,
            (_, 2, 2) => -501,
            (_, 3, 1) => -5_001,
            (_, 4, _) => -500_000,
            _ => 0,
        }
    }
}

pub fn score_line(cells: &[Cell; WIN_LENGTH], perspective: Player) -> i32 {
    LineTally::of(cells, perspective).score()
}

/// Sum of [`score_line`] over every line on the board.
pub fn score_board(board: &Board, perspective: Player) -> i32 {
    lines(board)
        .map(|line| score_line(&line.cells(board), perspective))
        .sum()
}

/// The fixed line-of-four evaluation used by the minimax search.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineHeuristic;

impl Heuristic for LineHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        score_board(board, player)
    }
}
