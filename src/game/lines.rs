//! Enumeration of every run of [`WIN_LENGTH`] contiguous cells on a board,
//! and the four-in-a-row check built on it.

use std::ops::Range;

use super::{Board, Cell, Player};

/// Length of a winning line. A rule of the game, not a setting.
pub const WIN_LENGTH: usize = 4;

const REACH: usize = WIN_LENGTH - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row
    Horizontal,
    /// Bottom to top along a column
    Vertical,
    /// Bottom-left to top-right (/)
    DiagonalUp,
    /// Top-left to bottom-right (\)
    DiagonalDown,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
    ];

    fn start_rows(self, rows: usize) -> Range<usize> {
        match self {
            Direction::Horizontal => 0..rows,
            Direction::Vertical | Direction::DiagonalUp => 0..rows.saturating_sub(REACH),
            Direction::DiagonalDown => REACH..rows.max(REACH),
        }
    }

    fn start_cols(self, cols: usize) -> Range<usize> {
        match self {
            Direction::Vertical => 0..cols,
            _ => 0..cols.saturating_sub(REACH),
        }
    }

    /// Number of lines running in this direction on a `rows` x `cols` board
    pub fn line_count(self, rows: usize, cols: usize) -> usize {
        self.start_rows(rows).len() * self.start_cols(cols).len()
    }
}

/// One run of [`WIN_LENGTH`] cells, identified by its first cell and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    row: usize,
    col: usize,
    direction: Direction,
}

impl Line {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// `(row, col)` of each cell, in order along the line
    pub fn positions(&self) -> [(usize, usize); WIN_LENGTH] {
        let (row, col) = (self.row, self.col);
        std::array::from_fn(|i| match self.direction {
            Direction::Horizontal => (row, col + i),
            Direction::Vertical => (row + i, col),
            Direction::DiagonalUp => (row + i, col + i),
            Direction::DiagonalDown => (row - i, col + i),
        })
    }

    /// Current contents of the line's cells on `board`
    pub fn cells(&self, board: &Board) -> [Cell; WIN_LENGTH] {
        self.positions().map(|(row, col)| board.get(row, col))
    }
}

/// Every line on the board: horizontals, verticals, then both diagonals.
pub fn lines(board: &Board) -> impl Iterator<Item = Line> {
    let (rows, cols) = (board.rows(), board.cols());
    Direction::ALL.into_iter().flat_map(move |direction| {
        direction.start_rows(rows).flat_map(move |row| {
            direction
                .start_cols(cols)
                .map(move |col| Line { row, col, direction })
        })
    })
}

/// Whether `player` owns every cell of at least one line.
pub fn has_four_in_a_row(board: &Board, player: Player) -> bool {
    let piece = player.to_cell();
    lines(board).any(|line| line.cells(board).iter().all(|&cell| cell == piece))
}
