use std::fmt;

use super::Player;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }
}

/// A gravity-filled grid stored row-major in a flat buffer.
///
/// Row 0 is the bottom of the board. Every column holds its pieces as a
/// contiguous run starting at row 0; [`Board::drop`] and [`Board::try_drop`]
/// are the only mutators, so that shape always holds.
///
/// Accessors taking `(row, col)` expect in-range coordinates and panic
/// otherwise, the same way slice indexing does.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board of the standard 6x7 size
    pub fn new() -> Self {
        Self::with_size(ROWS, COLS)
    }

    /// Create a new empty board with the given dimensions
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} board",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Get the cell at a specific position
    /// Row 0 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols || self.rows == 0 {
            return true;
        }
        self.get(self.rows - 1, col) != Cell::Empty
    }

    /// Row a piece dropped into `col` would land on
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Drop a piece into `col`, returning the row it landed on.
    ///
    /// Permissive: a full or out-of-range column leaves the board untouched
    /// and returns `None`. Callers that need to reject such moves use
    /// [`Board::try_drop`] instead.
    pub fn drop(&mut self, col: usize, player: Player) -> Option<usize> {
        let row = self.landing_row(col)?;
        let idx = self.index(row, col);
        self.cells[idx] = player.to_cell();
        Some(row)
    }

    /// Drop a piece into `col`, rejecting invalid and full columns
    pub fn try_drop(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn(col));
        }
        self.drop(col, player).ok_or(MoveError::ColumnFull(col))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Columns that can still take a piece, left to right
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.cols).filter(move |&col| !self.is_column_full(col))
    }

    /// Number of pieces on the board
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain-text rendering, top row first: a column header, a rule, one
/// `|O|X| |` line per row and a closing rule.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for col in 0..self.cols {
            write!(f, " {col}")?;
        }
        let rule = "-".repeat(2 * self.cols + 1);
        writeln!(f)?;
        writeln!(f, "{rule}")?;
        for row in (0..self.rows).rev() {
            for col in 0..self.cols {
                let symbol = self.get(row, col).owner().map_or(' ', Player::symbol);
                write!(f, "|{symbol}")?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{rule}")
    }
}
