use thiserror::Error;

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::game::piece::{Piece, PieceColor, Position};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(PieceColor),
}

impl Cell {
    pub fn is_filled(self) -> bool {
        matches!(self, Cell::Filled(_))
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell at row {row}, column {col} is outside the board")]
    OutOfRange { row: i32, col: i32 },
}

/// Locked cells. Row 0 is the top of the well, column 0 the left wall.
///
/// The grid is only ever written by [`Board::merge`] and [`Board::merge_clipped`]; its dimensions are fixed
/// at `BOARD_HEIGHT x BOARD_WIDTH`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    fn index(row: i32, col: i32) -> Option<(usize, usize)> {
        if row < 0 || col < 0 || row >= BOARD_HEIGHT as i32 || col >= BOARD_WIDTH as i32 {
            return None;
        }
        Some((row as usize, col as usize))
    }

    /// Raw lookup. `None` for anything outside the grid.
    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        Self::index(row, col).map(|(r, c)| self.cells[r][c])
    }

    pub fn is_occupied(&self, row: i32, col: i32) -> Result<bool, BoardError> {
        self.cell(row, col)
            .map(Cell::is_filled)
            .ok_or(BoardError::OutOfRange { row, col })
    }

    /// Writes the piece's color into every cell its geometry covers at `position`.
    ///
    /// All target cells are checked before anything is written, so a placement
    /// that leaves the grid is reported and the board stays untouched.
    /// Occupied cells are overwritten.
    pub fn merge(&mut self, piece: &Piece, position: Position) -> Result<(), BoardError> {
        let mut targets = Vec::with_capacity(4);
        for (row, col) in piece.cells_at(position) {
            let idx = Self::index(row, col).ok_or(BoardError::OutOfRange { row, col })?;
            targets.push(idx);
        }

        for (r, c) in targets {
            self.cells[r][c] = Cell::Filled(piece.color);
        }
        Ok(())
    }

    /// Like [`Board::merge`], but writes the cells that land on the grid and
    /// skips the rest. Returns how many cells were skipped.
    pub fn merge_clipped(&mut self, piece: &Piece, position: Position) -> usize {
        let mut skipped = 0;
        for (row, col) in piece.cells_at(position) {
            match Self::index(row, col) {
                Some((r, c)) => self.cells[r][c] = Cell::Filled(piece.color),
                None => skipped += 1,
            }
        }
        skipped
    }

    /// Every locked cell as `(row, col, color)`, top row first.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32, PieceColor)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().filter_map(move |(c, cell)| match cell {
                Cell::Filled(color) => Some((r as i32, c as i32, *color)),
                Cell::Empty => None,
            })
        })
    }
}
