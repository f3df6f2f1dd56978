use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::game::piece::PieceColor;

/// Anything the game can paint cells onto.
pub trait Surface {
    fn clear(&mut self);

    /// Paints one grid cell. Coordinates may lie off the grid; surfaces drop those.
    fn draw_cell(&mut self, col: i32, row: i32, color: PieceColor);
}

/// In-memory surface the size of the board, handed to the terminal renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellFrame {
    cells: [[Option<PieceColor>; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Default for CellFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl CellFrame {
    pub fn new() -> Self {
        Self {
            cells: [[None; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    pub fn get(&self, col: usize, row: usize) -> Option<PieceColor> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<PieceColor>; BOARD_WIDTH]> {
        self.cells.iter()
    }
}

impl Surface for CellFrame {
    fn clear(&mut self) {
        self.cells = [[None; BOARD_WIDTH]; BOARD_HEIGHT];
    }

    fn draw_cell(&mut self, col: i32, row: i32, color: PieceColor) {
        if col < 0 || row < 0 {
            return;
        }
        if let Some(cell) = self
            .cells
            .get_mut(row as usize)
            .and_then(|r| r.get_mut(col as usize))
        {
            *cell = Some(color);
        }
    }
}
