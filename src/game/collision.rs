use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::game::board::Board;
use crate::game::piece::{Piece, Position};

/// How the board edges take part in move validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Left wall, right wall and floor reject a move like a locked cell would.
    #[default]
    Walled,
    /// Only locked cells block. Pieces can slide off the sides and fall
    /// through the floor of an empty column.
    Open,
}

/// True if any filled cell of `piece` at `position` lands on a locked cell.
///
/// Cells outside the grid read as empty, so this never reports a wall or the
/// floor. Use [`blocked`] to include them.
pub fn collides(board: &Board, piece: &Piece, position: Position) -> bool {
    piece
        .cells_at(position)
        .any(|(row, col)| board.is_occupied(row, col).unwrap_or(false))
}

/// True if any filled cell sits left of column 0, right of the last column or
/// below the last row. Rows above the top are allowed.
pub fn out_of_bounds(piece: &Piece, position: Position) -> bool {
    piece.cells_at(position).any(|(row, col)| {
        col < 0 || col >= BOARD_WIDTH as i32 || row >= BOARD_HEIGHT as i32
    })
}

pub fn blocked(board: &Board, piece: &Piece, position: Position, edges: EdgePolicy) -> bool {
    collides(board, piece, position)
        || (edges == EdgePolicy::Walled && out_of_bounds(piece, position))
}
