use rand::Rng;

use crate::constants::BOARD_WIDTH;
use crate::game::piece::{Piece, PieceKind, Position};

/// Top row, horizontally centered on the unrotated width.
pub fn spawn_position(piece: &Piece) -> Position {
    Position::new((BOARD_WIDTH as i32 - piece.width() as i32).div_euclid(2), 0)
}

/// Picks one of the seven pieces uniformly and places it at its spawn position.
pub fn random_piece<R: Rng + ?Sized>(rng: &mut R) -> (Piece, Position) {
    let kind = PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())];
    let piece = Piece::new(kind);
    let position = spawn_position(&piece);
    (piece, position)
}
