use crate::game::piece::Piece;

/// Clockwise quarter turn. Column `c` of the input, read bottom to top, becomes
/// row `c` of the output, so a `rows x cols` geometry comes back `cols x rows`.
pub fn rotate(piece: &Piece) -> Piece {
    let width = piece.width();
    let shape = (0..width)
        .map(|col| piece.shape.iter().rev().map(|row| row[col]).collect())
        .collect();

    Piece {
        shape,
        ..piece.clone()
    }
}
