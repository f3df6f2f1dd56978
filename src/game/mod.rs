pub mod board;
pub mod catalog;
pub mod collision;
pub mod piece;
pub mod rotation;
pub mod state;

pub use board::{Board, BoardError, Cell};
pub use collision::EdgePolicy;
pub use piece::{Piece, PieceColor, PieceKind, Position};
pub use state::{Game, Step};
