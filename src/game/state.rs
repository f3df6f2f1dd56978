use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

use crate::game::board::Board;
use crate::game::catalog::random_piece;
use crate::game::collision::{blocked, EdgePolicy};
use crate::game::piece::{Piece, Position};
use crate::game::rotation::rotate;
use crate::input::Intent;
use crate::ui::Surface;

/// What a gravity tick or an input did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The piece moved or turned.
    Moved,
    /// The move was blocked and nothing changed.
    Rejected,
    /// Downward movement was blocked; the piece was merged and a new one spawned.
    Locked,
}

/// Board, falling piece and its position. Every change is validated against
/// the board before it is committed, so a blocked move leaves the state as it was.
pub struct Game<R = StdRng> {
    board: Board,
    piece: Piece,
    position: Position,
    edges: EdgePolicy,
    rng: R,
}

impl Game<StdRng> {
    pub fn with_seed(seed: u64, edges: EdgePolicy) -> Self {
        Self::new(StdRng::seed_from_u64(seed), edges)
    }

    pub fn from_entropy(edges: EdgePolicy) -> Self {
        Self::new(StdRng::from_entropy(), edges)
    }
}

impl<R: Rng> Game<R> {
    pub fn new(mut rng: R, edges: EdgePolicy) -> Self {
        let (piece, position) = random_piece(&mut rng);
        debug!(kind = ?piece.kind, x = position.x, y = position.y, "spawned first piece");
        Self {
            board: Board::new(),
            piece,
            position,
            edges,
            rng,
        }
    }

    pub fn from_parts(board: Board, piece: Piece, position: Position, rng: R, edges: EdgePolicy) -> Self {
        Self {
            board,
            piece,
            position,
            edges,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Gravity tick: one row down, or lock and spawn if that row is blocked.
    pub fn update(&mut self) -> Step {
        self.descend()
    }

    pub fn apply(&mut self, intent: Intent) -> Step {
        let step = match intent {
            Intent::MoveLeft => self.shift(-1),
            Intent::MoveRight => self.shift(1),
            Intent::SoftDrop => self.descend(),
            Intent::Rotate => self.rotate_piece(),
        };
        if step == Step::Rejected {
            trace!(?intent, x = self.position.x, y = self.position.y, "move rejected");
        }
        step
    }

    fn fits(&self, piece: &Piece, position: Position) -> bool {
        !blocked(&self.board, piece, position, self.edges)
    }

    fn shift(&mut self, dx: i32) -> Step {
        let target = self.position.offset(dx, 0);
        if !self.fits(&self.piece, target) {
            return Step::Rejected;
        }
        self.position = target;
        Step::Moved
    }

    fn descend(&mut self) -> Step {
        let target = self.position.offset(0, 1);
        if self.fits(&self.piece, target) {
            self.position = target;
            return Step::Moved;
        }
        self.lock();
        Step::Locked
    }

    fn rotate_piece(&mut self) -> Step {
        let rotated = rotate(&self.piece);
        if !self.fits(&rotated, self.position) {
            return Step::Rejected;
        }
        self.piece = rotated;
        Step::Moved
    }

    fn lock(&mut self) {
        match self.board.merge(&self.piece, self.position) {
            Ok(()) => debug!(
                kind = ?self.piece.kind,
                x = self.position.x,
                y = self.position.y,
                "piece locked"
            ),
            Err(err) => {
                let skipped = self.board.merge_clipped(&self.piece, self.position);
                warn!(kind = ?self.piece.kind, %err, skipped, "piece locked partly off the board");
            }
        }
        self.spawn();
    }

    fn spawn(&mut self) {
        let (piece, position) = random_piece(&mut self.rng);
        debug!(kind = ?piece.kind, x = position.x, y = position.y, "spawned piece");
        self.piece = piece;
        self.position = position;
    }

    /// Clears `surface`, then paints the locked cells and the falling piece on top.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        for (row, col, color) in self.board.occupied_cells() {
            surface.draw_cell(col, row, color);
        }
        for (row, col) in self.piece.cells_at(self.position) {
            surface.draw_cell(col, row, self.piece.color);
        }
    }
}
