//! Gravity, input and locking behavior of the game controller.

use blockfall::game::collision::collides;
use blockfall::game::{Board, EdgePolicy, Game, Piece, PieceKind, Position, Step};
use blockfall::input::Intent;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn game(board: Board, kind: PieceKind, position: Position, edges: EdgePolicy) -> Game {
    Game::from_parts(board, Piece::new(kind), position, StdRng::seed_from_u64(2026), edges)
}

mod walled {
    use super::*;

    #[test]
    fn o_piece_lands_on_the_floor() {
        let mut g = game(Board::new(), PieceKind::O, Position::new(4, 0), EdgePolicy::Walled);
        assert!(!collides(g.board(), g.piece(), g.position()));

        for y in 1..=18 {
            assert_eq!(g.apply(Intent::SoftDrop), Step::Moved);
            assert_eq!(g.position(), Position::new(4, y));
        }

        assert_eq!(g.apply(Intent::SoftDrop), Step::Locked);
        for (row, col) in [(18, 4), (18, 5), (19, 4), (19, 5)] {
            assert_eq!(g.board().is_occupied(row, col), Ok(true));
        }
        assert_eq!(g.board().occupied_cells().count(), 4);
        assert_eq!(g.position().y, 0);
    }

    #[test]
    fn left_wall_rejects_move() {
        let mut g = game(Board::new(), PieceKind::T, Position::new(0, 5), EdgePolicy::Walled);
        assert_eq!(g.apply(Intent::MoveLeft), Step::Rejected);
        assert_eq!(g.position(), Position::new(0, 5));
    }

    #[test]
    fn right_wall_rejects_move() {
        let mut g = game(Board::new(), PieceKind::I, Position::new(6, 5), EdgePolicy::Walled);
        assert_eq!(g.apply(Intent::MoveRight), Step::Rejected);
        assert_eq!(g.position(), Position::new(6, 5));
    }

    #[test]
    fn locked_cells_block_sideways_moves() {
        let mut board = Board::new();
        board.merge(&Piece::new(PieceKind::O), Position::new(6, 5)).unwrap();
        let mut g = game(board, PieceKind::O, Position::new(4, 5), EdgePolicy::Walled);

        assert_eq!(g.apply(Intent::MoveRight), Step::Rejected);
        assert_eq!(g.apply(Intent::MoveLeft), Step::Moved);
        assert_eq!(g.position(), Position::new(3, 5));
    }

    #[test]
    fn rotation_into_wall_is_discarded() {
        // Vertical I against the right wall; turning it flat would stick out.
        let mut g = game(Board::new(), PieceKind::I, Position::new(6, 3), EdgePolicy::Walled);
        assert_eq!(g.apply(Intent::Rotate), Step::Moved);
        assert_eq!(g.apply(Intent::MoveRight), Step::Moved);
        assert_eq!(g.apply(Intent::MoveRight), Step::Moved);
        assert_eq!(g.apply(Intent::MoveRight), Step::Moved);
        assert_eq!(g.position(), Position::new(9, 3));
        assert_eq!(g.apply(Intent::Rotate), Step::Rejected);
        assert_eq!(g.piece().width(), 1);
    }
}

mod open {
    use super::*;

    #[test]
    fn o_piece_falls_through_an_empty_floor() {
        let mut g = game(Board::new(), PieceKind::O, Position::new(4, 0), EdgePolicy::Open);
        for _ in 0..25 {
            assert_eq!(g.update(), Step::Moved);
        }
        assert_eq!(g.position(), Position::new(4, 25));
        assert_eq!(g.board(), &Board::new());
    }

    #[test]
    fn left_move_past_wall_is_accepted() {
        let mut g = game(Board::new(), PieceKind::T, Position::new(0, 5), EdgePolicy::Open);
        assert_eq!(g.apply(Intent::MoveLeft), Step::Moved);
        assert_eq!(g.position(), Position::new(-1, 5));
    }

    #[test]
    fn stack_still_stops_the_piece() {
        let mut board = Board::new();
        board.merge(&Piece::new(PieceKind::I), Position::new(3, 19)).unwrap();
        let mut g = game(board, PieceKind::O, Position::new(4, 16), EdgePolicy::Open);

        assert_eq!(g.update(), Step::Moved);
        assert_eq!(g.update(), Step::Locked);
        assert_eq!(g.board().is_occupied(17, 4), Ok(true));
        assert_eq!(g.board().is_occupied(18, 5), Ok(true));
    }

    #[test]
    fn piece_hanging_off_the_side_locks_its_on_grid_cells() {
        let mut board = Board::new();
        board.merge(&Piece::new(PieceKind::O), Position::new(0, 9)).unwrap();
        let mut g = game(board, PieceKind::I, Position::new(-1, 8), EdgePolicy::Open);

        assert_eq!(g.update(), Step::Locked);
        for col in 0..3 {
            assert_eq!(g.board().is_occupied(8, col), Ok(true), "col {col}");
        }
        assert_eq!(g.board().occupied_cells().count(), 4 + 3);
        assert_eq!(g.position().y, 0);
    }
}

#[test]
fn soft_drop_locks_exactly_like_gravity() {
    let mut board = Board::new();
    board.merge(&Piece::new(PieceKind::I), Position::new(0, 12)).unwrap();

    let mut by_gravity = game(board.clone(), PieceKind::T, Position::new(1, 9), EdgePolicy::Walled);
    let mut by_input = game(board, PieceKind::T, Position::new(1, 9), EdgePolicy::Walled);

    assert_eq!(by_gravity.update(), Step::Moved);
    assert_eq!(by_gravity.update(), Step::Locked);
    assert_eq!(by_input.apply(Intent::SoftDrop), Step::Moved);
    assert_eq!(by_input.apply(Intent::SoftDrop), Step::Locked);

    assert_eq!(by_gravity.board(), by_input.board());
    assert_eq!(by_gravity.piece(), by_input.piece());
    assert_eq!(by_gravity.position(), by_input.position());
}

#[test]
fn full_top_keeps_locking_without_game_over() {
    let mut g = Game::with_seed(11, EdgePolicy::Walled);
    for _ in 0..2000 {
        g.update();
    }
    // Pieces keep spawning and locking at the top of a full column.
    assert!(g.board().occupied_cells().any(|(row, _, _)| row == 0));
    assert!((0..21).any(|_| g.update() == Step::Locked));
}

#[test]
fn seeded_games_are_reproducible() {
    let mut a = Game::with_seed(99, EdgePolicy::Walled);
    let mut b = Game::with_seed(99, EdgePolicy::Walled);
    let script = [Intent::MoveLeft, Intent::Rotate, Intent::SoftDrop, Intent::MoveRight];

    for i in 0..400 {
        let intent = script[i % script.len()];
        assert_eq!(a.apply(intent), b.apply(intent));
        assert_eq!(a.update(), b.update());
    }
    assert_eq!(a.board(), b.board());
    assert_eq!(a.piece(), b.piece());
}
