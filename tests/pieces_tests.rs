//! Pieces tests - catalog, matrix rotation and the kick search

use tui_blocks::core::{
    collides, get_shape, rotate, rotate_with_kick, spawn_x, ActivePiece, Board, Shape, ShapeError,
};
use tui_blocks::types::{CellValue, PieceKind, RotationDirection};

fn rows(shape: &Shape) -> Vec<Vec<CellValue>> {
    shape.rows().map(|r| r.to_vec()).collect()
}

// ============== Catalog ==============

#[test]
fn test_catalog_grids() {
    assert_eq!(rows(&get_shape(PieceKind::T)), vec![vec![0, 1, 0], vec![1, 1, 1], vec![0, 0, 0]]);
    assert_eq!(rows(&get_shape(PieceKind::O)), vec![vec![2, 2], vec![2, 2]]);
    assert_eq!(rows(&get_shape(PieceKind::L)), vec![vec![0, 3, 0], vec![0, 3, 0], vec![0, 3, 3]]);
    assert_eq!(rows(&get_shape(PieceKind::J)), vec![vec![0, 4, 0], vec![0, 4, 0], vec![4, 4, 0]]);
    assert_eq!(
        rows(&get_shape(PieceKind::I)),
        vec![vec![0, 5, 0, 0], vec![0, 5, 0, 0], vec![0, 5, 0, 0], vec![0, 5, 0, 0]]
    );
    assert_eq!(rows(&get_shape(PieceKind::S)), vec![vec![0, 6, 6], vec![6, 6, 0], vec![0, 0, 0]]);
    assert_eq!(rows(&get_shape(PieceKind::Z)), vec![vec![7, 7, 0], vec![0, 7, 7], vec![0, 0, 0]]);
}

#[test]
fn test_shape_validation() {
    assert_eq!(
        Shape::from_rows(&[[1, 0], [0, 3]]).unwrap_err(),
        ShapeError::MixedIds { first: 1, second: 3 }
    );
    assert!(matches!(
        Shape::from_rows(&[vec![1, 1, 1], vec![1, 0, 0]]),
        Err(ShapeError::NotSquare { .. })
    ));
    let single = Shape::from_rows(&[[5]]).unwrap();
    assert_eq!(single.kind(), PieceKind::I);
}

#[test]
fn test_spawn_position() {
    for kind in PieceKind::ALL {
        let piece = ActivePiece::spawn(kind, 10);
        assert_eq!(piece.y, 0);
        assert_eq!(piece.x, spawn_x(10, &piece.shape));
        assert!(!collides(&Board::new(), &piece), "{:?}", kind);
    }
}

// ============== Rotation ==============

#[test]
fn test_four_rotations_restore_the_shape() {
    for direction in [RotationDirection::Clockwise, RotationDirection::CounterClockwise] {
        for kind in PieceKind::ALL {
            let original = get_shape(kind);
            let mut shape = original;
            for turn in 1..=4 {
                rotate(&mut shape, direction);
                if turn < 4 && kind != PieceKind::O {
                    assert_ne!(shape, original, "{:?} {:?} after {} turns", kind, direction, turn);
                }
            }
            assert_eq!(shape, original, "{:?} {:?}", kind, direction);
        }
    }
}

#[test]
fn test_clockwise_l() {
    let mut l = get_shape(PieceKind::L);
    rotate(&mut l, RotationDirection::Clockwise);
    assert_eq!(rows(&l), vec![vec![0, 0, 0], vec![3, 3, 3], vec![3, 0, 0]]);
}

#[test]
fn test_counter_clockwise_s() {
    let mut s = get_shape(PieceKind::S);
    rotate(&mut s, RotationDirection::CounterClockwise);
    assert_eq!(rows(&s), vec![vec![6, 0, 0], vec![6, 6, 0], vec![0, 6, 0]]);
}

// ============== Kicks ==============

#[test]
fn test_kick_visits_right_then_left() {
    // T pointing right against the left wall: its stem column is empty, so the
    // flat T needs one step right.
    let board = Board::new();
    let mut t = get_shape(PieceKind::T);
    rotate(&mut t, RotationDirection::Clockwise);
    let mut piece = ActivePiece::new(t, -1, 5);
    assert!(!collides(&board, &piece));

    assert!(rotate_with_kick(&mut piece, &board, RotationDirection::CounterClockwise));
    assert_eq!(piece.x, 0);
    assert_eq!(piece.shape, get_shape(PieceKind::T));
}

#[test]
fn test_kick_falls_back_to_the_left() {
    // T pointing left against the right wall. The flat T overhangs by one;
    // x+1 is worse, x-1 fits.
    let board = Board::new();
    let mut t = get_shape(PieceKind::T);
    rotate(&mut t, RotationDirection::CounterClockwise);
    let mut piece = ActivePiece::new(t, 8, 10);
    assert!(!collides(&board, &piece));

    assert!(rotate_with_kick(&mut piece, &board, RotationDirection::Clockwise));
    assert!(!collides(&board, &piece));
    assert_eq!(piece.x, 7);
    assert_eq!(piece.shape, get_shape(PieceKind::T));
}

#[test]
fn test_failed_kick_leaves_piece_untouched() {
    let mut board = Board::new();
    for y in 0..20 {
        for x in 0..10 {
            if x != 0 {
                board.set(x, y, 7);
            }
        }
    }
    let mut piece = ActivePiece::new(get_shape(PieceKind::I), -1, 8);
    assert!(!collides(&board, &piece));
    let before = piece;

    for direction in [RotationDirection::Clockwise, RotationDirection::CounterClockwise] {
        assert!(!rotate_with_kick(&mut piece, &board, direction));
        assert_eq!(piece, before);
    }
}
