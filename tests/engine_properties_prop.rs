//! Property tests for the placement rules.
//!
//! Generated boards, pieces and positions check the invariants that have to
//! hold everywhere, not just in the hand-picked scenarios.

use proptest::prelude::*;
use tui_blocks::core::{
    collides, get_shape, rotate, rotate_with_kick, ActivePiece, Board, GameState, SimpleRng,
};
use tui_blocks::types::{GameAction, GameConfig, PieceKind, RotationDirection, EMPTY};

fn any_kind() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

fn any_direction() -> impl Strategy<Value = RotationDirection> {
    prop_oneof![
        Just(RotationDirection::Clockwise),
        Just(RotationDirection::CounterClockwise)
    ]
}

/// A 10x20 board with roughly `density` percent of its cells filled.
fn any_board() -> impl Strategy<Value = Board> {
    (prop::collection::vec(0u8..100, 200), 0u8..60).prop_map(|(noise, density)| {
        let mut board = Board::new();
        for (i, n) in noise.into_iter().enumerate() {
            if n < density {
                board.set((i % 10) as i32, (i / 10) as i32, 1 + n % 7);
            }
        }
        board
    })
}

proptest! {
    #[test]
    fn outside_columns_always_collide(
        kind in any_kind(),
        turns in 0usize..4,
        y in -10i32..30,
        left in any::<bool>(),
    ) {
        let board = Board::new();
        let mut shape = get_shape(kind);
        for _ in 0..turns {
            rotate(&mut shape, RotationDirection::Clockwise);
        }
        // Push the piece until its occupied cells straddle the chosen wall.
        let (min_x, max_x) = shape
            .occupied()
            .fold((usize::MAX, 0), |(lo, hi), (x, _)| (lo.min(x), hi.max(x)));
        let x = if left { -(min_x as i32) - 1 } else { 10 - max_x as i32 };
        prop_assert!(collides(&board, &ActivePiece::new(shape, x, y)));
    }

    #[test]
    fn four_turns_are_identity(kind in any_kind(), direction in any_direction()) {
        let original = get_shape(kind);
        let mut shape = original;
        for _ in 0..4 {
            rotate(&mut shape, direction);
        }
        prop_assert_eq!(shape, original);
    }

    #[test]
    fn kick_never_leaves_a_collision(
        board in any_board(),
        kind in any_kind(),
        x in -2i32..10,
        y in 0i32..18,
        direction in any_direction(),
    ) {
        let mut piece = ActivePiece::new(get_shape(kind), x, y);
        prop_assume!(!collides(&board, &piece));
        let before = piece;

        let kept = rotate_with_kick(&mut piece, &board, direction);
        if kept {
            prop_assert!(!collides(&board, &piece));
            prop_assert_eq!(piece.y, before.y);
        } else {
            prop_assert_eq!(piece, before);
        }
    }

    #[test]
    fn random_play_keeps_the_board_well_formed(
        seed in any::<u32>(),
        actions in prop::collection::vec(0u8..6, 1..300),
    ) {
        let mut game = GameState::new(&GameConfig::default(), SimpleRng::new(seed)).unwrap();
        for a in actions {
            match a {
                0 => { game.apply_action(GameAction::MoveLeft); }
                1 => { game.apply_action(GameAction::MoveRight); }
                2 => { game.apply_action(GameAction::SoftDrop); }
                3 => { game.apply_action(GameAction::RotateCw); }
                4 => { game.apply_action(GameAction::RotateCcw); }
                _ => { game.tick(250); }
            }
            prop_assert!(game.board().cells().iter().all(|&c| c <= 7));
            // No full row survives a landing.
            for y in 0..game.board().height() {
                prop_assert!(!game.board().is_row_full(y));
            }
        }
        let snap = game.snapshot();
        prop_assert_eq!(snap.board.iter().filter(|&&c| c != EMPTY).count(),
            game.board().cells().iter().filter(|&&c| c != EMPTY).count());
    }
}
