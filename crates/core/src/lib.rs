//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule: the piece catalog, the board, collision
//! and placement, rotation with wall kicks, scoring and the session that ties
//! them together. It has no dependency on terminals, clocks or threads; time is
//! fed in as elapsed milliseconds and randomness through [`RandomSource`].
//!
//! # Module Structure
//!
//! - [`shape`]: square cell grids, validated on construction
//! - [`pieces`]: the seven catalog shapes and the spawn column
//! - [`board`]: the playfield, row clearing and sweeping
//! - [`piece`]: the active piece (shape plus position)
//! - [`collision`]: overlap test and merge
//! - [`rotation`]: matrix rotation and the zig-zag kick search
//! - [`scoring`]: per-pass doubling row points
//! - [`rng`]: injectable random sources
//! - [`game_state`]: the session (gravity, landing, reset, actions)
//! - [`snapshot`]: read-only frame data for renderers
//!
//! # Game Rules
//!
//! | Rule | Behaviour |
//! |------|-----------|
//! | Randomizer | Uniform draw from the seven kinds, one piece of lookahead |
//! | Rotation | Transpose + mirror; kicks try x+1, x-1, x+2, x-2, ... |
//! | Landing | Instant: merge, spawn the next piece, then sweep |
//! | Scoring | 10 for the first row of a sweep, doubling per extra row |
//! | Game over | Spawn collision clears the board and score, play continues |
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::GameState;
//! use tui_blocks_types::GameAction;
//!
//! let mut game = GameState::with_seed(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//!
//! // One second of gravity is not enough; the interval must be exceeded.
//! assert!(game.tick(1000).is_none());
//! assert!(game.tick(16).is_some());
//! assert_eq!(game.active().y, 1);
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use tui_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError, SweepResult};
pub use collision::{collides, merge};
pub use game_state::{DropOutcome, GameError, GameState, LockOutcome};
pub use piece::ActivePiece;
pub use pieces::{get_shape, spawn_x};
pub use rng::{random_kind, RandomSource, ScriptedSource, SimpleRng};
pub use rotation::{rotate, rotate_with_kick};
pub use scoring::{row_points, sweep_points};
pub use shape::{Shape, ShapeError};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
