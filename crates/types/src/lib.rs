//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data, usable from the engine, the input layer and
//! the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions (a session may pick others via [`GameConfig`]):
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the terminal loop (~60 FPS) |
//! | `DROP_INTERVAL_MS` | 1000 | Gravity: one row per second |
//! | `MOVE_REPEAT_MS` | 100 | Repeat rate while left/right is held |
//! | `DROP_REPEAT_MS` | 50 | Repeat rate while down is held |
//! | `KEY_RELEASE_TIMEOUT_MS` | 150 | Auto-release for terminals without release events |
//!
//! # Cell Values
//!
//! A board cell is a small integer: `0` is empty, `1..=7` names the piece that
//! filled it. The value only selects a colour; gameplay treats all non-zero
//! cells alike.
//!
//! | Piece | Value |
//! |-------|-------|
//! | T | 1 |
//! | O | 2 |
//! | L | 3 |
//! | J | 4 |
//! | I | 5 |
//! | S | 6 |
//! | Z | 7 |
//!
//! # Examples
//!
//! ```
//! use tui_blocks_types::{PieceKind, GameAction, RotationDirection, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! // Parse from string (case-insensitive)
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//! assert_eq!(parsed.cell_value(), 1);
//!
//! // Rotation directions carry a sign: +1 clockwise, -1 counter-clockwise
//! assert_eq!(RotationDirection::Clockwise.sign(), 1);
//! assert_eq!(RotationDirection::Clockwise.reverse(), RotationDirection::CounterClockwise);
//!
//! // Parse game action
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! // Board dimensions
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

pub mod config;

pub use config::{ConfigError, GameConfig};

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: u16 = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: u16 = 20;

/// Smallest accepted board side; every catalog shape must fit at spawn.
pub const MIN_BOARD_SIDE: u16 = 4;

/// Largest accepted board side.
pub const MAX_BOARD_SIDE: u16 = 64;

/// Frame interval of the terminal loop in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval (1000ms = 1 row per second)
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Horizontal repeat interval while a left/right key is held.
pub const MOVE_REPEAT_MS: u32 = 100;

/// Downward repeat interval while the down key is held.
pub const DROP_REPEAT_MS: u32 = 50;

/// Held keys auto-release after this long without a press event.
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Points for the first row cleared in a sweep pass; each further row doubles.
pub const ROW_CLEAR_POINTS: u32 = 10;

/// Side length of the largest catalog shape (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// A cell on the board or inside a shape.
///
/// `0` is empty; `1..=7` identifies the piece kind (see [`PieceKind::cell_value`]).
pub type CellValue = u8;

/// The empty cell value.
pub const EMPTY: CellValue = 0;


/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and a colour id:
/// - **T**: T-shaped, value 1
/// - **O**: 2x2 square, value 2
/// - **L**: L-shaped, value 3
/// - **J**: J-shaped (mirror of L), value 4
/// - **I**: straight bar, value 5
/// - **S**: S-shaped, value 6
/// - **Z**: Z-shaped (mirror of S), value 7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    O,
    L,
    J,
    I,
    S,
    Z,
}

impl PieceKind {
    /// Every kind, in the catalog's sampling order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::I,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "t" => Some(PieceKind::T),
            "o" => Some(PieceKind::O),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "i" => Some(PieceKind::I),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "t",
            PieceKind::O => "o",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::I => "i",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }

    /// The cell value this piece writes into the board.
    pub fn cell_value(&self) -> CellValue {
        match self {
            PieceKind::T => 1,
            PieceKind::O => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::I => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
        }
    }

    /// Reverse of [`PieceKind::cell_value`]. `None` for empty or unknown values.
    pub fn from_cell_value(value: CellValue) -> Option<Self> {
        match value {
            1 => Some(PieceKind::T),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::J),
            5 => Some(PieceKind::I),
            6 => Some(PieceKind::S),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }
}

/// Horizontal movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column offset of one step in this direction.
    pub fn dx(&self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Rotation direction.
///
/// Clockwise transposes then mirrors each row; counter-clockwise transposes
/// then flips the row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    /// `1` for clockwise, `-1` for counter-clockwise.
    pub fn sign(&self) -> i32 {
        match self {
            RotationDirection::Clockwise => 1,
            RotationDirection::CounterClockwise => -1,
        }
    }

    /// The direction that undoes this one.
    pub fn reverse(&self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// These come from the input collaborator, either directly on a key press or
/// from its repeat policy while a key is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down (locks it if it cannot fall)
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotateCw"), Some(GameAction::RotateCw));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
        }
    }
}

/// Logical keys the input collaborator understands.
///
/// Physical key bindings live in the input crate; the repeat policy only sees these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    Left,
    Right,
    Down,
    RotateCw,
    RotateCcw,
}

/// Core-side events emitted by the game session.
///
/// The session queues these as it changes state; the game loop drains them and
/// forwards them to collaborators (score display, preview, game-over banner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The active piece was merged into the board.
    PieceLocked { kind: PieceKind },
    /// A sweep pass removed `rows` rows and awarded `points`.
    RowsCleared { rows: u32, points: u32 },
    /// The score changed to this value.
    ScoreChanged(u32),
    /// A new piece was sampled into the next-piece buffer.
    NextPiece(PieceKind),
    /// A freshly spawned piece collided: the board and score were reset.
    GameOver { final_score: u32 },
}
