//! Terminal input module (engine-facing).
//!
//! Two halves: [`map`] turns `crossterm` key events into logical
//! [`InputKey`](crate::types::InputKey)s, and [`handler`] decides which
//! [`GameAction`](crate::types::GameAction)s those keys produce over time,
//! including repeats while a movement key is held. The handler never reads a
//! clock; callers feed it elapsed milliseconds.

pub mod handler;
pub mod map;

pub use tui_blocks_types as types;

pub use handler::InputHandler;
pub use map::{map_key, should_quit};
