//! Terminal front-end.
//!
//! A small, game-oriented rendering layer: [`GameView`] turns a
//! [`GameSnapshot`](crate::core::GameSnapshot) into a [`FrameBuffer`] without
//! any I/O, and [`TerminalRenderer`] flushes framebuffers to the real terminal
//! through crossterm, rewriting only cells that changed.
//!
//! Board cells are drawn two columns wide to compensate for the usual terminal
//! glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, Weight};
pub use game_view::{
    cell_color, AnchorY, GameView, HudState, Viewport, GAME_OVER_BANNER_MS, MAX_CELL_SIDE,
};
pub use renderer::{encode_frame_into, TerminalRenderer};
