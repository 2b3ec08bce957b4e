//! Falling-block puzzle game (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_blocks::{core,engine,input,term,types}` and ships
//! the terminal binary.

pub use tui_blocks_core as core;
pub use tui_blocks_engine as engine;
pub use tui_blocks_input as input;
pub use tui_blocks_term as term;
pub use tui_blocks_types as types;
