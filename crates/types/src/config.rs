//! Session configuration.
//!
//! Defaults mirror the constants in the crate root. A config can be loaded from
//! JSON; missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    BOARD_HEIGHT, BOARD_WIDTH, DROP_INTERVAL_MS, DROP_REPEAT_MS, KEY_RELEASE_TIMEOUT_MS,
    MAX_BOARD_SIDE, MIN_BOARD_SIDE, MOVE_REPEAT_MS, TICK_MS,
};

/// Reasons a [`GameConfig`] is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board {width}x{height} is outside the supported range {min}..={max} per side")]
    BoardSize {
        width: u16,
        height: u16,
        min: u16,
        max: u16,
    },
    #[error("`{field}` must be greater than zero")]
    ZeroInterval { field: &'static str },
}

/// Tunables for one game session and its input/render collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_width: u16,
    pub board_height: u16,
    /// Gravity interval in milliseconds.
    pub drop_interval_ms: u32,
    /// Repeat interval while left/right is held.
    pub move_repeat_ms: u32,
    /// Repeat interval while down is held.
    pub drop_repeat_ms: u32,
    pub key_release_timeout_ms: u32,
    /// Frame interval of the driving loop.
    pub tick_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            drop_interval_ms: DROP_INTERVAL_MS,
            move_repeat_ms: MOVE_REPEAT_MS,
            drop_repeat_ms: DROP_REPEAT_MS,
            key_release_timeout_ms: KEY_RELEASE_TIMEOUT_MS,
            tick_ms: TICK_MS,
        }
    }
}

impl GameConfig {
    /// Check every field; the first violation wins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let side_ok = |v: u16| (MIN_BOARD_SIDE..=MAX_BOARD_SIDE).contains(&v);
        if !side_ok(self.board_width) || !side_ok(self.board_height) {
            return Err(ConfigError::BoardSize {
                width: self.board_width,
                height: self.board_height,
                min: MIN_BOARD_SIDE,
                max: MAX_BOARD_SIDE,
            });
        }

        let intervals = [
            ("drop_interval_ms", self.drop_interval_ms),
            ("move_repeat_ms", self.move_repeat_ms),
            ("drop_repeat_ms", self.drop_repeat_ms),
            ("tick_ms", self.tick_ms),
        ];
        for (field, value) in intervals {
            if value == 0 {
                return Err(ConfigError::ZeroInterval { field });
            }
        }

        Ok(())
    }
}
