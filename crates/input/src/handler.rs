//! Key-repeat policy for held movement keys.
//!
//! A movement key acts once on press and then repeats at a fixed rate while it
//! is held: left/right every `move_repeat_ms`, down every `drop_repeat_ms`.
//! Only one key repeats at a time; pressing another movement key takes over.
//!
//! Many terminals never send key-release events. A held key is therefore
//! dropped after `key_release_timeout_ms` without a fresh press of that key
//! (the OS auto-repeat keeps refreshing it while the key is really down).

use arrayvec::ArrayVec;
use log::trace;

use crate::types::{
    GameAction, GameConfig, InputKey, DROP_REPEAT_MS, KEY_RELEASE_TIMEOUT_MS, MOVE_REPEAT_MS,
};

/// Tracks the held movement key and its repeat timer.
#[derive(Debug, Clone)]
pub struct InputHandler {
    held: Option<InputKey>,
    repeat_accumulator_ms: u32,
    since_press_ms: u32,
    move_repeat_ms: u32,
    drop_repeat_ms: u32,
    /// `0` disables auto-release (terminals that report key releases).
    key_release_timeout_ms: u32,
}

fn action_for(key: InputKey) -> GameAction {
    match key {
        InputKey::Left => GameAction::MoveLeft,
        InputKey::Right => GameAction::MoveRight,
        InputKey::Down => GameAction::SoftDrop,
        InputKey::RotateCw => GameAction::RotateCw,
        InputKey::RotateCcw => GameAction::RotateCcw,
    }
}

fn repeats(key: InputKey) -> bool {
    matches!(key, InputKey::Left | InputKey::Right | InputKey::Down)
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(MOVE_REPEAT_MS, DROP_REPEAT_MS)
    }

    pub fn with_config(move_repeat_ms: u32, drop_repeat_ms: u32) -> Self {
        Self {
            held: None,
            repeat_accumulator_ms: 0,
            since_press_ms: 0,
            move_repeat_ms: move_repeat_ms.max(1),
            drop_repeat_ms: drop_repeat_ms.max(1),
            key_release_timeout_ms: KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::with_config(config.move_repeat_ms, config.drop_repeat_ms)
            .with_key_release_timeout_ms(config.key_release_timeout_ms)
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// The movement key currently repeating, if any.
    pub fn held(&self) -> Option<InputKey> {
        self.held
    }

    /// Handle a key press. Returns the action to apply right away, if any.
    ///
    /// A press of the key already held only refreshes the release timeout, so
    /// terminal auto-repeat does not double the repeat rate.
    pub fn press(&mut self, key: InputKey) -> Option<GameAction> {
        if !repeats(key) {
            return Some(action_for(key));
        }
        self.since_press_ms = 0;
        if self.held == Some(key) {
            return None;
        }
        trace!("holding {:?}", key);
        self.held = Some(key);
        self.repeat_accumulator_ms = 0;
        Some(action_for(key))
    }

    /// Handle a key release. Releasing a key that is not held does nothing.
    pub fn release(&mut self, key: InputKey) {
        if self.held == Some(key) {
            self.stop();
        }
    }

    /// Advance the repeat timer and collect the repeats that fell due.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, 32> {
        let mut actions = ArrayVec::<GameAction, 32>::new();
        let Some(key) = self.held else {
            return actions;
        };

        self.since_press_ms = self.since_press_ms.saturating_add(elapsed_ms);
        if self.key_release_timeout_ms > 0 && self.since_press_ms > self.key_release_timeout_ms {
            trace!("auto-releasing {:?}", key);
            self.stop();
            return actions;
        }

        let interval = match key {
            InputKey::Down => self.drop_repeat_ms,
            _ => self.move_repeat_ms,
        };
        self.repeat_accumulator_ms = self.repeat_accumulator_ms.saturating_add(elapsed_ms);
        while self.repeat_accumulator_ms >= interval {
            if actions.try_push(action_for(key)).is_err() {
                // Drop the backlog rather than replaying it later.
                self.repeat_accumulator_ms = 0;
                break;
            }
            self.repeat_accumulator_ms -= interval;
        }

        actions
    }

    pub fn reset(&mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.held = None;
        self.repeat_accumulator_ms = 0;
        self.since_press_ms = 0;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
