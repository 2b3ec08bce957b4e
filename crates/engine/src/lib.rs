//! Game loop - drives one session from frame ticks and input actions.
//!
//! Every stimulus is queued as a [`LoopMessage`] and applied in arrival order
//! when the loop is pumped, so the session is only ever touched from one
//! place. After each message the session's queued events are forwarded to an
//! [`Observer`]; after each frame message the observer also receives a fresh
//! [`GameSnapshot`] to draw.
//!
//! ```
//! use tui_blocks_core::GameState;
//! use tui_blocks_engine::{GameLoop, LoopMessage, Observer};
//! use tui_blocks_types::GameAction;
//!
//! #[derive(Default)]
//! struct Frames(u32);
//!
//! impl Observer for Frames {
//!     fn frame(&mut self, _snapshot: &tui_blocks_core::GameSnapshot) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut game = GameLoop::new(GameState::with_seed(3));
//! let mut frames = Frames::default();
//! game.start(&mut frames);
//!
//! game.post(LoopMessage::Action(GameAction::MoveLeft));
//! game.post(LoopMessage::Frame { elapsed_ms: 16 });
//! assert_eq!(game.pump(&mut frames), 2);
//! assert_eq!(frames.0, 2);
//! ```

use std::collections::VecDeque;

use log::{debug, info, trace};

use tui_blocks_core::{get_shape, GameSnapshot, GameState, RandomSource, Shape, SimpleRng};
use tui_blocks_types::{GameAction, GameEvent, PieceKind};

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

/// One unit of work for the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMessage {
    /// Time has passed; run gravity and redraw.
    Frame { elapsed_ms: u32 },
    /// A discrete input action.
    Action(GameAction),
}

/// Collaborators notified by the loop. Every method defaults to a no-op.
pub trait Observer {
    /// Draw the current state.
    fn frame(&mut self, _snapshot: &GameSnapshot) {}

    /// The next-piece buffer was refilled; `shape` is the preview grid.
    fn next_piece(&mut self, _kind: PieceKind, _shape: &Shape) {}

    /// The score changed.
    fn score(&mut self, _score: u32) {}

    /// A spawn collided; the board and score have been reset.
    fn game_over(&mut self, _final_score: u32) {}

    fn rows_cleared(&mut self, _rows: u32, _points: u32) {}

    fn piece_locked(&mut self, _kind: PieceKind) {}
}

impl Observer for () {}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn frame(&mut self, snapshot: &GameSnapshot) {
        (**self).frame(snapshot)
    }
    fn next_piece(&mut self, kind: PieceKind, shape: &Shape) {
        (**self).next_piece(kind, shape)
    }
    fn score(&mut self, score: u32) {
        (**self).score(score)
    }
    fn game_over(&mut self, final_score: u32) {
        (**self).game_over(final_score)
    }
    fn rows_cleared(&mut self, rows: u32, points: u32) {
        (**self).rows_cleared(rows, points)
    }
    fn piece_locked(&mut self, kind: PieceKind) {
        (**self).piece_locked(kind)
    }
}

/// Owns a session and its message inbox.
#[derive(Debug)]
pub struct GameLoop<R: RandomSource = SimpleRng> {
    state: GameState<R>,
    inbox: VecDeque<LoopMessage>,
    snapshot: GameSnapshot,
    frames: u64,
    started: bool,
}

impl<R: RandomSource> GameLoop<R> {
    pub fn new(state: GameState<R>) -> Self {
        Self {
            state,
            inbox: VecDeque::with_capacity(64),
            snapshot: GameSnapshot::default(),
            frames: 0,
            started: false,
        }
    }

    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState<R> {
        &mut self.state
    }

    pub fn into_state(self) -> GameState<R> {
        self.state
    }

    /// Frame messages processed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Messages waiting to be pumped.
    pub fn pending(&self) -> usize {
        self.inbox.len()
    }

    /// Queue a message; nothing happens until [`GameLoop::pump`].
    pub fn post(&mut self, message: LoopMessage) {
        self.inbox.push_back(message);
    }

    /// Publish the initial preview and score, then draw the first frame.
    ///
    /// Calling this twice has no further effect.
    pub fn start<O: Observer>(&mut self, observer: &mut O) {
        if self.started {
            return;
        }
        self.started = true;
        info!("game loop started");
        self.dispatch_events(observer);
        observer.score(self.state.score());
        self.draw(observer);
    }

    /// Apply every queued message in order. Returns how many were processed.
    pub fn pump<O: Observer>(&mut self, observer: &mut O) -> usize {
        let mut processed = 0;
        while let Some(message) = self.inbox.pop_front() {
            self.handle(message, observer);
            processed += 1;
        }
        processed
    }

    fn handle<O: Observer>(&mut self, message: LoopMessage, observer: &mut O) {
        match message {
            LoopMessage::Frame { elapsed_ms } => {
                self.state.tick(elapsed_ms);
                self.dispatch_events(observer);
                self.draw(observer);
            }
            LoopMessage::Action(action) => {
                let changed = self.state.apply_action(action);
                trace!("{} -> {}", action.as_str(), changed);
                self.dispatch_events(observer);
            }
        }
    }

    fn draw<O: Observer>(&mut self, observer: &mut O) {
        self.frames += 1;
        self.state.snapshot_into(&mut self.snapshot);
        observer.frame(&self.snapshot);
    }

    fn dispatch_events<O: Observer>(&mut self, observer: &mut O) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::PieceLocked { kind } => observer.piece_locked(kind),
                GameEvent::RowsCleared { rows, points } => observer.rows_cleared(rows, points),
                GameEvent::ScoreChanged(score) => observer.score(score),
                GameEvent::NextPiece(kind) => observer.next_piece(kind, &get_shape(kind)),
                GameEvent::GameOver { final_score } => {
                    debug!("forwarding game over (final score {})", final_score);
                    observer.game_over(final_score)
                }
            }
        }
    }
}
