//! Game state module - one game session
//!
//! Ties together the board, the active piece, the next-piece buffer, the random
//! source and the score. Every mutation goes through the operations here; the
//! session never reads a clock or draws anything. Collaborators learn about
//! changes through queued [`GameEvent`]s (see [`GameState::drain_events`]).
//!
//! Landing is instantaneous: when a downward step collides the piece is merged,
//! the next piece is installed and only then are full rows swept. A spawn that
//! collides is a game over, which empties the board and zeroes the score before
//! play simply continues.

use log::{debug, info};
use thiserror::Error;

use crate::board::{Board, BoardError, SweepResult};
use crate::collision::{collides, merge};
use crate::piece::ActivePiece;
use crate::rng::{random_kind, RandomSource, SimpleRng};
use crate::rotation::rotate_with_kick;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{
    ConfigError, Direction, GameAction, GameConfig, GameEvent, PieceKind, RotationDirection,
    DROP_INTERVAL_MS,
};

/// Reasons a session cannot be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
}

/// What happened to a piece that was landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockOutcome {
    pub kind: PieceKind,
    pub rows_cleared: u32,
    pub points: u32,
    /// The replacement piece did not fit and the session was reset.
    pub game_over: bool,
}

/// Result of one downward step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row.
    Fell,
    /// The piece could not move and was merged into the board.
    Locked(LockOutcome),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SimpleRng> {
    board: Board,
    active: ActivePiece,
    next: PieceKind,
    rng: R,
    score: u32,
    lines: u32,
    pieces_locked: u32,
    game_overs: u32,
    drop_timer_ms: u32,
    drop_interval_ms: u32,
    events: Vec<GameEvent>,
}

impl<R: RandomSource> GameState<R> {
    /// Create a session from a validated config.
    pub fn new(config: &GameConfig, rng: R) -> Result<Self, GameError> {
        config.validate()?;
        let board = Board::with_size(config.board_width as usize, config.board_height as usize)?;
        Ok(Self::with_board(board, config.drop_interval_ms, rng))
    }

    /// Create a session on an existing board.
    ///
    /// The next-piece buffer is filled and the first piece installed right away,
    /// so the session is playable as soon as this returns.
    pub fn with_board(board: Board, drop_interval_ms: u32, mut rng: R) -> Self {
        let next = random_kind(&mut rng);
        let active = ActivePiece::spawn(next, board.width());
        let mut state = Self {
            board,
            active,
            next,
            rng,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            game_overs: 0,
            drop_timer_ms: 0,
            drop_interval_ms,
            events: Vec::with_capacity(8),
        };
        state.events.push(GameEvent::NextPiece(next));
        state.reset();
        info!(
            "session started: {}x{} board, first piece {:?}",
            state.board.width(),
            state.board.height(),
            state.active.kind()
        );
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setting up positions.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    /// Replace the active piece without any collision check.
    pub fn set_active(&mut self, piece: ActivePiece) {
        self.active = piece;
    }

    pub fn next(&self) -> PieceKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Rows cleared since the session started.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// How many times a blocked spawn reset the session.
    pub fn game_overs(&self) -> u32 {
        self.game_overs
    }

    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Install the buffered piece at the spawn point and refill the buffer.
    ///
    /// Returns `true` if the installed piece collided, in which case the board
    /// was emptied and the score zeroed.
    pub fn reset(&mut self) -> bool {
        self.active = ActivePiece::spawn(self.next, self.board.width());
        self.next = random_kind(&mut self.rng);
        self.events.push(GameEvent::NextPiece(self.next));

        if !collides(&self.board, &self.active) {
            return false;
        }

        let final_score = self.score;
        self.board.clear();
        self.score = 0;
        self.game_overs = self.game_overs.saturating_add(1);
        info!(
            "spawn blocked for {:?}: board cleared, final score {}",
            self.active.kind(),
            final_score
        );
        self.events.push(GameEvent::GameOver { final_score });
        self.events.push(GameEvent::ScoreChanged(0));
        true
    }

    /// Move the active piece down one row, landing it if it cannot move.
    ///
    /// Zeroes the gravity timer whether the step came from gravity or input.
    pub fn drop_piece(&mut self) -> DropOutcome {
        self.active.y += 1;
        let outcome = if collides(&self.board, &self.active) {
            self.active.y -= 1;
            DropOutcome::Locked(self.lock())
        } else {
            DropOutcome::Fell
        };
        self.drop_timer_ms = 0;
        outcome
    }

    fn lock(&mut self) -> LockOutcome {
        let kind = self.active.kind();
        merge(&mut self.board, &self.active);
        self.pieces_locked = self.pieces_locked.saturating_add(1);
        self.events.push(GameEvent::PieceLocked { kind });

        let game_over = self.reset();
        let SweepResult { rows, points } = self.board.sweep();
        if rows > 0 {
            self.lines = self.lines.saturating_add(rows);
            self.score = self.score.saturating_add(points);
            debug!("{:?} cleared {} row(s) for {} points", kind, rows, points);
            self.events.push(GameEvent::RowsCleared { rows, points });
            self.events.push(GameEvent::ScoreChanged(self.score));
        } else {
            debug!("{:?} locked at ({}, {})", kind, self.active.x, self.active.y);
        }

        LockOutcome {
            kind,
            rows_cleared: rows,
            points,
            game_over,
        }
    }

    /// Shift the active piece one column. Returns `false` if it was blocked.
    pub fn move_piece(&mut self, direction: Direction) -> bool {
        self.active.x += direction.dx();
        if collides(&self.board, &self.active) {
            self.active.x -= direction.dx();
            return false;
        }
        true
    }

    /// Rotate the active piece with wall kicks. Returns `false` if it was blocked.
    pub fn rotate_piece(&mut self, direction: RotationDirection) -> bool {
        rotate_with_kick(&mut self.active, &self.board, direction)
    }

    /// Advance the gravity timer by `elapsed_ms`.
    ///
    /// Once the accumulated time exceeds the drop interval the piece steps down
    /// (which zeroes the timer) and the outcome is returned.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<DropOutcome> {
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms > self.drop_interval_ms {
            Some(self.drop_piece())
        } else {
            None
        }
    }

    /// Apply a game action. Returns `true` if the session changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(Direction::Left),
            GameAction::MoveRight => self.move_piece(Direction::Right),
            GameAction::SoftDrop => {
                self.drop_piece();
                true
            }
            GameAction::RotateCw => self.rotate_piece(RotationDirection::Clockwise),
            GameAction::RotateCcw => self.rotate_piece(RotationDirection::CounterClockwise),
        }
    }

    /// Drain events queued since the last call, oldest first.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Take all queued events as a `Vec`.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Copy the render-relevant state into `out`, reusing its board buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = Some(ActiveSnapshot::from(self.active));
        out.next = self.next;
        out.score = self.score;
        out.lines = self.lines;
        out.pieces_locked = self.pieces_locked;
        out.game_overs = self.game_overs;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl GameState<SimpleRng> {
    /// Default 10x20 session driven by a seeded [`SimpleRng`].
    pub fn with_seed(seed: u32) -> Self {
        Self::with_board(Board::new(), DROP_INTERVAL_MS, SimpleRng::new(seed))
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::with_seed(1)
    }
}
