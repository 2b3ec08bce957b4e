use crate::game_state::GameState;
use crate::piece::ActivePiece;
use crate::rng::RandomSource;
use crate::shape::Shape;
use crate::types::{CellValue, PieceKind, EMPTY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind(),
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major board cells, `width * height` long. The active piece is not merged in.
    pub board: Vec<CellValue>,
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub score: u32,
    pub lines: u32,
    pub pieces_locked: u32,
    pub game_overs: u32,
}

impl GameSnapshot {
    /// Board cell at (x, y), `EMPTY` outside the board.
    pub fn board_cell(&self, x: usize, y: usize) -> CellValue {
        if x >= self.width || y >= self.height {
            return EMPTY;
        }
        self.board[y * self.width + x]
    }

    /// Cell as it should be drawn: the active piece over the board.
    pub fn visible_cell(&self, x: usize, y: usize) -> CellValue {
        if let Some(active) = &self.active {
            let sx = x as i32 - active.x;
            let sy = y as i32 - active.y;
            if sx >= 0 && sy >= 0 {
                let v = active.shape.get(sx as usize, sy as usize);
                if v != EMPTY {
                    return v;
                }
            }
        }
        self.board_cell(x, y)
    }

    pub fn clear(&mut self) {
        self.board.clear();
        self.width = 0;
        self.height = 0;
        self.active = None;
        self.next = PieceKind::ALL[0];
        self.score = 0;
        self.lines = 0;
        self.pieces_locked = 0;
        self.game_overs = 0;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            board: Vec::new(),
            active: None,
            next: PieceKind::ALL[0],
            score: 0,
            lines: 0,
            pieces_locked: 0,
            game_overs: 0,
        }
    }
}

impl<R: RandomSource> From<&GameState<R>> for GameSnapshot {
    fn from(state: &GameState<R>) -> Self {
        state.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::get_shape;

    #[test]
    fn visible_cell_overlays_the_active_piece() {
        let mut snap = GameSnapshot {
            width: 4,
            height: 4,
            board: vec![0; 16],
            ..GameSnapshot::default()
        };
        snap.board[15] = 3;
        snap.active = Some(ActivePiece::new(get_shape(PieceKind::O), 1, 1).into());

        assert_eq!(snap.visible_cell(1, 1), 2);
        assert_eq!(snap.visible_cell(2, 2), 2);
        assert_eq!(snap.visible_cell(0, 0), 0);
        assert_eq!(snap.visible_cell(3, 3), 3);
        assert_eq!(snap.board_cell(1, 1), 0);
        assert_eq!(snap.visible_cell(9, 9), 0);
    }

    #[test]
    fn clear_resets_everything() {
        let mut snap = GameSnapshot {
            width: 2,
            height: 2,
            board: vec![1, 1, 1, 1],
            score: 40,
            ..GameSnapshot::default()
        };
        snap.clear();
        assert_eq!(snap, GameSnapshot::default());
    }
}
