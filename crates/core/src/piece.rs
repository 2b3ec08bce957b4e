//! The active (falling) piece.

use crate::pieces::{get_shape, spawn_x};
use crate::shape::Shape;
use crate::types::{CellValue, PieceKind};

/// A shape plus the board position of its top-left grid corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl ActivePiece {
    pub fn new(shape: Shape, x: i32, y: i32) -> Self {
        Self { shape, x, y }
    }

    /// Catalog shape for `kind`, centred horizontally on row 0.
    pub fn spawn(kind: PieceKind, board_width: usize) -> Self {
        let shape = get_shape(kind);
        Self {
            x: spawn_x(board_width, &shape),
            y: 0,
            shape,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.shape.kind()
    }

    pub fn value(&self) -> CellValue {
        self.shape.value()
    }

    /// Board coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied()
            .map(move |(sx, sy)| (self.x + sx as i32, self.y + sy as i32))
    }
}
