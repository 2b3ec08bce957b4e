//! Pieces module - the seven-piece catalog
//!
//! Every piece spawns in the orientation listed here. Grids are padded to 4x4;
//! the `size` column decides how much of the padding belongs to the shape.
//! Rotation happens on the grid itself (see [`crate::rotation`]), so there are
//! no per-orientation tables.

use crate::shape::Shape;
use crate::types::{CellValue, PieceKind, MAX_SHAPE_SIZE};

type Grid = [[CellValue; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];

const T_GRID: Grid = [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
const O_GRID: Grid = [[2, 2, 0, 0], [2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
const L_GRID: Grid = [[0, 3, 0, 0], [0, 3, 0, 0], [0, 3, 3, 0], [0, 0, 0, 0]];
const J_GRID: Grid = [[0, 4, 0, 0], [0, 4, 0, 0], [4, 4, 0, 0], [0, 0, 0, 0]];
const I_GRID: Grid = [[0, 5, 0, 0], [0, 5, 0, 0], [0, 5, 0, 0], [0, 5, 0, 0]];
const S_GRID: Grid = [[0, 6, 6, 0], [6, 6, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
const Z_GRID: Grid = [[7, 7, 0, 0], [0, 7, 7, 0], [0, 0, 0, 0], [0, 0, 0, 0]];

/// Get the spawn shape for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::T => Shape::from_parts(kind, 3, T_GRID),
        PieceKind::O => Shape::from_parts(kind, 2, O_GRID),
        PieceKind::L => Shape::from_parts(kind, 3, L_GRID),
        PieceKind::J => Shape::from_parts(kind, 3, J_GRID),
        PieceKind::I => Shape::from_parts(kind, 4, I_GRID),
        PieceKind::S => Shape::from_parts(kind, 3, S_GRID),
        PieceKind::Z => Shape::from_parts(kind, 3, Z_GRID),
    }
}

/// Spawn column for a shape: board centre minus half the shape, both floored.
pub fn spawn_x(board_width: usize, shape: &Shape) -> i32 {
    (board_width / 2) as i32 - (shape.size() / 2) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_shapes_pass_validation() {
        for kind in PieceKind::ALL {
            let shape = get_shape(kind);
            let rows: Vec<Vec<CellValue>> = shape.rows().map(|r| r.to_vec()).collect();
            let rebuilt = Shape::from_rows(&rows).expect("catalog shape must be valid");
            assert_eq!(rebuilt, shape, "{:?}", kind);
        }
    }

    #[test]
    fn every_piece_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(get_shape(kind).occupied().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn shape_cells_carry_the_piece_value() {
        for kind in PieceKind::ALL {
            let shape = get_shape(kind);
            for (x, y) in shape.occupied() {
                assert_eq!(shape.get(x, y), kind.cell_value());
            }
        }
    }

    #[test]
    fn spawn_column_is_centred() {
        assert_eq!(spawn_x(10, &get_shape(PieceKind::O)), 4);
        assert_eq!(spawn_x(10, &get_shape(PieceKind::T)), 4);
        assert_eq!(spawn_x(10, &get_shape(PieceKind::I)), 3);
        assert_eq!(spawn_x(7, &get_shape(PieceKind::I)), 1);
    }
}
