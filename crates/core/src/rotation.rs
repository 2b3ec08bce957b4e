//! Rotation module - grid rotation with a zig-zag wall kick
//!
//! Rotation is a plain matrix transform of the shape grid: transpose, then
//! mirror each row (clockwise) or flip the row order (counter-clockwise).
//! Four turns in one direction give back the original grid.
//!
//! When the rotated piece collides, the resolver nudges it sideways with
//! growing, alternating steps (+1, -2, +3, -4, ...), visiting x+1, x-1, x+2,
//! x-2 and so on. Once the next step would be wider than the shape, the
//! rotation is undone.

use crate::board::Board;
use crate::collision::collides;
use crate::piece::ActivePiece;
use crate::shape::Shape;
use crate::types::RotationDirection;

/// Rotate a shape grid in place. Position is not involved.
pub fn rotate(shape: &mut Shape, direction: RotationDirection) {
    shape.transpose();
    match direction {
        RotationDirection::Clockwise => shape.reverse_each_row(),
        RotationDirection::CounterClockwise => shape.reverse_row_order(),
    }
}

/// Rotate `piece` and search for a free horizontal offset.
///
/// Returns `true` if the rotation was kept (possibly shifted). On `false` the
/// piece is exactly as it was before the call.
pub fn rotate_with_kick(
    piece: &mut ActivePiece,
    board: &Board,
    direction: RotationDirection,
) -> bool {
    let original_x = piece.x;
    rotate(&mut piece.shape, direction);

    let mut offset: i32 = 1;
    while collides(board, piece) {
        piece.x += offset;
        offset = -(offset + offset.signum());
        if offset > piece.shape.size() as i32 {
            rotate(&mut piece.shape, direction.reverse());
            piece.x = original_x;
            return false;
        }
    }

    true
}
