//! Collision & placement - overlap tests and merging a landed piece.

use crate::board::Board;
use crate::piece::ActivePiece;

/// True when any occupied cell of `piece` lies outside the board or on a
/// non-empty board cell.
pub fn collides(board: &Board, piece: &ActivePiece) -> bool {
    piece.cells().any(|(x, y)| board.is_blocked(x, y))
}

/// Write the piece's cell value into every board cell it covers.
///
/// Does not check for overlap; callers test [`collides`] first. Cells that
/// would fall outside the board are skipped.
pub fn merge(board: &mut Board, piece: &ActivePiece) {
    let value = piece.value();
    for (x, y) in piece.cells() {
        board.set(x, y, value);
    }
}
