//! Scoring module - row-clear points
//!
//! Within one sweep pass the first row cleared is worth `10 x 1`, and each
//! further row doubles the multiplier (`10 x 2`, `10 x 4`, ...). The multiplier
//! starts over on every pass. Score never feeds back into gameplay.

use crate::types::ROW_CLEAR_POINTS;

/// Points for the row at position `index_in_pass` (0-based) within one sweep pass.
pub fn row_points(index_in_pass: u32) -> u32 {
    ROW_CLEAR_POINTS.saturating_mul(2u32.saturating_pow(index_in_pass))
}

/// Total points for clearing `rows` rows in a single pass.
///
/// # Examples
///
/// ```
/// use tui_blocks_core::scoring::sweep_points;
///
/// assert_eq!(sweep_points(1), 10);
/// assert_eq!(sweep_points(2), 30);
/// assert_eq!(sweep_points(3), 70);
/// ```
pub fn sweep_points(rows: u32) -> u32 {
    (0..rows).fold(0u32, |acc, i| acc.saturating_add(row_points(i)))
}
