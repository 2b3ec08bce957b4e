//! Board module - manages the game grid
//!
//! The board is a `width x height` grid of cell values, fixed for the life of a
//! session. Storage is a flat row-major `Vec` allocated once at construction.
//! Coordinates: (x, y) where x grows to the right and y grows downwards; row 0
//! is the top of the playfield.

use thiserror::Error;

use crate::scoring::row_points;
use crate::types::{CellValue, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, EMPTY, MAX_BOARD_SIDE};

/// Reasons a board cannot be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board dimensions must be non-zero (got {width}x{height})")]
    ZeroSized { width: usize, height: usize },
    #[error("board {width}x{height} exceeds the maximum side of {max}")]
    TooLarge {
        width: usize,
        height: usize,
        max: usize,
    },
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("cell value {0} does not belong to any piece")]
    UnknownCellValue(CellValue),
}

fn is_cell_value(value: CellValue) -> bool {
    value == EMPTY || PieceKind::from_cell_value(value).is_some()
}

/// Result of one sweep pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepResult {
    /// Rows removed in this pass.
    pub rows: u32,
    /// Points awarded, with the per-pass doubling multiplier applied.
    pub points: u32,
}

/// The game board using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<CellValue>,
}

impl Board {
    /// Create a new empty board with the default 10x20 size
    pub fn new() -> Self {
        Self {
            width: BOARD_WIDTH as usize,
            height: BOARD_HEIGHT as usize,
            cells: vec![EMPTY; BOARD_WIDTH as usize * BOARD_HEIGHT as usize],
        }
    }

    /// Create an empty board of the given size.
    pub fn with_size(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::ZeroSized { width, height });
        }
        let max = MAX_BOARD_SIDE as usize;
        if width > max || height > max {
            return Err(BoardError::TooLarge { width, height, max });
        }
        Ok(Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        })
    }

    /// Build a board from explicit rows (top row first).
    ///
    /// Every value must be empty or a piece's cell value.
    pub fn from_rows<R: AsRef<[CellValue]>>(rows: &[R]) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut board = Self::with_size(width, height)?;
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(BoardError::RaggedRow {
                    row: y,
                    len: row.len(),
                    expected: width,
                });
            }
            if let Some(&bad) = row.iter().find(|&&v| !is_cell_value(v)) {
                return Err(BoardError::UnknownCellValue(bad));
            }
            board.cells[y * width..(y + 1) * width].copy_from_slice(row);
        }
        Ok(board)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<CellValue> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds or `value` is not a cell value
    pub fn set(&mut self, x: i32, y: i32, value: CellValue) -> bool {
        match self.index(x, y) {
            Some(idx) if is_cell_value(value) => {
                self.cells[idx] = value;
                true
            }
            _ => false,
        }
    }

    /// True when (x, y) is outside the board or holds a non-zero cell.
    ///
    /// The board has no sentinel border, so every side is checked here.
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        !matches!(self.get(x, y), Some(EMPTY))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        self.row(y).iter().all(|&cell| cell != EMPTY)
    }

    /// Remove row `y` and shift every row above it down by one.
    /// Row 0 becomes empty.
    pub fn clear_row(&mut self, y: usize) {
        if y >= self.height {
            return;
        }
        let width = self.width;
        // copy_within handles the overlap between source and destination
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(EMPTY);
    }

    /// Clear every full row, scanning bottom to top.
    ///
    /// After a row is removed the same index is examined again, since the row
    /// that slid into it from above has not been checked yet. The first row
    /// cleared in the pass is worth 10 points and each further row doubles.
    pub fn sweep(&mut self) -> SweepResult {
        let mut result = SweepResult::default();
        let mut y = self.height;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.clear_row(row);
                result.points = result.points.saturating_add(row_points(result.rows));
                result.rows += 1;
                continue;
            }
            y -= 1;
        }
        result
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// True when no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == EMPTY)
    }

    /// One row as a slice.
    pub fn row(&self, y: usize) -> &[CellValue] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i32, value: CellValue) {
        for x in 0..board.width() as i32 {
            board.set(x, y, value);
        }
    }

    #[test]
    fn index_calculation() {
        let board = Board::new();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn zero_sized_board_is_rejected() {
        assert_eq!(
            Board::with_size(0, 20),
            Err(BoardError::ZeroSized {
                width: 0,
                height: 20
            })
        );
    }

    #[test]
    fn out_of_range_counts_as_blocked() {
        let board = Board::with_size(4, 4).unwrap();
        assert!(!board.is_blocked(0, 0));
        assert!(board.is_blocked(-1, 0));
        assert!(board.is_blocked(4, 0));
        assert!(board.is_blocked(0, -1));
        assert!(board.is_blocked(0, 4));
    }

    #[test]
    fn sweep_rechecks_the_same_row_after_a_clear() {
        // Two adjacent full rows: the upper one slides into the cleared slot
        // and has to be caught on the re-check.
        let mut board = Board::with_size(3, 4).unwrap();
        fill_row(&mut board, 2, 1);
        fill_row(&mut board, 3, 2);
        board.set(0, 1, 5);

        let result = board.sweep();
        assert_eq!(result, SweepResult { rows: 2, points: 30 });
        assert_eq!(board.row(3), &[5, 0, 0]);
        assert!(board.rows().take(3).all(|r| r.iter().all(|&c| c == EMPTY)));
    }

    #[test]
    fn sweep_on_board_without_full_rows_is_a_no_op() {
        let mut board = Board::new();
        board.set(3, 19, 4);
        let before = board.clone();
        assert_eq!(board.sweep(), SweepResult::default());
        assert_eq!(board, before);
    }

    #[test]
    fn sweep_of_a_completely_full_board_empties_it() {
        let mut board = Board::with_size(4, 4).unwrap();
        for y in 0..4 {
            fill_row(&mut board, y, 3);
        }
        let result = board.sweep();
        assert_eq!(result.rows, 4);
        assert_eq!(result.points, 10 + 20 + 40 + 80);
        assert!(board.is_empty());
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = Board::from_rows(&[vec![0, 0], vec![0]]).unwrap_err();
        assert_eq!(
            err,
            BoardError::RaggedRow {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn foreign_cell_values_are_refused() {
        assert_eq!(
            Board::from_rows(&[[9, 200, 0, 0], [0; 4], [0; 4], [0; 4]]),
            Err(BoardError::UnknownCellValue(9))
        );

        let mut board = Board::new();
        assert!(!board.set(0, 0, 42));
        assert!(!board.set(0, 0, 8));
        assert!(board.is_empty());
        assert!(board.set(0, 0, 7));
        assert!(board.set(0, 0, EMPTY));
    }
}
