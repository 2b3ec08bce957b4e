//! Shape module - one piece in one orientation as a small square grid
//!
//! Shapes are stored in a fixed 4x4 array (the largest catalog piece is the
//! 4x4 I bar) plus the side length actually in use, so they are `Copy` and
//! never allocate. Cells outside `size x size` are always zero.

use thiserror::Error;

use crate::types::{CellValue, PieceKind, EMPTY, MAX_SHAPE_SIZE};

/// Reasons a grid is rejected as a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("shape has no rows")]
    Empty,
    #[error("shape side {size} exceeds the maximum of {max}")]
    TooLarge { size: usize, max: usize },
    #[error("row {row} has {len} cells but the shape has {expected} rows (shapes must be square)")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("cell value {0} does not name a piece")]
    UnknownCellValue(CellValue),
    #[error("shape mixes piece ids {first} and {second}")]
    MixedIds { first: CellValue, second: CellValue },
    #[error("shape has no occupied cells")]
    NoCells,
}

/// A square grid of cell values holding exactly one piece id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: PieceKind,
    size: u8,
    cells: [[CellValue; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from raw rows, validating every invariant.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_core::Shape;
    /// use tui_blocks_types::PieceKind;
    ///
    /// let o = Shape::from_rows(&[[2, 2], [2, 2]]).unwrap();
    /// assert_eq!(o.kind(), PieceKind::O);
    /// assert_eq!(o.size(), 2);
    ///
    /// assert!(Shape::from_rows(&[[1, 2], [0, 0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[CellValue]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let size = rows.len();
        if size == 0 {
            return Err(ShapeError::Empty);
        }
        if size > MAX_SHAPE_SIZE {
            return Err(ShapeError::TooLarge {
                size,
                max: MAX_SHAPE_SIZE,
            });
        }

        let mut cells = [[EMPTY; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut id: Option<CellValue> = None;
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(ShapeError::NotSquare {
                    row: y,
                    len: row.len(),
                    expected: size,
                });
            }
            for (x, &value) in row.iter().enumerate() {
                if value == EMPTY {
                    continue;
                }
                if PieceKind::from_cell_value(value).is_none() {
                    return Err(ShapeError::UnknownCellValue(value));
                }
                match id {
                    Some(first) if first != value => {
                        return Err(ShapeError::MixedIds {
                            first,
                            second: value,
                        })
                    }
                    _ => id = Some(value),
                }
                cells[y][x] = value;
            }
        }

        let kind = id
            .and_then(PieceKind::from_cell_value)
            .ok_or(ShapeError::NoCells)?;

        Ok(Self {
            kind,
            size: size as u8,
            cells,
        })
    }

    /// Catalog constructor; the caller guarantees the invariants.
    pub(crate) const fn from_parts(
        kind: PieceKind,
        size: u8,
        cells: [[CellValue; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
    ) -> Self {
        Self { kind, size, cells }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// The non-zero value held by every occupied cell.
    pub fn value(&self) -> CellValue {
        self.kind.cell_value()
    }

    /// Side length of the grid (width and height are equal).
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Cell at `(x, y)`; zero outside the grid.
    pub fn get(&self, x: usize, y: usize) -> CellValue {
        if x >= self.size() || y >= self.size() {
            return EMPTY;
        }
        self.cells[y][x]
    }

    /// Rows of the grid, each `size()` cells long.
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> + '_ {
        let size = self.size();
        self.cells[..size].iter().map(move |row| &row[..size])
    }

    /// Grid coordinates `(x, y)` of every occupied cell, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size();
        (0..size).flat_map(move |y| {
            (0..size).filter_map(move |x| (self.cells[y][x] != EMPTY).then_some((x, y)))
        })
    }

    /// Swap cells across the main diagonal.
    pub(crate) fn transpose(&mut self) {
        let size = self.size();
        for y in 0..size {
            for x in 0..y {
                let tmp = self.cells[x][y];
                self.cells[x][y] = self.cells[y][x];
                self.cells[y][x] = tmp;
            }
        }
    }

    /// Mirror every row left-to-right.
    pub(crate) fn reverse_each_row(&mut self) {
        let size = self.size();
        for row in &mut self.cells[..size] {
            row[..size].reverse();
        }
    }

    /// Flip the grid top-to-bottom.
    pub(crate) fn reverse_row_order(&mut self) {
        let size = self.size();
        self.cells[..size].reverse();
    }
}
