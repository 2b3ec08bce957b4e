//! Styled character grid the game view draws into.
//!
//! Rows are stored contiguously so the renderer can compare a whole row of the
//! previous frame against the next one as slices.

use std::fmt::Write as _;

use arrayvec::ArrayString;

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

const INK: Rgb = Rgb::new(220, 220, 220);
const PAPER: Rgb = Rgb::new(0, 0, 0);

/// Glyph intensity. Bold and dim never combine on one cell here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weight {
    #[default]
    Normal,
    Bold,
    Dim,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub weight: Weight,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            weight: Weight::Normal,
        }
    }

    pub const fn bold(self) -> Self {
        Self {
            weight: Weight::Bold,
            ..self
        }
    }

    pub const fn dim(self) -> Self {
        Self {
            weight: Weight::Dim,
            ..self
        }
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(INK, PAPER)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        style: CellStyle::new(INK, PAPER),
    };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// `width x height` cells, row-major. Writes outside the grid are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change the dimensions. The allocation is reused and every cell is blank
    /// afterwards.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, Cell::BLANK);
    }

    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        Some(&self.cells[start..start + w])
    }

    fn row_mut(&mut self, y: u16) -> Option<&mut [Cell]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        Some(&mut self.cells[start..start + w])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks_exact panics on 0.
        self.cells.chunks_exact(self.width.max(1) as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.row(y)?.get(x as usize).copied()
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.row_mut(y).and_then(|row| row.get_mut(x as usize)) {
            *slot = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write `s` left to right from `(x, y)`, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let Some(row) = self.row_mut(y) else {
            return;
        };
        for (slot, ch) in row.iter_mut().skip(x as usize).zip(s.chars()) {
            *slot = Cell { ch, style };
        }
    }

    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) {
        let mut digits = ArrayString::<10>::new();
        // u32::MAX has ten digits, so this cannot overflow the buffer.
        let _ = write!(digits, "{}", value);
        self.put_str(x, y, &digits, style);
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        let x0 = (x as usize).min(self.width as usize);
        let x1 = (x as usize + w as usize).min(self.width as usize);
        let y1 = y.saturating_add(h);
        for row_y in y..y1 {
            match self.row_mut(row_y) {
                Some(row) => row[x0..x1].fill(Cell { ch, style }),
                None => break,
            }
        }
    }

    /// Row `y` as plain text, styles dropped. Empty past the bottom edge.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y)
            .map(|row| row.iter().map(|c| c.ch).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_u32_writes_decimal_digits() {
        let mut fb = FrameBuffer::new(12, 1);
        let style = CellStyle::default();
        fb.put_u32(0, 0, 0, style);
        assert_eq!(fb.row_text(0).trim_end(), "0");
        fb.put_u32(2, 0, u32::MAX, style);
        assert_eq!(fb.row_text(0), "0 4294967295");
    }

    #[test]
    fn writes_past_the_edge_are_dropped() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(1, 0, "abcd", CellStyle::default());
        fb.put_char(0, 5, 'x', CellStyle::default());
        fb.put_str(7, 0, "zz", CellStyle::default());
        assert_eq!(fb.row_text(0), " ab");
        assert_eq!(fb.row_text(5), "");
    }

    #[test]
    fn fill_rect_is_clipped_to_the_grid() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.fill_rect(2, 1, 5, 5, '#', CellStyle::default());
        assert_eq!(fb.row_text(0), "    ");
        assert_eq!(fb.row_text(1), "  ##");
    }

    #[test]
    fn resize_blanks_every_cell() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_str(0, 0, "xy", CellStyle::default());
        fb.resize(4, 3);
        assert_eq!((fb.width(), fb.height()), (4, 3));
        assert_eq!(fb.rows().count(), 3);
        assert!(fb.rows().flatten().all(|c| *c == Cell::BLANK));
    }

    #[test]
    fn weight_builders_replace_each_other() {
        let style = CellStyle::default().bold().dim();
        assert_eq!(style.weight, Weight::Dim);
        assert_eq!(CellStyle::default().weight, Weight::Normal);
    }
}
