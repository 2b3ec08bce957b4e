//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{get_shape, GameSnapshot, Shape};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::CellValue;

/// How long the game-over banner stays up after a reset.
pub const GAME_OVER_BANNER_MS: u32 = 2000;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Display state owned by the front-end rather than the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudState {
    /// Preview grid published by the session; falls back to the snapshot's kind.
    pub preview: Option<Shape>,
    banner_ms: u32,
    final_score: u32,
}

impl HudState {
    /// Show the game-over banner for [`GAME_OVER_BANNER_MS`].
    pub fn show_game_over(&mut self, final_score: u32) {
        self.banner_ms = GAME_OVER_BANNER_MS;
        self.final_score = final_score;
    }

    /// Count down transient overlays.
    pub fn advance(&mut self, elapsed_ms: u32) {
        self.banner_ms = self.banner_ms.saturating_sub(elapsed_ms);
    }

    pub fn banner_visible(&self) -> bool {
        self.banner_ms > 0
    }

    pub fn final_score(&self) -> u32 {
        self.final_score
    }
}

/// Colour for a cell value; `None` for empty or unknown values.
pub fn cell_color(value: CellValue) -> Option<Rgb> {
    match value {
        1 => Some(Rgb::new(0xFF, 0x0D, 0x72)),
        2 => Some(Rgb::new(0x0D, 0xC2, 0xFF)),
        3 => Some(Rgb::new(0x0D, 0xFF, 0x72)),
        4 => Some(Rgb::new(0xF5, 0x38, 0xFF)),
        5 => Some(Rgb::new(0xFF, 0x8E, 0x0D)),
        6 => Some(Rgb::new(0xFF, 0xE1, 0x38)),
        7 => Some(Rgb::new(0x38, 0x77, 0xFF)),
        _ => None,
    }
}

const PLAYFIELD_BG: Rgb = Rgb::new(0, 0, 0);

/// Largest board cell, in terminal columns or rows.
pub const MAX_CELL_SIDE: u16 = 8;

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    /// Cell size is clamped to `1..=MAX_CELL_SIDE`.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_SIDE),
            cell_h: cell_h.clamp(1, MAX_CELL_SIDE),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers can reuse one framebuffer across frames.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &HudState,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let cols = snap.width as u16;
        let rows = snap.height as u16;
        let frame_w = cols.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = rows.saturating_mul(self.cell_h).saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..rows {
            for x in 0..cols {
                let value = snap.visible_cell(x as usize, y as usize);
                self.draw_board_cell(fb, start_x, start_y, x, y, value);
            }
        }

        self.draw_side_panel(fb, snap, hud, viewport, start_x, start_y, frame_w);

        if hud.banner_visible() {
            self.draw_banner(fb, start_x, start_y, frame_w, frame_h, hud.final_score());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &HudState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        value: CellValue,
    ) {
        let px = start_x
            .saturating_add(1)
            .saturating_add(x.saturating_mul(self.cell_w));
        let py = start_y
            .saturating_add(1)
            .saturating_add(y.saturating_mul(self.cell_h));
        match cell_color(value) {
            Some(fg) => {
                let style = CellStyle::new(fg, PLAYFIELD_BG).bold();
                fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
            }
            None => {
                let style = CellStyle::new(Rgb::new(60, 60, 70), PLAYFIELD_BG).dim();
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
                fb.put_char(px, py, '·', style);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &HudState,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("LINES", snap.lines),
            ("RESETS", snap.game_overs),
        ] {
            fb.put_str(panel_x, y, name, label);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, n, value);
            y = y.saturating_add(2);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        let preview = hud.preview.unwrap_or_else(|| get_shape(snap.next));
        for (sx, sy) in preview.occupied() {
            let Some(fg) = cell_color(preview.value()) else {
                continue;
            };
            let px = panel_x.saturating_add(sx as u16 * self.cell_w);
            let py = y.saturating_add(sy as u16 * self.cell_h);
            let style = CellStyle::new(fg, Rgb::new(0, 0, 0));
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_banner(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        final_score: u32,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

        let text = "GAME OVER";
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, style);

        let digits = final_score.checked_ilog10().unwrap_or(0) as u16 + 1;
        let x = start_x.saturating_add(frame_w.saturating_sub(digits) / 2);
        fb.put_u32(x, mid_y.saturating_add(1), final_score, style);
    }
}
