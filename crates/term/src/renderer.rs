//! Terminal output: screen setup and frame presentation.
//!
//! A frame goes out as spans of cells that differ from what the terminal
//! already shows. When nothing is known to be on screen (first frame, a size
//! change, or after [`TerminalRenderer::invalidate`]) the screen is cleared
//! and every row becomes one span.

use std::io::{self, Write};
use std::mem;
use std::ops::Range;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb, Weight};

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// What the terminal currently displays, if known.
    shown: Option<FrameBuffer>,
    scratch: Vec<u8>,
    key_release_events: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            scratch: Vec::with_capacity(16 * 1024),
            key_release_events: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.send(|out| {
            queue!(
                out,
                terminal::EnterAlternateScreen,
                cursor::Hide,
                terminal::DisableLineWrap
            )
        })
    }

    /// Ask the terminal to report key releases, when it supports that.
    ///
    /// Returns whether release events are now enabled.
    pub fn enable_key_release_events(&mut self) -> Result<bool> {
        if !terminal::supports_keyboard_enhancement()? {
            return Ok(false);
        }
        self.send(|out| {
            queue!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
        })?;
        self.key_release_events = true;
        Ok(true)
    }

    pub fn exit(&mut self) -> Result<()> {
        let pop = mem::take(&mut self.key_release_events);
        self.send(|out| {
            if pop {
                queue!(out, PopKeyboardEnhancementFlags)?;
            }
            queue!(
                out,
                ResetColor,
                SetAttribute(Attribute::Reset),
                terminal::EnableLineWrap,
                cursor::Show,
                terminal::LeaveAlternateScreen
            )
        })?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Forget what is on screen; the next frame is drawn in full.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `frame`, writing only what differs from the previous one.
    ///
    /// `frame` is swapped with the previously shown buffer so both
    /// allocations are recycled. Its contents afterwards are stale.
    pub fn present(&mut self, frame: &mut FrameBuffer) -> Result<()> {
        self.scratch.clear();
        encode_frame_into(self.shown.as_ref(), frame, &mut self.scratch)?;
        self.write_scratch()?;
        if let Some(previous) = self.shown.replace(mem::take(frame)) {
            *frame = previous;
        }
        Ok(())
    }

    fn send(&mut self, encode: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> Result<()> {
        self.scratch.clear();
        encode(&mut self.scratch)?;
        self.write_scratch()
    }

    fn write_scratch(&mut self) -> Result<()> {
        if self.scratch.is_empty() {
            return Ok(());
        }
        self.stdout.write_all(&self.scratch)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode the commands that turn `shown` into `next`. Returns the number of
/// spans written.
///
/// `shown` is ignored when its size differs from `next`.
pub fn encode_frame_into(
    shown: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> io::Result<usize> {
    let shown = shown.filter(|s| s.width() == next.width() && s.height() == next.height());
    if shown.is_none() {
        queue!(out, terminal::Clear(terminal::ClearType::All))?;
    }

    let mut pen = Pen::default();
    let mut spans = 0;
    for (y, row) in next.rows().enumerate() {
        let y = y as u16;
        let old = shown.and_then(|s| s.row(y)).unwrap_or(&[]);
        for span in changed_spans(old, row) {
            queue!(out, cursor::MoveTo(span.start as u16, y))?;
            for cell in &row[span] {
                pen.switch_to(cell.style, out)?;
                queue!(out, Print(cell.ch))?;
            }
            spans += 1;
        }
    }

    if spans > 0 {
        queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
    }
    Ok(spans)
}

/// Maximal column ranges where `next` differs from `old`. Columns missing
/// from `old` always differ.
fn changed_spans<'a>(
    old: &'a [Cell],
    next: &'a [Cell],
) -> impl Iterator<Item = Range<usize>> + 'a {
    let differs = move |x: usize| old.get(x) != next.get(x);
    let mut x = 0;
    std::iter::from_fn(move || {
        let start = (x..next.len()).find(|&i| differs(i))?;
        let end = (start..next.len())
            .find(|&i| !differs(i))
            .unwrap_or(next.len());
        x = end;
        Some(start..end)
    })
}

/// Terminal attributes already in effect, so a run of equal styles costs one
/// set of escape codes.
#[derive(Debug, Default)]
struct Pen {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    weight: Option<Weight>,
}

impl Pen {
    fn switch_to(&mut self, style: CellStyle, out: &mut Vec<u8>) -> io::Result<()> {
        if self.weight != Some(style.weight) {
            // Clears both bold and dim.
            queue!(out, SetAttribute(Attribute::NormalIntensity))?;
            match style.weight {
                Weight::Bold => queue!(out, SetAttribute(Attribute::Bold))?,
                Weight::Dim => queue!(out, SetAttribute(Attribute::Dim))?,
                Weight::Normal => {}
            }
            self.weight = Some(style.weight);
        }
        if self.fg != Some(style.fg) {
            queue!(out, SetForegroundColor(style.fg.into()))?;
            self.fg = Some(style.fg);
        }
        if self.bg != Some(style.bg) {
            queue!(out, SetBackgroundColor(style.bg.into()))?;
            self.bg = Some(style.bg);
        }
        Ok(())
    }
}
