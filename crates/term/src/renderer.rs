//! TerminalRenderer: flushes framebuffers to a terminal.
//!
//! The first frame after `enter`, a resize or `invalidate` is written in full.
//! Later frames only rewrite the horizontal runs of cells that changed since
//! the previous frame, which keeps a 10 ms game loop cheap on slow terminals.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

const TITLE: &str = "Tower Crane";

/// Owns the output stream plus the last frame written to it.
pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    prev: Option<FrameBuffer>,
    buf: Vec<u8>,
    /// Raw mode and the alternate screen are active.
    entered: bool,
    frames: u64,
    last_frame_bytes: usize,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Render into any writer. Raw mode is only touched by `enter`/`exit`.
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            prev: None,
            buf: Vec::with_capacity(32 * 1024),
            entered: false,
            frames: 0,
            last_frame_bytes: 0,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.entered = true;
        self.prev = None;

        self.buf.clear();
        self.buf.queue(terminal::SetTitle(TITLE))?;
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;

        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Force the next draw to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Number of frames flushed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Bytes written for the most recent frame.
    pub fn last_frame_bytes(&self) -> usize {
        self.last_frame_bytes
    }

    /// Draw `fb`, then swap it with the renderer's previous frame.
    ///
    /// On return `fb` holds stale contents of the right size, ready to be
    /// redrawn by the caller. No framebuffer is cloned.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.prev.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        self.flush_buf()?;

        self.frames += 1;
        self.last_frame_bytes = self.buf.len();

        std::mem::swap(&mut prev, fb);
        self.prev = Some(prev);
        Ok(())
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Emits style changes only when the style actually differs.
struct StyleTracker {
    current: Option<CellStyle>,
}

impl StyleTracker {
    fn new() -> Self {
        Self { current: None }
    }

    fn set(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        if self.current == Some(style) {
            return Ok(());
        }
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(SetForegroundColor(to_color(style.fg)))?;
        out.queue(SetBackgroundColor(to_color(style.bg)))?;
        if style.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        self.current = Some(style);
        Ok(())
    }

    fn finish(self, out: &mut Vec<u8>) -> Result<()> {
        if self.current.is_some() {
            out.queue(ResetColor)?;
            out.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

/// Encode a whole frame into `out` without touching the terminal.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut style = StyleTracker::new();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            style.set(out, cell.style)?;
            out.queue(Print(cell.ch))?;
        }
    }
    style.finish(out)
}

/// Encode only the cells of `next` that differ from `prev`.
///
/// Both frames must have the same size; anything else is encoded in full.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return encode_full_into(next, out);
    }

    let mut style = StyleTracker::new();
    for y in 0..next.height() {
        let mut x = 0;
        while let Some((start, len)) = next_changed_run(prev, next, y, x) {
            out.queue(cursor::MoveTo(start, y))?;
            for cx in start..start + len {
                let cell = next.get(cx, y).unwrap_or_default();
                style.set(out, cell.style)?;
                out.queue(Print(cell.ch))?;
            }
            x = start + len;
        }
    }
    style.finish(out)
}

/// First run of differing cells in row `y` at or after column `from`.
fn next_changed_run(prev: &FrameBuffer, next: &FrameBuffer, y: u16, from: u16) -> Option<(u16, u16)> {
    let w = next.width();
    let differs = |x: u16| prev.get(x, y) != next.get(x, y);

    let start = (from..w).find(|&x| differs(x))?;
    let end = (start + 1..w).find(|&x| !differs(x)).unwrap_or(w);
    Some((start, end - start))
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
