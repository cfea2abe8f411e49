//! TerminalRenderer: paints the LED screen to a real terminal.
//!
//! The screen is a handful of short lines (matrix, status, hints), so updates
//! go a line at a time: a line that differs from the last painted frame is
//! rewritten from its first to its last changed cell. A resize or
//! [`invalidate`](TerminalRenderer::invalidate) repaints everything.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal,
};

use crate::fb::{CellBuffer, CellStyle, Rgb};

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

pub struct TerminalRenderer {
    out: io::Stdout,
    /// What the terminal currently shows.
    shown: Option<CellBuffer>,
    scratch: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            shown: None,
            scratch: Vec::with_capacity(4 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        queue!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        self.out.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        queue!(
            self.out,
            SetAttribute(Attribute::Reset),
            ResetColor,
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint everything on the next [`present`](TerminalRenderer::present).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Paint `cb`, then take it over as the shown frame.
    ///
    /// The caller gets the previous frame back in `cb`; views clear the
    /// buffer before drawing, so it can be reused without cloning.
    pub fn present(&mut self, cb: &mut CellBuffer) -> Result<()> {
        self.scratch.clear();
        match self.shown.as_ref().filter(|shown| same_size(shown, cb)) {
            Some(shown) => encode_changes(shown, cb, &mut self.scratch)?,
            None => encode_frame(cb, &mut self.scratch)?,
        }
        if !self.scratch.is_empty() {
            self.out.write_all(&self.scratch)?;
            self.out.flush()?;
        }

        match &mut self.shown {
            Some(shown) if same_size(shown, cb) => std::mem::swap(shown, cb),
            shown => *shown = Some(cb.clone()),
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn same_size(a: &CellBuffer, b: &CellBuffer) -> bool {
    a.width() == b.width() && a.height() == b.height()
}

/// Clear the screen and paint every line.
fn encode_frame(cb: &CellBuffer, out: &mut Vec<u8>) -> Result<()> {
    queue!(out, terminal::Clear(terminal::ClearType::All))?;
    let mut pen = None;
    for y in 0..cb.height() {
        paint_span(cb, y, 0, cb.width(), out, &mut pen)?;
    }
    finish(out, pen)
}

/// Paint only the changed part of each line. Same-size buffers only.
fn encode_changes(shown: &CellBuffer, next: &CellBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = None;
    for y in 0..next.height() {
        if let Some((from, to)) = changed_span(shown, next, y) {
            paint_span(next, y, from, to, out, &mut pen)?;
        }
    }
    finish(out, pen)
}

/// Columns `[from, to)` covering every cell of line `y` that differs.
fn changed_span(shown: &CellBuffer, next: &CellBuffer, y: u16) -> Option<(u16, u16)> {
    let differs = |x: u16| shown.get(x, y) != next.get(x, y);
    let from = (0..next.width()).find(|&x| differs(x))?;
    let last = (from..next.width()).rev().find(|&x| differs(x))?;
    Some((from, last + 1))
}

fn paint_span(
    cb: &CellBuffer,
    y: u16,
    from: u16,
    to: u16,
    out: &mut Vec<u8>,
    pen: &mut Option<CellStyle>,
) -> Result<()> {
    queue!(out, cursor::MoveTo(from, y))?;
    for x in from..to {
        let cell = cb.get(x, y).unwrap_or_default();
        if *pen != Some(cell.style) {
            set_pen(out, cell.style)?;
            *pen = Some(cell.style);
        }
        queue!(out, Print(cell.ch))?;
    }
    Ok(())
}

fn set_pen(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    // Attribute reset also drops colors, so it goes first.
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetColors(Colors::new(style.fg.into(), style.bg.into()))
    )?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn finish(out: &mut Vec<u8>, pen: Option<CellStyle>) -> Result<()> {
    if pen.is_some() {
        queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    }
    Ok(())
}
