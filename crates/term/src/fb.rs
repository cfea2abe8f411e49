//! Cell buffer and style types for terminal rendering.

/// 24-bit RGB color.
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

    /// Blend from `off` to `self` by `level / 255`.
    pub fn scaled_from(self, off: Rgb, level: u8) -> Rgb {
        let mix = |lo: u8, hi: u8| -> u8 {
            let lo = lo as u32;
            let hi = hi as u32;
            let t = level as u32;
            ((lo * (255 - t) + hi * t) / 255) as u8
        };
        Rgb::new(mix(off.r, self.r), mix(off.g, self.g), mix(off.b, self.b))
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

impl CellStyle {
    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D grid of styled character cells, the terminal's back buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl CellBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the buffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write `s` starting at `(x, y)`, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        for (cx, ch) in (x..self.width).zip(s.chars()) {
            self.put_char(cx, y, ch, style);
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// One text line per row, for tests and debugging.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.cells.chunks(self.width.max(1) as usize) {
            out.extend(row.iter().map(|c| c.ch));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_str_clips_at_right_edge() {
        let mut cb = CellBuffer::new(4, 1);
        cb.put_str(2, 0, "abc", CellStyle::default());
        assert_eq!(cb.to_text(), "  ab\n");
    }

    #[test]
    fn test_out_of_bounds_writes_are_ignored() {
        let mut cb = CellBuffer::new(2, 2);
        cb.put_char(2, 0, 'x', CellStyle::default());
        cb.put_char(0, 2, 'x', CellStyle::default());
        assert_eq!(cb.to_text(), "  \n  \n");
        assert_eq!(cb.get(2, 0), None);
    }

    #[test]
    fn test_resize_keeps_size_in_sync() {
        let mut cb = CellBuffer::new(2, 2);
        cb.resize(3, 4);
        assert_eq!((cb.width(), cb.height()), (3, 4));
        assert!(cb.get(2, 3).is_some());
    }

    #[test]
    fn test_scaled_color_endpoints() {
        let on = Rgb::new(255, 40, 40);
        let off = Rgb::new(40, 0, 0);
        assert_eq!(on.scaled_from(off, 0), off);
        assert_eq!(on.scaled_from(off, 255), on);
        let mid = on.scaled_from(off, 128);
        assert!(mid.r > off.r && mid.r < on.r);
    }
}
