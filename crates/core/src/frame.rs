//! FrameBuffer - the 5x5 brightness image handed to the display each tick.

use crate::ports::DisplaySink;
use crate::types::{BrightnessGrid, EMPTY_GRID, GRID_SIZE, MAX_BRIGHTNESS};

/// 5x5 brightness image, indexed `[x][y]`.
///
/// Writes through [`put_brightness`](FrameBuffer::put_brightness) only ever
/// brighten a cell; [`clear`](FrameBuffer::clear) is the only way to dim it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FrameBuffer {
    grid: BrightnessGrid,
}

impl FrameBuffer {
    /// Create a dark frame
    pub fn new() -> Self {
        Self { grid: EMPTY_GRID }
    }

    /// Wrap an already well-formed grid.
    pub fn from_grid(grid: BrightnessGrid) -> Self {
        Self { grid }
    }

    /// Build a frame from loosely shaped rows.
    ///
    /// The rows are accepted only when there are exactly 5 of them and each
    /// holds exactly 5 values. Anything else yields a dark frame.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        if !is_valid_grid(rows) {
            return Self::new();
        }
        let mut grid = EMPTY_GRID;
        for (dst, src) in grid.iter_mut().zip(rows) {
            dst.copy_from_slice(src.as_ref());
        }
        Self { grid }
    }

    pub fn grid(&self) -> &BrightnessGrid {
        &self.grid
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.grid.get(x).and_then(|col| col.get(y)).copied()
    }

    pub fn clear(&mut self) {
        self.grid = EMPTY_GRID;
    }

    /// Brighten cell `(x, y)` to `brightness` if it is currently dimmer.
    ///
    /// Out-of-range coordinates are ignored.
    pub fn put_brightness(&mut self, x: usize, y: usize, brightness: u8) {
        if let Some(cell) = self.grid.get_mut(x).and_then(|col| col.get_mut(y)) {
            if *cell < brightness {
                *cell = brightness;
            }
        }
    }

    /// Light cell `(x, y)` at full brightness.
    pub fn put(&mut self, x: usize, y: usize) {
        self.put_brightness(x, y, MAX_BRIGHTNESS);
    }

    /// Push the image to a display.
    pub fn render<D: DisplaySink + ?Sized>(&self, sink: &mut D) {
        sink.show(&self.grid);
    }
}

fn is_valid_grid<R: AsRef<[u8]>>(rows: &[R]) -> bool {
    rows.len() == GRID_SIZE && rows.iter().all(|r| r.as_ref().len() == GRID_SIZE)
}
