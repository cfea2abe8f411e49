//! GameView: maps a 5x5 brightness image into a terminal cell buffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::fb::{CellBuffer, CellStyle, Rgb};
use crate::types::{BrightnessGrid, GameStatus, GRID_SIZE};

const LED_ON: Rgb = Rgb::new(255, 48, 32);
const LED_OFF: Rgb = Rgb::new(48, 8, 8);
const PANEL_BG: Rgb = Rgb::new(20, 20, 24);

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

/// Draws the LED matrix, a status line and key hints.
pub struct GameView {
    /// LED width in terminal columns.
    cell_w: u16,
    /// LED height in terminal rows.
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
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Bordered matrix size in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        let n = GRID_SIZE as u16;
        (n * self.cell_w + 2, n * self.cell_h + 2)
    }

    /// Render into an existing buffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a buffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        grid: &BrightnessGrid,
        status: GameStatus,
        viewport: Viewport,
        cb: &mut CellBuffer,
    ) {
        cb.resize(viewport.width, viewport.height);
        cb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        // Matrix plus status and hint lines.
        let total_h = frame_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        self.draw_border(cb, start_x, start_y, frame_w, frame_h, border);

        for (x, column) in grid.iter().enumerate() {
            for (y, &level) in column.iter().enumerate() {
                self.draw_led(cb, start_x, start_y, x as u16, y as u16, level);
            }
        }

        let status_style = CellStyle {
            fg: match status {
                GameStatus::Running => Rgb::new(200, 200, 200),
                GameStatus::Won => Rgb::new(120, 230, 120),
                GameStatus::Lost => Rgb::new(240, 90, 90),
            },
            bg: Rgb::new(0, 0, 0),
            bold: status.is_terminal(),
            dim: false,
        };
        let hint_style = CellStyle {
            dim: true,
            ..CellStyle::default()
        };
        let hint = if status.is_terminal() {
            "r restart  q quit"
        } else {
            "up/down tilt  q quit"
        };
        self.draw_centered(cb, start_x, frame_w, start_y + frame_h, status.as_str(), status_style);
        self.draw_centered(cb, start_x, frame_w, start_y + frame_h + 1, hint, hint_style);
    }

    /// Convenience helper that allocates a new buffer.
    pub fn render(&self, grid: &BrightnessGrid, status: GameStatus, viewport: Viewport) -> CellBuffer {
        let mut cb = CellBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, status, viewport, &mut cb);
        cb
    }

    fn draw_border(&self, cb: &mut CellBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        cb.put_char(x, y, '┌', style);
        cb.put_char(x + w - 1, y, '┐', style);
        cb.put_char(x, y + h - 1, '└', style);
        cb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            cb.put_char(x + dx, y, '─', style);
            cb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            cb.put_char(x, y + dy, '│', style);
            cb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_led(&self, cb: &mut CellBuffer, start_x: u16, start_y: u16, x: u16, y: u16, level: u8) {
        let (ch, style) = if level == 0 {
            (
                '·',
                CellStyle {
                    fg: LED_OFF,
                    bg: PANEL_BG,
                    bold: false,
                    dim: true,
                },
            )
        } else {
            (
                '█',
                CellStyle {
                    fg: LED_ON.scaled_from(LED_OFF, level),
                    bg: PANEL_BG,
                    bold: level == u8::MAX,
                    dim: false,
                },
            )
        };
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y * self.cell_h;
        cb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_centered(&self, cb: &mut CellBuffer, start_x: u16, frame_w: u16, y: u16, text: &str, style: CellStyle) {
        let text_w = text.chars().count() as u16;
        let x = if text_w >= frame_w {
            start_x.saturating_sub((text_w - frame_w) / 2)
        } else {
            start_x + (frame_w - text_w) / 2
        };
        cb.put_str(x, y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EMPTY_GRID;

    #[test]
    fn test_led_cells_are_two_columns_wide() {
        let mut grid = EMPTY_GRID;
        grid[0][2] = 128;
        grid[4][0] = 255;

        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let cb = view.render(&grid, GameStatus::Running, Viewport::new(12, 9));

        assert_eq!(cb.get(1, 3).unwrap().ch, '█');
        assert_eq!(cb.get(2, 3).unwrap().ch, '█');
        assert_eq!(cb.get(9, 1).unwrap().ch, '█');
        assert_eq!(cb.get(3, 3).unwrap().ch, '·');
    }

    #[test]
    fn test_brighter_leds_are_redder() {
        let mut grid = EMPTY_GRID;
        grid[0][0] = 128;
        grid[1][0] = 255;

        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let cb = view.render(&grid, GameStatus::Running, Viewport::new(12, 9));

        let half = cb.get(1, 1).unwrap().style.fg;
        let full = cb.get(3, 1).unwrap().style.fg;
        assert!(full.r > half.r);
        assert_eq!(full, LED_ON);
    }
}
