//! ScrollEngine - the moving 5-row window over an obstacle course.

use crate::frame::FrameBuffer;
use crate::rng::RandomSource;
use crate::stage::{is_valid_field, normalize_field, ObstacleField, StageGenerator};
use crate::types::{BrightnessGrid, EMPTY_GRID, GRID_SIZE, MAX_BRIGHTNESS, STAGE_ACTION_PERIOD};

/// Rows of trailing margin the window must reach before the course counts as done
const FINISH_DISTANCE: usize = 2 * GRID_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollEngine {
    field: ObstacleField,
    cursor: usize,
    action_period: u32,
}

impl ScrollEngine {
    /// Use `supplied` if it passes [`is_valid_field`], otherwise generate a
    /// fresh course from `rng`.
    pub fn new<S, R>(supplied: Option<&[S]>, rng: &mut R) -> Self
    where
        S: AsRef<[u8]>,
        R: RandomSource + ?Sized,
    {
        let field = match supplied {
            Some(rows) if is_valid_field(rows) => normalize_field(rows),
            _ => StageGenerator::new(rng).generate(),
        };
        Self::from_field(field)
    }

    /// Scroll over an already built course, no validation.
    pub fn from_field(field: ObstacleField) -> Self {
        Self {
            field,
            cursor: 0,
            action_period: STAGE_ACTION_PERIOD,
        }
    }

    /// A zero period is treated as 1.
    pub fn with_action_period(mut self, action_period: u32) -> Self {
        self.action_period = action_period.max(1);
        self
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.field.len()
    }

    pub fn is_empty(&self) -> bool {
        self.field.is_empty()
    }

    pub fn field(&self) -> &[[u8; GRID_SIZE]] {
        &self.field
    }

    pub fn action_period(&self) -> u32 {
        self.action_period
    }

    pub fn sample_action_tick(&self, n: u64) -> bool {
        n % self.action_period as u64 == 0
    }

    /// Copy of rows `[cursor, cursor + 5)`. Rows past the end read as empty.
    pub fn visible_window(&self) -> BrightnessGrid {
        let mut window = EMPTY_GRID;
        let rows = self.field.iter().skip(self.cursor);
        for (dst, src) in window.iter_mut().zip(rows) {
            *dst = *src;
        }
        window
    }

    /// Scroll one row, stopping once the window touches the last row.
    pub fn advance(&mut self) {
        if self.cursor + GRID_SIZE < self.field.len() {
            self.cursor += 1;
        }
    }

    /// The window has scrolled into the final margin block.
    pub fn is_finished(&self) -> bool {
        self.cursor + FINISH_DISTANCE >= self.field.len()
    }

    /// Binarize a window: any obstacle lights at full brightness.
    pub fn to_obstacle_frame(window: &BrightnessGrid) -> FrameBuffer {
        let mut grid = EMPTY_GRID;
        for (dst, src) in grid.iter_mut().flatten().zip(window.iter().flatten()) {
            *dst = if *src == 0 { 0 } else { MAX_BRIGHTNESS };
        }
        FrameBuffer::from_grid(grid)
    }

    /// Current window as a binarized frame.
    pub fn obstacle_frame(&self) -> FrameBuffer {
        Self::to_obstacle_frame(&self.visible_window())
    }
}
