//! Stage generation - procedural obstacle courses
//!
//! A course is a sequence of rows, each one display column wide. Rows are
//! grouped in sections of four:
//!
//! ```text
//! row 0  wall      every lane blocked except the gap lane
//! row 1  open
//! row 2  narrow    the gap lane itself is blocked 80% of the time
//! row 3  open
//! ```
//!
//! A course has `(sections - 1) * 4` generated rows, wrapped as
//! `margin + course + margin + margin` where a margin is five empty rows.

use crate::rng::RandomSource;
use crate::types::{
    Row, GRID_SIZE, MARGIN_ROWS, MAX_LANE, MAX_SECTIONS, MIN_SECTIONS, NARROW_PERCENT,
    SECTION_ROWS,
};

/// Marker for a blocked lane in a generated row
pub const WALL: u8 = 1;

const EMPTY_ROW: Row = [0; GRID_SIZE];

/// Full scrollable course, margins included.
pub type ObstacleField = Vec<Row>;

/// Builds courses from an injected random source.
#[derive(Debug)]
pub struct StageGenerator<'a, R: RandomSource + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: RandomSource + ?Sized> StageGenerator<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }

    /// Generate a complete course with margins.
    pub fn generate(&mut self) -> ObstacleField {
        let sections = self.rng.uniform_int(MIN_SECTIONS, MAX_SECTIONS) as usize;
        let body = self.generate_body(sections);
        add_margins(&body)
    }

    /// Generate the obstacle rows only.
    pub fn generate_body(&mut self, sections: usize) -> ObstacleField {
        let rows = sections.saturating_sub(1) * SECTION_ROWS;
        let mut body = Vec::with_capacity(rows);
        // Only read before the first wall row assigns it.
        let mut gap_lane = 0usize;

        for x in 0..rows {
            let mut row = EMPTY_ROW;
            if x % SECTION_ROWS == 0 {
                gap_lane = self.rng.uniform_int(0, MAX_LANE as u32) as usize;
                for (lane, cell) in row.iter_mut().enumerate() {
                    if lane != gap_lane {
                        *cell = WALL;
                    }
                }
            } else if x % 2 == 0 && self.rng.uniform_int(0, 100) <= NARROW_PERCENT {
                if let Some(cell) = row.get_mut(gap_lane) {
                    *cell = WALL;
                }
            }
            body.push(row);
        }
        body
    }
}

/// Wrap a course body in one leading and two trailing empty margin blocks.
pub fn add_margins(body: &[Row]) -> ObstacleField {
    let mut field = Vec::with_capacity(body.len() + 3 * MARGIN_ROWS);
    field.extend(std::iter::repeat(EMPTY_ROW).take(MARGIN_ROWS));
    field.extend_from_slice(body);
    field.extend(std::iter::repeat(EMPTY_ROW).take(2 * MARGIN_ROWS));
    field
}

/// Validity check for a supplied course.
///
/// Scans rows until the first one whose length is not 5; the course is
/// valid only if that row is the last one. A course made entirely of
/// 5-wide rows is therefore rejected. Known quirk, kept as is.
pub fn is_valid_field<R: AsRef<[u8]>>(rows: &[R]) -> bool {
    let stop = rows
        .iter()
        .position(|r| r.as_ref().len() != GRID_SIZE)
        .unwrap_or(rows.len());
    rows.len().checked_sub(1) == Some(stop)
}

/// Copy supplied rows into fixed-width rows, zero-padding or truncating.
pub(crate) fn normalize_field<R: AsRef<[u8]>>(rows: &[R]) -> ObstacleField {
    rows.iter()
        .map(|r| {
            let mut row = EMPTY_ROW;
            for (dst, src) in row.iter_mut().zip(r.as_ref()) {
                *dst = *src;
            }
            row
        })
        .collect()
}
