//! Collaborator seams: where the simulation meets sensors and displays.

use crate::types::{BrightnessGrid, Tilt, EMPTY_GRID};

/// Gesture sensor. Polled only on player action ticks.
pub trait InputSource {
    fn sample(&mut self) -> Tilt;
}

/// LED matrix. Receives one full image per rendered tick.
pub trait DisplaySink {
    fn show(&mut self, grid: &BrightnessGrid);
}

/// Any `FnMut() -> Tilt` is an input source; handy for scripted play.
impl<F> InputSource for F
where
    F: FnMut() -> Tilt,
{
    fn sample(&mut self) -> Tilt {
        self()
    }
}

/// Display sink that keeps the most recent image.
///
/// Hosts that draw on their own schedule (e.g. a throttled terminal) read
/// the grid back after each tick.
#[derive(Debug, Clone, Default)]
pub struct LatestFrame {
    grid: BrightnessGrid,
    frames: u64,
}

impl LatestFrame {
    pub fn grid(&self) -> &BrightnessGrid {
        &self.grid
    }

    /// Number of images shown so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn reset(&mut self) {
        self.grid = EMPTY_GRID;
        self.frames = 0;
    }
}

impl DisplaySink for LatestFrame {
    fn show(&mut self, grid: &BrightnessGrid) {
        self.grid = *grid;
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_input_source() {
        let mut script = [Tilt::Up, Tilt::Down].into_iter();
        let mut input = move || script.next().unwrap_or_default();
        assert_eq!(input.sample(), Tilt::Up);
        assert_eq!(input.sample(), Tilt::Down);
        assert_eq!(input.sample(), Tilt::None);
    }

    #[test]
    fn test_latest_frame_overwrites_and_counts() {
        let mut sink = LatestFrame::default();
        let mut g = EMPTY_GRID;
        g[1][1] = 7;
        sink.show(&g);
        g[1][1] = 9;
        sink.show(&g);
        assert_eq!(sink.frames(), 2);
        assert_eq!(sink.grid()[1][1], 9);

        sink.reset();
        assert_eq!(sink.frames(), 0);
        assert_eq!(sink.grid(), &EMPTY_GRID);
    }
}
