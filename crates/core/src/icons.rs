//! End-of-round feedback images.

use crate::frame::FrameBuffer;
use crate::types::{GameStatus, GRID_SIZE, LOSE_FEEDBACK_MS, MAX_BRIGHTNESS, WIN_FEEDBACK_MS};

/// Built-in 5x5 pictures shown after a round ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Happy,
    Sad,
}

impl Icon {
    /// Picture for a finished round; `None` while the round is running.
    pub fn for_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Won => Some(Icon::Happy),
            GameStatus::Lost => Some(Icon::Sad),
            GameStatus::Running => None,
        }
    }

    /// How long the host keeps the picture up
    pub fn display_ms(&self) -> u64 {
        match self {
            Icon::Happy => WIN_FEEDBACK_MS,
            Icon::Sad => LOSE_FEEDBACK_MS,
        }
    }

    /// Pattern as it appears on the display, top line first.
    fn pattern(&self) -> [&'static str; GRID_SIZE] {
        match self {
            Icon::Happy => [".....", ".#.#.", ".....", "#...#", ".###."],
            Icon::Sad => [".....", ".#.#.", ".....", ".###.", "#...#"],
        }
    }

    pub fn frame(&self) -> FrameBuffer {
        let mut fb = FrameBuffer::new();
        for (y, line) in self.pattern().iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                if ch == '#' {
                    fb.put_brightness(x, y, MAX_BRIGHTNESS);
                }
            }
        }
        fb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_for_status() {
        assert_eq!(Icon::for_status(GameStatus::Won), Some(Icon::Happy));
        assert_eq!(Icon::for_status(GameStatus::Lost), Some(Icon::Sad));
        assert_eq!(Icon::for_status(GameStatus::Running), None);
    }

    #[test]
    fn test_feedback_durations() {
        assert_eq!(Icon::Sad.display_ms(), 2000);
        assert_eq!(Icon::Happy.display_ms(), 3000);
    }

    #[test]
    fn test_happy_frame_is_transposed_into_columns() {
        let fb = Icon::Happy.frame();
        // Eyes on the second line.
        assert_eq!(fb.get(1, 1), Some(255));
        assert_eq!(fb.get(3, 1), Some(255));
        // Mouth corners curl up.
        assert_eq!(fb.get(0, 3), Some(255));
        assert_eq!(fb.get(4, 3), Some(255));
        assert_eq!(fb.get(2, 4), Some(255));
        assert_eq!(fb.get(0, 4), Some(0));
        assert_eq!(fb.grid().iter().flatten().filter(|&&v| v > 0).count(), 7);
    }

    #[test]
    fn test_sad_frame_mouth_curls_down() {
        let fb = Icon::Sad.frame();
        assert_eq!(fb.get(0, 4), Some(255));
        assert_eq!(fb.get(4, 4), Some(255));
        assert_eq!(fb.get(2, 3), Some(255));
        assert_ne!(fb, Icon::Happy.frame());
    }
}
