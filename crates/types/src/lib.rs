//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no external dependencies, so they can be
//! shared by the simulation core, the input layer and the terminal host.
//!
//! # Display Geometry
//!
//! The display is a fixed 5x5 matrix of brightness-addressable LEDs:
//!
//! - **Columns** (`x`, 0-4): the scroll axis; column 0 is where the player sits
//! - **Lanes** (`y`, 0-4): vertical player positions, 0 is the top
//! - **Brightness**: `u8`, 0 is off and 255 is full
//!
//! A [`BrightnessGrid`] is indexed `grid[x][y]`.
//!
//! # Timing Constants
//!
//! The simulation counts ticks; actors act on multiples of their period:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PLAYER_ACTION_PERIOD` | 50 | Ticks between input samples |
//! | `STAGE_ACTION_PERIOD` | 150 | Ticks between scroll steps |
//! | `DEFAULT_TICK_MS` | 1 | Host pause between ticks |
//! | `LOSE_FEEDBACK_MS` | 2000 | Sad icon display time |
//! | `WIN_FEEDBACK_MS` | 3000 | Happy icon display time |
//!
//! # Stage Shape
//!
//! A course has 4-6 sections. Each section spans `SECTION_ROWS` rows and
//! starts with a wall row that leaves one open lane. One margin block of
//! `MARGIN_ROWS` empty rows leads in, two trail out.
//!
//! # Examples
//!
//! ```
//! use led_dodge_types::{Tilt, GameStatus, GRID_SIZE, CENTER_LANE};
//!
//! assert_eq!(Tilt::from_str("up"), Some(Tilt::Up));
//! assert_eq!(Tilt::Down.as_str(), "down");
//!
//! assert!(GameStatus::Won.is_terminal());
//! assert!(!GameStatus::Running.is_terminal());
//!
//! assert_eq!(GRID_SIZE, 5);
//! assert_eq!(CENTER_LANE, 2);
//! ```

/// Display width and height in LEDs
pub const GRID_SIZE: usize = 5;

/// Highest lane index (bottom of the display)
pub const MAX_LANE: u8 = (GRID_SIZE - 1) as u8;

/// Lane the player starts in
pub const CENTER_LANE: u8 = 2;

/// Full LED brightness
pub const MAX_BRIGHTNESS: u8 = 255;

/// Default self-light of the player token
pub const PLAYER_BRIGHTNESS: u8 = 128;

/// Ticks between player input samples
pub const PLAYER_ACTION_PERIOD: u32 = 50;

/// Ticks between scroll steps
pub const STAGE_ACTION_PERIOD: u32 = 150;

/// Host pause between ticks in milliseconds
pub const DEFAULT_TICK_MS: u64 = 1;

/// Inclusive bounds of the number of wall sections per course
pub const MIN_SECTIONS: u32 = 4;
pub const MAX_SECTIONS: u32 = 6;

/// Rows per generated section (wall, open, narrowing, open)
pub const SECTION_ROWS: usize = 4;

/// Chance, in percent, that a mid-section row narrows the gap lane
pub const NARROW_PERCENT: u32 = 80;

/// Empty rows per margin block
pub const MARGIN_ROWS: usize = 5;

/// How long the sad icon stays up after a collision
pub const LOSE_FEEDBACK_MS: u64 = 2000;

/// How long the happy icon stays up after finishing the course
pub const WIN_FEEDBACK_MS: u64 = 3000;

/// One display column worth of brightness, indexed by lane
pub type Row = [u8; GRID_SIZE];

/// Full display image, indexed `[x][y]`
pub type BrightnessGrid = [Row; GRID_SIZE];

/// An all-dark display image
pub const EMPTY_GRID: BrightnessGrid = [[0; GRID_SIZE]; GRID_SIZE];

/// Tilt reading from the gesture sensor
///
/// - **Up**: the board's logo edge is raised
/// - **Down**: the board's logo edge is lowered
/// - **None**: the board is level (or the gesture is unrecognized)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tilt {
    Up,
    Down,
    #[default]
    None,
}

impl Tilt {
    /// Parse tilt from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use led_dodge_types::Tilt;
    ///
    /// assert_eq!(Tilt::from_str("UP"), Some(Tilt::Up));
    /// assert_eq!(Tilt::from_str("logoDown"), Some(Tilt::Down));
    /// assert_eq!(Tilt::from_str("none"), Some(Tilt::None));
    /// assert_eq!(Tilt::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "logoup" => Some(Tilt::Up),
            "down" | "logodown" => Some(Tilt::Down),
            "none" | "level" => Some(Tilt::None),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Tilt::Up => "up",
            Tilt::Down => "down",
            Tilt::None => "none",
        }
    }
}

/// Lifecycle of a round
///
/// `Won` and `Lost` are terminal: once reached, the round never changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The course is scrolling
    Running,
    /// The window scrolled past the last obstacle
    Won,
    /// The player hit a wall
    Lost,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Running)
    }

    /// Status text shown by hosts
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Running => "RUNNING",
            GameStatus::Won => "YOU WIN",
            GameStatus::Lost => "GAME OVER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_timing_defaults() {
        assert_eq!(PLAYER_ACTION_PERIOD, 50);
        assert_eq!(STAGE_ACTION_PERIOD, 150);
        assert_eq!(PLAYER_BRIGHTNESS, 128);
        assert_eq!(LOSE_FEEDBACK_MS, 2000);
        assert_eq!(WIN_FEEDBACK_MS, 3000);
    }

    #[test]
    fn lanes_cover_the_display() {
        assert_eq!(MAX_LANE as usize + 1, GRID_SIZE);
        assert!(CENTER_LANE <= MAX_LANE);
    }
}
