//! Player token: a light that moves between the five lanes of column 0.

use crate::types::{CENTER_LANE, MAX_LANE, PLAYER_ACTION_PERIOD, PLAYER_BRIGHTNESS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    lane: u8,
    action_period: u32,
    brightness: u8,
}

impl Player {
    /// Player in the center lane with the default period and brightness
    pub fn new() -> Self {
        Self::with_settings(PLAYER_ACTION_PERIOD, PLAYER_BRIGHTNESS)
    }

    /// A zero period would never gate anything; it is treated as 1.
    pub fn with_settings(action_period: u32, brightness: u8) -> Self {
        Self {
            lane: CENTER_LANE,
            action_period: action_period.max(1),
            brightness,
        }
    }

    pub fn lane(&self) -> u8 {
        self.lane
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn action_period(&self) -> u32 {
        self.action_period
    }

    /// True on ticks where the player may read input and move
    pub fn sample_action_tick(&self, n: u64) -> bool {
        n % self.action_period as u64 == 0
    }

    /// Move one lane towards the top; stays put at lane 0
    pub fn move_up(&mut self) {
        if self.lane > 0 {
            self.lane -= 1;
        }
    }

    /// Move one lane towards the bottom; stays put at the last lane
    pub fn move_down(&mut self) {
        if self.lane < MAX_LANE {
            self.lane += 1;
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
