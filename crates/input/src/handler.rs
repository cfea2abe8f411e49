//! Held-tilt input handler for terminal environments.
//!
//! A real tilt sensor reports a state, not events. The handler turns key
//! presses into that state and auto-releases it after a timeout, since many
//! terminals never send key release events.
//!
//! Each press (or auto-repeat) is seen by exactly one sample: after the game
//! reads a tilt, the board reads level until the next key event. Holding a
//! key therefore moves the player at the terminal's repeat rate.

use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;

use crate::core::InputSource;
use crate::map::handle_key_event;
use crate::types::Tilt;

// Unsampled presses older than this are dropped.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 60;

/// Tracks which way the board is currently tilted.
#[derive(Debug, Clone)]
pub struct TiltHandler {
    held: Tilt,
    /// A key event arrived since the last sample.
    fresh: bool,
    last_key_time: Instant,
    key_release_timeout_ms: u32,
}

impl TiltHandler {
    pub fn new() -> Self {
        Self {
            held: Tilt::None,
            fresh: false,
            last_key_time: Instant::now(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Tilt currently held, without applying the release timeout
    pub fn held(&self) -> Tilt {
        self.held
    }

    /// Returns the new tilt when the key changed it.
    ///
    /// Repeats of the held key re-arm it for the next sample.
    pub fn handle_key_press(&mut self, key: KeyEvent) -> Option<Tilt> {
        let tilt = handle_key_event(key)?;
        self.last_key_time = Instant::now();
        self.fresh = true;
        if self.held == tilt {
            None
        } else {
            self.held = tilt;
            Some(tilt)
        }
    }

    pub fn handle_key_release(&mut self, key: KeyEvent) {
        if handle_key_event(key) == Some(self.held) {
            self.held = Tilt::None;
            self.fresh = false;
        }
    }

    /// Auto-release when the terminal does not emit release events.
    pub fn update(&mut self) {
        let timeout = Duration::from_millis(self.key_release_timeout_ms as u64);
        if self.held != Tilt::None && self.last_key_time.elapsed() > timeout {
            self.held = Tilt::None;
            self.fresh = false;
        }
    }

    pub fn reset(&mut self) {
        self.held = Tilt::None;
        self.fresh = false;
        self.last_key_time = Instant::now();
    }
}

impl Default for TiltHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TiltHandler {
    fn sample(&mut self) -> Tilt {
        self.update();
        if !self.fresh {
            return Tilt::None;
        }
        self.fresh = false;
        self.held
    }
}
