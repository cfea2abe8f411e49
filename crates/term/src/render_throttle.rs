//! Redraw gating for hosts that tick much faster than a terminal can paint.

use crate::types::{BrightnessGrid, GameStatus};

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Decide whether to paint a new frame.
    ///
    /// Paints immediately when the fingerprint changed; an unchanged frame is
    /// repainted at most once per `min_static_interval_ms` (to recover from
    /// terminal resizes or stray output).
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        if !self.has_rendered || fingerprint != self.last_fingerprint {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            return true;
        }

        if now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms {
            self.last_render_ms = now_ms;
            return true;
        }

        false
    }

    /// Forget the last frame so the next call always paints.
    pub fn reset(&mut self) {
        self.has_rendered = false;
    }
}

/// Fingerprint of a brightness image plus the round status.
pub fn grid_fingerprint(grid: &BrightnessGrid, status: GameStatus) -> u64 {
    // FNV-1a
    let mut h: u64 = 0xcbf2_9ce4_8422_2325;
    let status_byte = match status {
        GameStatus::Running => 0u8,
        GameStatus::Won => 1,
        GameStatus::Lost => 2,
    };
    for &b in grid.iter().flatten().chain(std::iter::once(&status_byte)) {
        h ^= b as u64;
        h = h.wrapping_mul(0x0000_0100_0000_01b3);
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EMPTY_GRID;

    #[test]
    fn fingerprint_tracks_grid_and_status() {
        let mut g = EMPTY_GRID;
        let a = grid_fingerprint(&g, GameStatus::Running);
        assert_eq!(a, grid_fingerprint(&g, GameStatus::Running));
        assert_ne!(a, grid_fingerprint(&g, GameStatus::Lost));
        g[0][2] = 128;
        assert_ne!(a, grid_fingerprint(&g, GameStatus::Running));
    }

    #[test]
    fn reset_forces_next_render() {
        let mut t = RenderThrottle::new(250);
        assert!(t.should_render(0, 1));
        assert!(!t.should_render(1, 1));
        t.reset();
        assert!(t.should_render(2, 1));
    }
}
