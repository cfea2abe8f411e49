//! Terminal "LED matrix" module.
//!
//! This is a small, game-oriented rendering layer that stands in for the
//! board's 5x5 display. It renders into a simple cell buffer that can be
//! flushed to a terminal backend, without widget or layout libraries.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Show brightness levels faithfully (dim player, full-bright walls)
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per LED)

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use led_dodge_core as core;
pub use led_dodge_types as types;

pub use fb::{Cell, CellBuffer, CellStyle, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use render_throttle::{grid_fingerprint, RenderThrottle};
pub use renderer::TerminalRenderer;
