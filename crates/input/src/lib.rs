//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Tilt`] readings and provides a
//! held-tilt handler that plugs into the core as an
//! [`InputSource`](crate::core::InputSource), including on terminals without
//! key-release events.

pub mod handler;
pub mod map;

pub use led_dodge_core as core;
pub use led_dodge_types as types;

pub use handler::TiltHandler;
pub use map::{handle_key_event, is_restart, map_key, should_quit};
