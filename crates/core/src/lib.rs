//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the whole LED Dodge simulation: course generation,
//! scrolling, collision and frame composition. It never sleeps, reads
//! sensors or drives a display; those are collaborators reached through the
//! traits in [`ports`] and [`rng`], which makes the core:
//!
//! - **Deterministic**: the same seed (or scripted draws) yields the same course
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: any host that can call `tick` can run it
//! - **Fast**: ticking a round does not allocate
//!
//! # Module Structure
//!
//! - [`frame`]: 5x5 brightness image with max-merge writes
//! - [`player`]: the lane-hopping player token
//! - [`stage`]: procedural course generation and supplied-course validation
//! - [`scroll`]: scroll cursor, visible window, completion
//! - [`game`]: the per-tick state machine
//! - [`icons`]: happy/sad feedback pictures
//! - [`ports`]: input and display seams
//! - [`rng`]: injectable random source and a seedable LCG
//!
//! # Example
//!
//! ```
//! use led_dodge_core::{GameLoop, LatestFrame};
//! use led_dodge_types::{GameStatus, Tilt};
//!
//! let mut game = GameLoop::new(12345);
//! let mut display = LatestFrame::default();
//! let mut level = || Tilt::None;
//!
//! assert_eq!(game.tick(&mut level, &mut display), GameStatus::Running);
//! // The player glows at half brightness in the center lane of column 0.
//! assert_eq!(display.grid()[0][2], 128);
//! ```

pub mod frame;
pub mod game;
pub mod icons;
pub mod player;
pub mod ports;
pub mod rng;
pub mod scroll;
pub mod stage;

pub use led_dodge_types as types;

// Re-export commonly used types for convenience
pub use frame::FrameBuffer;
pub use game::{GameLoop, GameSettings};
pub use icons::Icon;
pub use player::Player;
pub use ports::{DisplaySink, InputSource, LatestFrame};
pub use rng::{RandomSource, SimpleRng};
pub use scroll::ScrollEngine;
pub use stage::{add_margins, is_valid_field, ObstacleField, StageGenerator};
