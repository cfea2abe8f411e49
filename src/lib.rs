//! LED Dodge (workspace facade crate).
//!
//! This package exposes `led_dodge::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`, plus the
//! host [`config`] used by the `led-dodge` binary.

pub mod config;

pub use led_dodge_core as core;
pub use led_dodge_input as input;
pub use led_dodge_term as term;
pub use led_dodge_types as types;
