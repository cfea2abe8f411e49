//! Host configuration: environment variables, then command-line flags.
//!
//! | Variable | Flag | Default |
//! |----------|------|---------|
//! | `LED_DODGE_SEED` | `--seed N` | clock-derived |
//! | `LED_DODGE_TICK_MS` | `--tick-ms N` | 1 |
//! | `LED_DODGE_PLAYER_PERIOD` | `--player-period N` | 50 |
//! | `LED_DODGE_STAGE_PERIOD` | `--stage-period N` | 150 |
//! | `LED_DODGE_BRIGHTNESS` | `--brightness N` | 128 |
//! | `LED_DODGE_TILT_HOLD_MS` | `--tilt-hold-ms N` | 60 |
//!
//! Unparsable environment values fall back to the default; bad flags are errors.

use std::env;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::core::GameSettings;
use crate::types::{DEFAULT_TICK_MS, PLAYER_ACTION_PERIOD, PLAYER_BRIGHTNESS, STAGE_ACTION_PERIOD};

const DEFAULT_TILT_HOLD_MS: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Course seed; `None` picks one from the clock.
    pub seed: Option<u32>,
    pub tick_ms: u64,
    pub player_period: u32,
    pub stage_period: u32,
    pub player_brightness: u8,
    pub tilt_hold_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: DEFAULT_TICK_MS,
            player_period: PLAYER_ACTION_PERIOD,
            stage_period: STAGE_ACTION_PERIOD,
            player_brightness: PLAYER_BRIGHTNESS,
            tilt_hold_ms: DEFAULT_TILT_HOLD_MS,
        }
    }
}

impl Config {
    /// Environment, then `args` (without the program name).
    pub fn load(args: &[String]) -> Result<Self> {
        let mut config = Self::from_env();
        config.apply_args(args)?;
        Ok(config)
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
            lookup(key).and_then(|s| s.trim().parse().ok())
        }

        let defaults = Self::default();
        let non_zero = |v: &u32| *v > 0;
        Self {
            seed: parsed(&lookup, "LED_DODGE_SEED"),
            tick_ms: parsed(&lookup, "LED_DODGE_TICK_MS").unwrap_or(defaults.tick_ms),
            player_period: parsed(&lookup, "LED_DODGE_PLAYER_PERIOD")
                .filter(non_zero)
                .unwrap_or(defaults.player_period),
            stage_period: parsed(&lookup, "LED_DODGE_STAGE_PERIOD")
                .filter(non_zero)
                .unwrap_or(defaults.stage_period),
            player_brightness: parsed(&lookup, "LED_DODGE_BRIGHTNESS")
                .unwrap_or(defaults.player_brightness),
            tilt_hold_ms: parsed(&lookup, "LED_DODGE_TILT_HOLD_MS")
                .unwrap_or(defaults.tilt_hold_ms),
        }
    }

    /// Apply command-line flags on top of the current values.
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut it = args.iter();
        while let Some(flag) = it.next() {
            let mut value = || {
                it.next()
                    .ok_or_else(|| anyhow!("led-dodge: missing value for {}", flag))
            };
            match flag.as_str() {
                "--seed" => self.seed = Some(parse_flag(flag, value()?)?),
                "--tick-ms" => self.tick_ms = parse_flag(flag, value()?)?,
                "--player-period" => self.player_period = parse_period(flag, value()?)?,
                "--stage-period" => self.stage_period = parse_period(flag, value()?)?,
                "--brightness" => self.player_brightness = parse_flag(flag, value()?)?,
                "--tilt-hold-ms" => self.tilt_hold_ms = parse_flag(flag, value()?)?,
                other => return Err(anyhow!("led-dodge: unknown argument: {}", other)),
            }
        }
        Ok(())
    }

    pub fn settings(&self) -> GameSettings {
        GameSettings {
            player_period: self.player_period,
            stage_period: self.stage_period,
            player_brightness: self.player_brightness,
        }
    }

    /// Configured seed, or one derived from the wall clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

fn parse_flag<T: FromStr>(flag: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| anyhow!("led-dodge: invalid {} value: {}", flag, value))
}

fn parse_period(flag: &str, value: &str) -> Result<u32> {
    match parse_flag(flag, value)? {
        0 => Err(anyhow!("led-dodge: {} must be at least 1", flag)),
        period => Ok(period),
    }
}
