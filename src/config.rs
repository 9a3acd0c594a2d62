//! Tuning constants for the simulation.
//!
//! Every number the physics, obstacle stream and collision code read lives in
//! `GameConfig`.  The defaults are the shipped tuning; the host may override
//! any subset of them from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// World width in logical units.
    pub width: f32,
    /// World height in logical units.
    pub height: f32,

    // ── Physics ───────────────────────────────────────────────────────────────
    pub gravity: f32,
    /// Weaker gravity used during the grace window after a (re)start.
    pub initial_gravity: f32,
    /// Length of the grace window in ticks.
    pub grace_ticks: u32,
    /// Velocity set by a manual flap (negative = upward).
    pub flap_impulse: f32,
    /// Fraction of `flap_impulse` applied by an auto-flap.
    pub auto_flap_factor: f32,
    /// Ticks between auto-flaps while the flap key is held.
    pub auto_flap_interval: u32,

    // ── Obstacles ─────────────────────────────────────────────────────────────
    pub pipe_width: f32,
    /// Vertical size of the opening in every obstacle.
    pub pipe_gap: f32,
    /// Leftward scroll per tick.
    pub pipe_speed: f32,
    /// Horizontal distance between consecutive obstacles.
    pub pipe_spacing: f32,
    /// X of the first obstacle after a reset.
    pub first_pipe_x: f32,

    // ── Bird ──────────────────────────────────────────────────────────────────
    pub bird_size: f32,
    /// Fixed screen column of the bird's centre.
    pub bird_x: f32,
    /// Ticks per skin animation frame.
    pub anim_ticks_per_frame: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 400.0,
            height: 600.0,
            gravity: 0.18,
            initial_gravity: 0.08,
            grace_ticks: 60,
            flap_impulse: -5.0,
            auto_flap_factor: 0.7,
            auto_flap_interval: 18,
            pipe_width: 60.0,
            pipe_gap: 180.0,
            pipe_speed: 1.2,
            pipe_spacing: 200.0,
            first_pipe_x: 400.0,
            bird_size: 32.0,
            bird_x: 80.0,
            anim_ticks_per_frame: 5,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) TOML document; missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn half_bird(&self) -> f32 {
        self.bird_size / 2.0
    }

    /// Width of the band `gap_top` is drawn from.
    pub fn gap_top_span(&self) -> f32 {
        (self.height - self.pipe_gap - 100.0).max(1.0)
    }
}
