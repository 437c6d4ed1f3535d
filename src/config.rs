//! Tunable game parameters.
//!
//! Every field defaults to the value in [`crate::core::constants`]. A
//! `config.json` in the platform config directory may override any subset.

use crate::core::constants::*;
use crate::utils::persistence::load_json;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Logical surface width in world pixels
    pub screen_width: f64,
    /// Logical surface height in world pixels
    pub screen_height: f64,

    /// Fixed horizontal position of the bird's centre
    pub bird_x: f64,
    pub bird_width: f64,
    pub bird_height: f64,
    /// Velocity added every tick while the bird is airborne
    pub gravity: f64,
    /// Magnitude of the upward velocity a flap sets
    pub jump: f64,

    pub pipe_width: f64,
    /// Vertical clearance between the top and bottom pipe of a pair
    pub pipe_gap: f64,
    /// Upper bound of the spawn offset; spawns land in (2 * max, max]
    pub pipe_max_y_pos: f64,
    /// Leftward pipe speed per tick
    pub pipe_dx: f64,
    /// Ticks between pipe spawns
    pub pipe_spawn_interval: u64,

    pub ground_height: f64,
    /// Leftward ground strip speed per tick
    pub foreground_dx: f64,

    /// Target frame interval for the loop driver
    pub frame_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            bird_x: BIRD_X,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            gravity: GRAVITY,
            jump: JUMP,
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_max_y_pos: PIPE_MAX_Y_POS,
            pipe_dx: PIPE_DX,
            pipe_spawn_interval: PIPE_SPAWN_INTERVAL,
            ground_height: GROUND_HEIGHT,
            foreground_dx: FOREGROUND_DX,
            frame_ms: REALTIME_FRAME_MS,
        }
    }
}

impl GameConfig {
    /// Height of each pipe: half the screen.
    pub fn pipe_height(&self) -> f64 {
        self.screen_height / 2.0
    }

    /// Y coordinate of the ground collision line.
    pub fn ground_y(&self) -> f64 {
        self.screen_height - self.ground_height
    }

    /// Load `config.json` from `path`. Missing → defaults; unreadable or
    /// invalid → defaults with a warning.
    pub fn load_or_default(path: &Path) -> Self {
        match load_json::<GameConfig>(path) {
            Ok(Some(config)) => {
                log::info!("Loaded config from {}", path.display());
                config.sanitized()
            }
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Invalid config {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace values that would break the simulation with their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        let positive = |value: f64| value.is_finite() && value > 0.0;
        if !positive(self.screen_width) || !positive(self.screen_height) {
            log::warn!("Config: screen size must be positive; using defaults");
            self.screen_width = defaults.screen_width;
            self.screen_height = defaults.screen_height;
        }
        if !positive(self.bird_width) || !positive(self.bird_height) {
            log::warn!("Config: bird size must be positive; using defaults");
            self.bird_width = defaults.bird_width;
            self.bird_height = defaults.bird_height;
        }
        if !positive(self.pipe_width) || !positive(self.pipe_gap) || !positive(self.pipe_dx) {
            log::warn!("Config: pipe width, gap and speed must be positive; using defaults");
            self.pipe_width = defaults.pipe_width;
            self.pipe_gap = defaults.pipe_gap;
            self.pipe_dx = defaults.pipe_dx;
        }
        if !self.pipe_max_y_pos.is_finite() {
            self.pipe_max_y_pos = defaults.pipe_max_y_pos;
        }
        if self.pipe_spawn_interval == 0 {
            log::warn!("Config: pipe_spawn_interval must be non-zero; using default");
            self.pipe_spawn_interval = defaults.pipe_spawn_interval;
        }
        if !self.gravity.is_finite() || !self.jump.is_finite() || !self.bird_x.is_finite() {
            self.gravity = defaults.gravity;
            self.jump = defaults.jump;
            self.bird_x = defaults.bird_x;
        }
        if !self.ground_height.is_finite()
            || self.ground_height < 0.0
            || self.ground_height >= self.screen_height
        {
            self.ground_height = defaults.ground_height.min(self.screen_height / 2.0);
        }
        if !self.foreground_dx.is_finite() {
            self.foreground_dx = defaults.foreground_dx;
        }
        if self.frame_ms == 0 {
            self.frame_ms = defaults.frame_ms;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = GameConfig::default();
        assert_eq!(config.screen_width, 320.0);
        assert_eq!(config.gravity, 0.1);
        assert_eq!(config.jump, 4.0);
        assert_eq!(config.pipe_spawn_interval, 150);
        assert_eq!(config.pipe_height(), 240.0);
        assert_eq!(config.ground_y(), 440.0);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "gravity": 0.25 }"#).unwrap();
        assert_eq!(config.gravity, 0.25);
        assert_eq!(config.jump, JUMP);
        assert_eq!(config.pipe_gap, PIPE_GAP);
    }

    #[test]
    fn test_sanitize_rejects_zero_interval_and_sizes() {
        let config = GameConfig {
            pipe_spawn_interval: 0,
            screen_width: 0.0,
            pipe_dx: -1.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config.pipe_spawn_interval, PIPE_SPAWN_INTERVAL);
        assert_eq!(config.screen_width, SCREEN_WIDTH);
        assert_eq!(config.pipe_dx, PIPE_DX);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("flappy-no-such-config-4242.json");
        assert_eq!(GameConfig::load_or_default(&path), GameConfig::default());
    }
}
