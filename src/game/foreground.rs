//! Scrolling ground strip. Purely decorative: the ground collision line
//! lives in the bird.

use crate::config::GameConfig;
use crate::core::game_state::GameState;

#[derive(Debug, Clone)]
pub struct Foreground {
    /// Horizontal offset of the first tile.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub dx: f64,
}

impl Foreground {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: 0.0,
            y: config.ground_y(),
            width: config.screen_width,
            height: config.ground_height,
            dx: config.foreground_dx,
        }
    }

    /// Scroll left while Playing, wrapping into `[-width / 2, 0)`.
    pub fn update(&mut self, state: GameState) {
        if state.is_playing() {
            self.x = wrap_offset(self.x - self.dx, self.width / 2.0);
        }
    }

    /// Left edges of the two side-by-side tiles.
    pub fn tile_positions(&self) -> [f64; 2] {
        [self.x, self.x + self.width]
    }
}

/// Floor-modulo wrap of `offset` into `[-period, 0)`.
pub fn wrap_offset(offset: f64, period: f64) -> f64 {
    offset.rem_euclid(period) - period
}
