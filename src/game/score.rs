//! Run score and persisted best score.

use crate::core::constants::{BEST_SCORE_KEY, SCOREBOARD_MARGIN};
use crate::game::collision::Rect;
use crate::utils::storage::Storage;

/// Where the post-game scoreboard panel goes and what it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Scoreboard {
    /// Horizontal centre of the panel (world pixels).
    pub center_x: f64,
    /// Top edge of the panel (world pixels).
    pub top: f64,
    pub current: u32,
    pub best: u32,
}

pub struct ScoreTracker {
    value: u32,
    best: u32,
    scoreboard_visible: bool,
    storage: Box<dyn Storage>,
}

impl std::fmt::Debug for ScoreTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreTracker")
            .field("value", &self.value)
            .field("best", &self.best)
            .field("scoreboard_visible", &self.scoreboard_visible)
            .finish_non_exhaustive()
    }
}

impl ScoreTracker {
    /// Read the best score from `storage`; absent or unparsable means 0.
    pub fn new(storage: Box<dyn Storage>) -> Self {
        let best = storage
            .get_item(BEST_SCORE_KEY)
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(0);
        Self {
            value: 0,
            best,
            scoreboard_visible: false,
            storage,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Count one passed pipe pair. Returns the new score.
    pub fn increment(&mut self) -> u32 {
        self.value = self.value.saturating_add(1);
        self.value
    }

    /// `best = max(best, value)`, persisting when it improves.
    /// Returns true if a new best was recorded. Calling it again is a no-op.
    pub fn commit_best(&mut self) -> bool {
        if self.value <= self.best {
            return false;
        }
        self.best = self.value;
        if let Err(e) = self.storage.set_item(BEST_SCORE_KEY, &self.best.to_string()) {
            log::warn!("Could not persist best score {}: {}", self.best, e);
        }
        log::info!("New best score: {}", self.best);
        true
    }

    /// Run ended: record the best score and reveal the scoreboard panel.
    pub fn show_game_over(&mut self) {
        self.commit_best();
        self.scoreboard_visible = true;
    }

    pub fn hide_game_over(&mut self) {
        self.scoreboard_visible = false;
    }

    pub fn scoreboard_visible(&self) -> bool {
        self.scoreboard_visible
    }

    /// Panel placement, centred just below the game-over image at `anchor`.
    pub fn scoreboard(&self, anchor: Rect) -> Option<Scoreboard> {
        if !self.scoreboard_visible {
            return None;
        }
        Some(Scoreboard {
            center_x: anchor.x + anchor.width / 2.0,
            top: anchor.bottom() + SCOREBOARD_MARGIN,
            current: self.value,
            best: self.best,
        })
    }

    /// Back to Ready: commit the best score, then zero the run score.
    pub fn reset(&mut self) {
        self.commit_best();
        self.value = 0;
    }

    /// Forget the stored best score.
    pub fn clear_best(&mut self) {
        self.best = 0;
        if let Err(e) = self.storage.remove_item(BEST_SCORE_KEY) {
            log::warn!("Could not clear best score: {}", e);
        }
    }
}

/// Lay out `value` as digit glyphs, horizontally centred on a surface of
/// `screen_width`.
///
/// The total width assumes every glyph is as wide as the `0` glyph; each
/// glyph then advances by its own width. Returns `(digit, x)` pairs.
pub fn digit_layout(
    value: u32,
    screen_width: f64,
    glyph_width: impl Fn(u8) -> f64,
) -> Vec<(u8, f64)> {
    let digits: Vec<u8> = value.to_string().bytes().map(|b| b - b'0').collect();
    let total_width = digits.len() as f64 * glyph_width(0);
    let mut x = (screen_width - total_width) / 2.0;

    let mut placed = Vec::with_capacity(digits.len());
    for digit in digits {
        placed.push((digit, x));
        x += glyph_width(digit);
    }
    placed
}
