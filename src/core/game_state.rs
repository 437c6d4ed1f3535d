//! The three-state machine every other component consults.

use serde::{Deserialize, Serialize};

/// Which phase of a run the game is in.
///
/// ```text
/// Ready --input--> Playing --collision--> Over --input--> Ready
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameState {
    /// Bird hovers at the centre, waiting for the first press.
    #[default]
    Ready,
    /// Physics, scrolling and scoring are live.
    Playing,
    /// The bird crashed. It keeps falling until it hits the ground.
    Over,
}

impl GameState {
    /// State reached when the action key is pressed.
    ///
    /// Playing stays Playing: a press during a run is a flap, not a transition.
    pub fn on_action(self) -> Self {
        match self {
            Self::Ready => Self::Playing,
            Self::Playing => Self::Playing,
            Self::Over => Self::Ready,
        }
    }

    /// State reached when a collision is detected. Only Playing can crash.
    pub fn on_collision(self) -> Self {
        match self {
            Self::Playing => Self::Over,
            other => other,
        }
    }

    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }
}
