//! Game entities: bird, pipe field, ground strip and score.

pub mod bird;
pub mod collision;
pub mod foreground;
pub mod pipes;
pub mod score;

pub use bird::{pose_for, Bird, BirdFrame, Pose};
pub use collision::Rect;
pub use foreground::Foreground;
pub use pipes::{PipeField, PipePair};
pub use score::{digit_layout, ScoreTracker, Scoreboard};
