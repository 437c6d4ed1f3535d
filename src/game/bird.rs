//! The bird: gravity, flap impulse, pose, and collision against the world.

use crate::config::GameConfig;
use crate::core::constants::{POSE_DOWN_DEGREES, POSE_UP_DEGREES};
use crate::core::events::{CrashCause, TickEvent};
use crate::core::game_state::GameState;
use crate::game::collision::Rect;
use crate::game::pipes::{PipeField, PipePair};
use crate::game::score::ScoreTracker;

/// Which of the three animation sprites is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirdFrame {
    Up,
    Mid,
    Down,
}

/// Sprite and rotation (radians) for a given velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub frame: BirdFrame,
    pub rotation: f64,
}

/// Pose as a pure function of velocity.
///
/// Falling at least as fast as a flap launches → nose down (+90°); falling
/// or level → neutral; rising → nose up (−25°).
pub fn pose_for(velocity: f64, jump: f64) -> Pose {
    if velocity >= jump {
        Pose {
            frame: BirdFrame::Down,
            rotation: POSE_DOWN_DEGREES.to_radians(),
        }
    } else if velocity >= 0.0 {
        Pose {
            frame: BirdFrame::Mid,
            rotation: 0.0,
        }
    } else {
        Pose {
            frame: BirdFrame::Up,
            rotation: POSE_UP_DEGREES.to_radians(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Bird {
    /// Centre x (fixed).
    pub x: f64,
    /// Centre y; grows downward.
    pub y: f64,
    /// Vertical velocity per tick; positive is downward.
    pub velocity: f64,
    pub rotation: f64,
    pub width: f64,
    pub height: f64,
    pub frame: BirdFrame,
    gravity: f64,
    jump: f64,
    center_y: f64,
    ground_y: f64,
}

impl Bird {
    pub fn new(config: &GameConfig) -> Self {
        let center_y = config.screen_height / 2.0;
        Self {
            x: config.bird_x,
            y: center_y,
            velocity: 0.0,
            rotation: 0.0,
            width: config.bird_width,
            height: config.bird_height,
            frame: BirdFrame::Mid,
            gravity: config.gravity,
            jump: config.jump,
            center_y,
            ground_y: config.ground_y(),
        }
    }

    /// Launch upward. Callers only flap while Playing.
    pub fn flap(&mut self) {
        self.velocity = -self.jump;
        self.frame = BirdFrame::Up;
    }

    /// Bounding box centred on the bird.
    pub fn rect(&self) -> Rect {
        Rect::centered(self.x, self.y, self.width, self.height)
    }

    /// Whether the bird's box overlaps either pipe of `pair`.
    pub fn hits_pair(&self, pipes: &PipeField, pair: &PipePair) -> bool {
        let bird = self.rect();
        bird.overlaps(&pipes.top_rect(pair)) || bird.overlaps(&pipes.bottom_rect(pair))
    }

    /// One tick of bird logic: physics, bounds, pipes, scoring, pose.
    ///
    /// A collision moves `state` from Playing to Over and reveals the
    /// scoreboard; in Over the bird keeps falling but cannot crash again.
    pub fn update(
        &mut self,
        state: &mut GameState,
        pipes: &mut PipeField,
        score: &mut ScoreTracker,
        events: &mut Vec<TickEvent>,
    ) {
        if *state == GameState::Ready {
            self.y = self.center_y;
            self.rotation = 0.0;
            self.frame = BirdFrame::Mid;
            return;
        }

        self.velocity += self.gravity;
        self.y += self.velocity;

        let half_height = self.height / 2.0;
        if self.y - half_height <= 0.0 {
            self.y = half_height;
            crash(state, score, events, CrashCause::Ceiling);
        }
        if self.y + half_height >= self.ground_y {
            self.y = self.ground_y - half_height;
            crash(state, score, events, CrashCause::Ground);
        }

        if pipes.pairs().any(|pair| self.hits_pair(pipes, pair)) {
            crash(state, score, events, CrashCause::Pipe);
        }

        if state.is_playing() {
            self.check_crossings(state, pipes, score, events);
        }

        let pose = pose_for(self.velocity, self.jump);
        self.frame = pose.frame;
        self.rotation = pose.rotation;
    }

    /// Score pairs whose trailing edge has reached the bird, or crash if the
    /// bird's centre is outside the gap at that moment. Each pair is judged once.
    fn check_crossings(
        &self,
        state: &mut GameState,
        pipes: &mut PipeField,
        score: &mut ScoreTracker,
        events: &mut Vec<TickEvent>,
    ) {
        let (width, height, gap) = (pipes.width, pipes.height, pipes.gap);
        for pair in pipes.pairs_mut() {
            if pair.scored || pair.x + width > self.x {
                continue;
            }
            pair.scored = true;

            let gap_top = pair.y + height;
            let gap_bottom = gap_top + gap;
            if self.y < gap_top || self.y > gap_bottom {
                crash(state, score, events, CrashCause::MissedGap);
                return;
            }
            let value = score.increment();
            events.push(TickEvent::Scored { score: value });
        }
    }

    /// Back to the starting pose at screen centre.
    pub fn reset(&mut self) {
        self.velocity = 0.0;
        self.y = self.center_y;
        self.rotation = 0.0;
        self.frame = BirdFrame::Mid;
    }
}

fn crash(
    state: &mut GameState,
    score: &mut ScoreTracker,
    events: &mut Vec<TickEvent>,
    cause: CrashCause,
) {
    if !state.is_playing() {
        return;
    }
    *state = state.on_collision();
    score.show_game_over();
    events.push(TickEvent::Crashed {
        cause,
        score: score.value(),
    });
}
