//! Events produced by input handling and each tick.
//!
//! The loop driver logs them; tests assert on them. Game logic never
//! depends on who consumes them.

/// What ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    /// Bird's top edge reached the top of the screen.
    Ceiling,
    /// Bird's bottom edge reached the ground line.
    Ground,
    /// Bird's box overlapped a pipe.
    Pipe,
    /// Bird crossed a pipe's trailing edge outside the gap.
    MissedGap,
}

impl CrashCause {
    pub fn describe(self) -> &'static str {
        match self {
            Self::Ceiling => "flew into the sky",
            Self::Ground => "hit the ground",
            Self::Pipe => "hit a pipe",
            Self::MissedGap => "missed the gap",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    /// Ready → Playing.
    RunStarted,
    /// Flap applied; `velocity` is the new vertical velocity.
    Flapped { velocity: f64 },
    PipeSpawned { x: f64, y: f64 },
    PipeRemoved { x: f64 },
    /// A pair was passed; `score` is the new run score.
    Scored { score: u32 },
    /// Playing → Over.
    Crashed { cause: CrashCause, score: u32 },
    /// Over → Ready. `best` is the committed best score.
    RunReset { final_score: u32, best: u32 },
}

/// Log events at the levels the game uses: run milestones at info,
/// per-pipe chatter at debug.
pub fn log_events(events: &[TickEvent]) {
    for event in events {
        match event {
            TickEvent::RunStarted => log::info!("Run started"),
            TickEvent::Flapped { velocity } => log::trace!("Flap (velocity {velocity:.2})"),
            TickEvent::PipeSpawned { x, y } => log::debug!("Pipe spawned at x={x:.1} y={y:.1}"),
            TickEvent::PipeRemoved { x } => log::debug!("Pipe removed at x={x:.1}"),
            TickEvent::Scored { score } => log::debug!("Scored: {score}"),
            TickEvent::Crashed { cause, score } => {
                log::info!("Game over: {} with score {score}", cause.describe())
            }
            TickEvent::RunReset { final_score, best } => {
                log::info!("Run reset (final score {final_score}, best {best})")
            }
        }
    }
}
