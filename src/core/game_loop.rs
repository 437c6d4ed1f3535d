//! The per-frame driver state shared by the terminal loop and tests.
//!
//! One [`GameContext`] owns every entity. Each frame the driver calls
//! [`GameContext::update`], draws, then [`GameContext::advance_frame`];
//! input is applied between frames through [`GameContext::handle_action`].

use crate::config::GameConfig;
use crate::core::events::{CrashCause, TickEvent};
use crate::core::game_state::GameState;
use crate::game::{Bird, Foreground, PipeField, Rect, ScoreTracker, Scoreboard};
use crate::render::assets::{AssetStore, SpriteId};
use crate::render::scene;
use crate::render::surface::Surface;
use crate::utils::storage::Storage;
use rand::Rng;

pub struct GameContext {
    pub config: GameConfig,
    pub state: GameState,
    pub bird: Bird,
    pub pipes: PipeField,
    pub foreground: Foreground,
    pub score: ScoreTracker,
    /// Frames since launch. Not reset between runs.
    pub frames: u64,
    /// Why the most recent run ended.
    pub last_crash: Option<CrashCause>,
}

impl GameContext {
    pub fn new(config: GameConfig, storage: Box<dyn Storage>) -> Self {
        Self {
            state: GameState::Ready,
            bird: Bird::new(&config),
            pipes: PipeField::new(&config),
            foreground: Foreground::new(&config),
            score: ScoreTracker::new(storage),
            frames: 0,
            last_crash: None,
            config,
        }
    }

    /// Apply the primary action. What it does depends on the state:
    /// Ready starts a run, Playing flaps, Over resets everything to Ready.
    pub fn handle_action(&mut self) -> Vec<TickEvent> {
        let mut events = Vec::new();
        match self.state {
            GameState::Ready => {
                self.state = self.state.on_action();
                events.push(TickEvent::RunStarted);
            }
            GameState::Playing => {
                self.bird.flap();
                events.push(TickEvent::Flapped {
                    velocity: self.bird.velocity,
                });
            }
            GameState::Over => {
                let final_score = self.score.value();
                self.state = self.state.on_action();
                self.bird.reset();
                self.pipes.reset();
                self.score.reset();
                self.score.hide_game_over();
                events.push(TickEvent::RunReset {
                    final_score,
                    best: self.score.best(),
                });
            }
        }
        events
    }

    /// One update pass: bird, then pipes, then ground.
    pub fn update<R: Rng>(&mut self, rng: &mut R) -> Vec<TickEvent> {
        let mut events = Vec::new();
        self.bird.update(
            &mut self.state,
            &mut self.pipes,
            &mut self.score,
            &mut events,
        );
        self.pipes.update(self.state, self.frames, rng, &mut events);
        self.foreground.update(self.state);

        for event in &events {
            if let TickEvent::Crashed { cause, .. } = event {
                self.last_crash = Some(*cause);
            }
        }
        events
    }

    pub fn advance_frame(&mut self) {
        self.frames += 1;
    }

    /// Update then advance the frame counter, for headless driving.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> Vec<TickEvent> {
        let events = self.update(rng);
        self.advance_frame();
        events
    }

    /// Full redraw, back to front.
    pub fn draw(&self, surface: &mut dyn Surface, assets: &AssetStore) {
        scene::draw_backdrop(surface, assets);
        scene::draw_bird(surface, assets, &self.bird);
        scene::draw_pipes(surface, assets, &self.pipes);
        scene::draw_foreground(surface, assets, &self.foreground);
        scene::draw_overlay(surface, assets, self.state);
        if self.state.is_playing() {
            scene::draw_score(surface, assets, self.score.value());
        }
    }

    /// Where the game-over image sits, or the screen centre if it has not
    /// loaded yet.
    pub fn game_over_rect(&self, assets: &AssetStore) -> Rect {
        let (width, height) = (self.config.screen_width, self.config.screen_height);
        scene::overlay_rect(assets, SpriteId::GameOver, width, height)
            .unwrap_or_else(|| Rect::new(width / 2.0, height / 2.0, 0.0, 0.0))
    }

    /// Scoreboard panel placement, present only after a run has ended.
    pub fn scoreboard(&self, assets: &AssetStore) -> Option<Scoreboard> {
        self.score.scoreboard(self.game_over_rect(assets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn context() -> GameContext {
        GameContext::new(GameConfig::default(), Box::new(MemoryStorage::new()))
    }

    #[test]
    fn test_action_cycle() {
        let mut ctx = context();
        assert_eq!(ctx.handle_action(), vec![TickEvent::RunStarted]);
        assert_eq!(ctx.state, GameState::Playing);

        assert_eq!(
            ctx.handle_action(),
            vec![TickEvent::Flapped { velocity: -4.0 }]
        );

        ctx.state = GameState::Over;
        let events = ctx.handle_action();
        assert_eq!(
            events,
            vec![TickEvent::RunReset {
                final_score: 0,
                best: 0
            }]
        );
        assert_eq!(ctx.state, GameState::Ready);
    }

    #[test]
    fn test_ready_tick_moves_nothing() {
        let mut ctx = context();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..300 {
            assert!(ctx.tick(&mut rng).is_empty());
        }
        assert!(ctx.pipes.is_empty());
        assert_eq!(ctx.foreground.x, 0.0);
        assert_eq!(ctx.frames, 300);
    }

    #[test]
    fn test_first_playing_frame_spawns_on_interval() {
        let mut ctx = context();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        ctx.handle_action();
        let events = ctx.tick(&mut rng);
        // frames == 0 is a multiple of the interval
        assert!(matches!(events[0], TickEvent::PipeSpawned { x, .. } if x == 320.0));
        assert_eq!(ctx.pipes.len(), 1);
    }

    #[test]
    fn test_crash_recorded() {
        let mut ctx = context();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        ctx.handle_action();
        ctx.bird.y = 430.0;
        ctx.bird.velocity = 5.0;
        ctx.tick(&mut rng);
        assert_eq!(ctx.state, GameState::Over);
        assert_eq!(ctx.last_crash, Some(CrashCause::Ground));
    }

    #[test]
    fn test_scoreboard_below_game_over_image() {
        let mut ctx = context();
        let assets = AssetStore::load_blocking(None);
        assert!(ctx.scoreboard(&assets).is_none());

        ctx.state = GameState::Playing;
        ctx.score.show_game_over();
        let board = ctx.scoreboard(&assets).unwrap();
        assert_eq!(board.center_x, 160.0);
        assert_eq!(board.top, 217.5 + 45.0 + 10.0);
    }
}
