//! Procedural pipe field: fixed-cadence spawning, scrolling and FIFO removal.

use crate::config::GameConfig;
use crate::core::events::TickEvent;
use crate::core::game_state::GameState;
use crate::game::collision::Rect;
use rand::Rng;
use std::collections::VecDeque;

/// One top + bottom obstacle sharing an x position.
#[derive(Debug, Clone, PartialEq)]
pub struct PipePair {
    /// Left edge (float for smooth scrolling).
    pub x: f64,
    /// Top edge of the top pipe; usually above the screen.
    pub y: f64,
    /// Whether the bird has already scored this pair.
    pub scored: bool,
}

impl PipePair {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, scored: false }
    }
}

/// Ordered collection of pipe pairs, oldest (leftmost) first.
#[derive(Debug, Clone)]
pub struct PipeField {
    pairs: VecDeque<PipePair>,
    pub width: f64,
    pub height: f64,
    pub gap: f64,
    pub max_y_pos: f64,
    pub dx: f64,
    pub spawn_interval: u64,
    spawn_x: f64,
}

impl PipeField {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pairs: VecDeque::new(),
            width: config.pipe_width,
            height: config.pipe_height(),
            gap: config.pipe_gap,
            max_y_pos: config.pipe_max_y_pos,
            dx: config.pipe_dx,
            spawn_interval: config.pipe_spawn_interval,
            spawn_x: config.screen_width,
        }
    }

    /// Advance the field by one tick. Does nothing unless Playing.
    ///
    /// `frames` is the loop's frame counter; a pair spawns whenever it is a
    /// multiple of the spawn interval.
    pub fn update<R: Rng>(
        &mut self,
        state: GameState,
        frames: u64,
        rng: &mut R,
        events: &mut Vec<TickEvent>,
    ) {
        if !state.is_playing() {
            return;
        }

        if frames % self.spawn_interval == 0 {
            let pair = self.spawn(rng);
            events.push(TickEvent::PipeSpawned {
                x: pair.x,
                y: pair.y,
            });
        }

        for pair in &mut self.pairs {
            pair.x -= self.dx;
        }

        // Pairs never overtake each other, so off-screen ones are always at the front.
        while let Some(front) = self.pairs.front() {
            if front.x + self.width > 0.0 {
                break;
            }
            let x = front.x;
            self.pairs.pop_front();
            events.push(TickEvent::PipeRemoved { x });
        }
    }

    /// Append a pair at the right edge with a random vertical offset in
    /// `(2 * max_y_pos, max_y_pos]`.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R) -> PipePair {
        let y = self.max_y_pos * (rng.gen::<f64>() + 1.0);
        let pair = PipePair::new(self.spawn_x, y);
        self.pairs.push_back(pair.clone());
        pair
    }

    /// Insert a pair at an explicit position, keeping x order.
    pub fn push(&mut self, pair: PipePair) {
        self.pairs.push_back(pair);
    }

    pub fn reset(&mut self) {
        self.pairs.clear();
    }

    pub fn pairs(&self) -> impl Iterator<Item = &PipePair> {
        self.pairs.iter()
    }

    pub fn pairs_mut(&mut self) -> impl Iterator<Item = &mut PipePair> {
        self.pairs.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Rectangle of the top pipe: `[y, y + height)`.
    pub fn top_rect(&self, pair: &PipePair) -> Rect {
        Rect::new(pair.x, pair.y, self.width, self.height)
    }

    /// Rectangle of the bottom pipe: `[y + height + gap, y + 2 * height + gap)`.
    pub fn bottom_rect(&self, pair: &PipePair) -> Rect {
        Rect::new(pair.x, self.gap_bottom(pair), self.width, self.height)
    }

    /// Y of the bottom pipe's top edge (lower bound of the gap).
    pub fn gap_bottom(&self, pair: &PipePair) -> f64 {
        pair.y + self.height + self.gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn field() -> PipeField {
        PipeField::new(&GameConfig::default())
    }

    #[test]
    fn test_no_update_unless_playing() {
        let mut pipes = field();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut events = Vec::new();
        pipes.push(PipePair::new(100.0, -200.0));

        pipes.update(GameState::Ready, 0, &mut rng, &mut events);
        pipes.update(GameState::Over, 150, &mut rng, &mut events);

        assert_eq!(pipes.len(), 1);
        assert_eq!(pipes.pairs().next().unwrap().x, 100.0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_spawn_on_interval_and_moves_same_tick() {
        let mut pipes = field();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut events = Vec::new();

        pipes.update(GameState::Playing, 0, &mut rng, &mut events);
        assert_eq!(pipes.len(), 1);
        assert_eq!(pipes.pairs().next().unwrap().x, 318.0);
        assert!(matches!(events[0], TickEvent::PipeSpawned { x, .. } if x == 320.0));

        pipes.update(GameState::Playing, 1, &mut rng, &mut events);
        assert_eq!(pipes.len(), 1);
    }

    #[test]
    fn test_spawn_offset_range() {
        let mut pipes = field();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..500 {
            let y = pipes.spawn(&mut rng).y;
            assert!(y > -300.0 && y <= -150.0, "y out of range: {y}");
        }
    }

    #[test]
    fn test_front_removed_once_off_screen() {
        let mut pipes = field();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut events = Vec::new();
        pipes.push(PipePair::new(-47.0, -200.0));
        pipes.push(PipePair::new(100.0, -200.0));

        // -47 -> -49: right edge at 1, still visible
        pipes.update(GameState::Playing, 1, &mut rng, &mut events);
        assert_eq!(pipes.len(), 2);

        // -49 -> -51: right edge at -1, removed
        pipes.update(GameState::Playing, 2, &mut rng, &mut events);
        assert_eq!(pipes.len(), 1);
        assert_eq!(pipes.pairs().next().unwrap().x, 96.0);
        assert!(events.contains(&TickEvent::PipeRemoved { x: -51.0 }));
    }

    #[test]
    fn test_removed_exactly_at_zero_right_edge() {
        let mut pipes = field();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut events = Vec::new();
        pipes.push(PipePair::new(-48.0, -200.0));

        pipes.update(GameState::Playing, 1, &mut rng, &mut events);
        assert!(pipes.is_empty());
    }

    #[test]
    fn test_pipe_rects() {
        let pipes = field();
        let pair = PipePair::new(200.0, -200.0);
        assert_eq!(pipes.top_rect(&pair), Rect::new(200.0, -200.0, 50.0, 240.0));
        assert_eq!(pipes.bottom_rect(&pair), Rect::new(200.0, 190.0, 50.0, 240.0));
        assert_eq!(pipes.gap_bottom(&pair), 190.0);
    }

    #[test]
    fn test_reset_clears() {
        let mut pipes = field();
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        pipes.spawn(&mut rng);
        pipes.spawn(&mut rng);
        pipes.reset();
        assert!(pipes.is_empty());
    }
}
