//! Draws each game component onto a [`Surface`].
//!
//! Components are drawn back to front: sky, background, bird, pipes,
//! ground, overlay, score digits. Any sprite that has not finished loading
//! is skipped.

use crate::core::constants::{SCORE_DIGITS_Y, SKY_COLOR};
use crate::core::game_state::GameState;
use crate::game::{digit_layout, Bird, BirdFrame, Foreground, PipeField, Rect};
use crate::render::assets::{AssetStore, SpriteId};
use crate::render::canvas::Rgb;
use crate::render::surface::Surface;

pub const SKY: Rgb = Rgb(SKY_COLOR.0, SKY_COLOR.1, SKY_COLOR.2);

/// Sky fill, then the background stretched over the whole surface.
pub fn draw_backdrop(surface: &mut dyn Surface, assets: &AssetStore) {
    let (width, height) = (surface.width(), surface.height());
    surface.fill_rect(0.0, 0.0, width, height, SKY);
    if let Some(background) = assets.get(SpriteId::Background) {
        surface.draw_image(background, 0.0, 0.0, Some((width, height)));
    }
}

pub fn bird_sprite(frame: BirdFrame) -> SpriteId {
    match frame {
        BirdFrame::Up => SpriteId::BirdUp,
        BirdFrame::Mid => SpriteId::BirdMid,
        BirdFrame::Down => SpriteId::BirdDown,
    }
}

/// Bird centred on its position, rotated about its centre.
pub fn draw_bird(surface: &mut dyn Surface, assets: &AssetStore, bird: &Bird) {
    let Some(sprite) = assets.get(bird_sprite(bird.frame)) else {
        return;
    };
    surface.save();
    surface.translate(bird.x, bird.y);
    surface.rotate(bird.rotation);
    surface.draw_image(
        sprite,
        -bird.width / 2.0,
        -bird.height / 2.0,
        Some((bird.width, bird.height)),
    );
    surface.restore();
}

/// Both pipes of every pair. The top pipe is mirrored so its lip faces the gap.
pub fn draw_pipes(surface: &mut dyn Surface, assets: &AssetStore, pipes: &PipeField) {
    let Some(sprite) = assets.get(SpriteId::Pipe) else {
        return;
    };
    let size = Some((pipes.width, pipes.height));
    for pair in pipes.pairs() {
        let top = pipes.top_rect(pair);
        surface.save();
        surface.translate(top.x, top.bottom());
        surface.scale(1.0, -1.0);
        surface.draw_image(sprite, 0.0, 0.0, size);
        surface.restore();

        let bottom = pipes.bottom_rect(pair);
        surface.draw_image(sprite, bottom.x, bottom.y, size);
    }
}

pub fn draw_foreground(surface: &mut dyn Surface, assets: &AssetStore, ground: &Foreground) {
    let Some(sprite) = assets.get(SpriteId::Ground) else {
        return;
    };
    for x in ground.tile_positions() {
        surface.draw_image(sprite, x, ground.y, Some((ground.width, ground.height)));
    }
}

/// Screen rectangle of an overlay image centred at its intrinsic size.
pub fn overlay_rect(
    assets: &AssetStore,
    id: SpriteId,
    screen_width: f64,
    screen_height: f64,
) -> Option<Rect> {
    let sprite = assets.get(id)?;
    Some(Rect::new(
        (screen_width - sprite.width) / 2.0,
        (screen_height - sprite.height) / 2.0,
        sprite.width,
        sprite.height,
    ))
}

/// "Get ready" while Ready, "game over" while Over, nothing while Playing.
pub fn draw_overlay(surface: &mut dyn Surface, assets: &AssetStore, state: GameState) {
    let id = match state {
        GameState::Ready => SpriteId::GetReady,
        GameState::Over => SpriteId::GameOver,
        GameState::Playing => return,
    };
    let Some(rect) = overlay_rect(assets, id, surface.width(), surface.height()) else {
        return;
    };
    if let Some(sprite) = assets.get(id) {
        surface.draw_image(sprite, rect.x, rect.y, None);
    }
}

/// Current score as digit glyphs centred across the top of the screen.
pub fn draw_score(surface: &mut dyn Surface, assets: &AssetStore, value: u32) {
    let glyph_width = |digit: u8| {
        assets
            .get(SpriteId::Digit(digit))
            .map_or(0.0, |sprite| sprite.width)
    };
    for (digit, x) in digit_layout(value, surface.width(), glyph_width) {
        if let Some(sprite) = assets.get(SpriteId::Digit(digit)) {
            surface.draw_image(sprite, x, SCORE_DIGITS_Y, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::PipePair;
    use crate::render::assets::Sprite;

    /// Records every call instead of rasterising.
    #[derive(Default)]
    struct Recorder {
        ops: Vec<String>,
    }

    impl Surface for Recorder {
        fn width(&self) -> f64 {
            320.0
        }
        fn height(&self) -> f64 {
            480.0
        }
        fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, _color: Rgb) {
            self.ops.push(format!("fill {x} {y} {width} {height}"));
        }
        fn draw_image(&mut self, sprite: &Sprite, x: f64, y: f64, size: Option<(f64, f64)>) {
            let size = match size {
                Some((w, h)) => format!("{w}x{h}"),
                None => "native".to_string(),
            };
            self.ops.push(format!("image {} {x} {y} {size}", sprite.name));
        }
        fn save(&mut self) {
            self.ops.push("save".to_string());
        }
        fn restore(&mut self) {
            self.ops.push("restore".to_string());
        }
        fn translate(&mut self, dx: f64, dy: f64) {
            self.ops.push(format!("translate {dx} {dy}"));
        }
        fn rotate(&mut self, radians: f64) {
            self.ops.push(format!("rotate {radians}"));
        }
        fn scale(&mut self, sx: f64, sy: f64) {
            self.ops.push(format!("scale {sx} {sy}"));
        }
    }

    fn loaded() -> AssetStore {
        AssetStore::load_blocking(None)
    }

    #[test]
    fn test_backdrop_fills_sky_even_without_assets() {
        let mut surface = Recorder::default();
        draw_backdrop(&mut surface, &AssetStore::empty());
        assert_eq!(surface.ops, vec!["fill 0 0 320 480"]);

        let mut surface = Recorder::default();
        draw_backdrop(&mut surface, &loaded());
        assert_eq!(surface.ops[1], "image background 0 0 320x480");
    }

    #[test]
    fn test_bird_drawn_centred_and_rotated() {
        let config = GameConfig::default();
        let mut bird = Bird::new(&config);
        bird.rotation = 0.5;
        let mut surface = Recorder::default();
        draw_bird(&mut surface, &loaded(), &bird);
        assert_eq!(
            surface.ops,
            vec![
                "save",
                "translate 50 240",
                "rotate 0.5",
                "image bird-mid -17 -12 34x24",
                "restore",
            ]
        );
    }

    #[test]
    fn test_top_pipe_is_flipped() {
        let config = GameConfig::default();
        let mut pipes = PipeField::new(&config);
        pipes.push(PipePair::new(100.0, -200.0));
        let mut surface = Recorder::default();
        draw_pipes(&mut surface, &loaded(), &pipes);
        assert_eq!(
            surface.ops,
            vec![
                "save",
                "translate 100 40",
                "scale 1 -1",
                "image pipe 0 0 50x240",
                "restore",
                "image pipe 100 190 50x240",
            ]
        );
    }

    #[test]
    fn test_ground_drawn_twice() {
        let config = GameConfig::default();
        let mut ground = Foreground::new(&config);
        ground.x = -10.0;
        let mut surface = Recorder::default();
        draw_foreground(&mut surface, &loaded(), &ground);
        assert_eq!(
            surface.ops,
            vec!["image ground -10 440 320x40", "image ground 310 440 320x40"]
        );
    }

    #[test]
    fn test_overlay_per_state() {
        let assets = loaded();
        let mut surface = Recorder::default();
        draw_overlay(&mut surface, &assets, GameState::Playing);
        assert!(surface.ops.is_empty());

        draw_overlay(&mut surface, &assets, GameState::Ready);
        assert_eq!(surface.ops, vec!["image get-ready 68 180 native"]);

        let rect = overlay_rect(&assets, SpriteId::GameOver, 320.0, 480.0).unwrap();
        assert_eq!((rect.x, rect.y), (62.5, 217.5));
    }

    #[test]
    fn test_score_digits_centred() {
        let mut surface = Recorder::default();
        draw_score(&mut surface, &loaded(), 42);
        assert_eq!(
            surface.ops,
            vec!["image digit-4 136 50 native", "image digit-2 160 50 native"]
        );
    }

    #[test]
    fn test_nothing_drawn_before_assets_arrive() {
        let config = GameConfig::default();
        let assets = AssetStore::empty();
        let mut surface = Recorder::default();
        draw_bird(&mut surface, &assets, &Bird::new(&config));
        draw_overlay(&mut surface, &assets, GameState::Ready);
        draw_score(&mut surface, &assets, 7);
        assert!(surface.ops.is_empty());
    }
}
