//! Terminal presentation: the scaled play field, status bar and scoreboard.

pub mod game_common;
pub mod scoreboard;

use crate::core::game_loop::GameContext;
use crate::core::game_state::GameState;
use crate::render::assets::AssetStore;
use crate::render::canvas::{CanvasView, PixelCanvas};
use game_common::{centered, create_game_layout, render_status_bar};
use ratatui::{style::Color, Frame};
use scoreboard::{panel_area, render_scoreboard};

const CONTROLS: [(&str, &str); 2] = [("[Space]", "Flap"), ("[Q]", "Quit")];

/// Draw one full frame of the game.
pub fn draw_game(frame: &mut Frame, ctx: &GameContext, assets: &AssetStore) {
    let area = frame.size();
    let layout = create_game_layout(frame, area, " Flappy Bird ", Color::Cyan);
    let content = layout.content;
    if content.width == 0 || content.height == 0 {
        return;
    }

    let mut canvas = PixelCanvas::fit(
        ctx.config.screen_width,
        ctx.config.screen_height,
        content.width,
        content.height,
    );
    ctx.draw(&mut canvas, assets);

    let (cols, rows) = canvas.cell_size();
    let field = centered(content, cols, rows);
    frame.render_widget(CanvasView::new(&canvas), field);

    if let Some(board) = ctx.scoreboard(assets) {
        let (px, py) = canvas.world_to_pixel(board.center_x, board.top);
        let col = field.x.saturating_add(px.max(0.0) as u16);
        let row = field.y.saturating_add((py.max(0.0) / 2.0) as u16);
        let area = panel_area(col, row, content);
        render_scoreboard(frame, area, &board, ctx.last_crash);
    }

    let (text, color) = status_line(ctx, assets);
    render_status_bar(frame, layout.status_bar, &text, color, &CONTROLS);
}

fn status_line(ctx: &GameContext, assets: &AssetStore) -> (String, Color) {
    let (mut text, color) = match ctx.state {
        GameState::Ready => (
            format!("Get ready! Press Space to start (best {})", ctx.score.best()),
            Color::Yellow,
        ),
        GameState::Playing => (
            format!("Score {}   Best {}", ctx.score.value(), ctx.score.best()),
            Color::Green,
        ),
        GameState::Over => {
            let text = match ctx.last_crash {
                Some(cause) => format!(
                    "Game over: {}. Press Space to try again",
                    cause.describe()
                ),
                None => "Game over. Press Space to try again".to_string(),
            };
            (text, Color::Red)
        }
    };
    if assets.is_loading() {
        text.push_str("  (loading sprites)");
    }
    (text, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::utils::storage::MemoryStorage;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_ready_screen_renders() {
        let ctx = GameContext::new(GameConfig::default(), Box::new(MemoryStorage::new()));
        let assets = AssetStore::load_blocking(None);
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| draw_game(f, &ctx, &assets)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Flappy Bird"));
        assert!(text.contains("Get ready!"));
        assert!(text.contains('▀'));
    }

    #[test]
    fn test_game_over_shows_scoreboard() {
        let mut ctx = GameContext::new(
            GameConfig::default(),
            Box::new(MemoryStorage::with_item("bestScore", "7")),
        );
        ctx.state = GameState::Playing;
        ctx.score.increment();
        ctx.state = GameState::Over;
        ctx.score.show_game_over();
        let assets = AssetStore::load_blocking(None);
        let mut terminal = Terminal::new(TestBackend::new(60, 40)).unwrap();
        terminal.draw(|f| draw_game(f, &ctx, &assets)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Score 1"));
        assert!(text.contains("Best 7"));
        assert!(text.contains("Press Space to try again"));
    }
}
