//! Core game state, constants, events and the frame driver.

pub mod constants;
pub mod events;
pub mod game_loop;
pub mod game_state;

pub use events::{CrashCause, TickEvent};
pub use game_loop::GameContext;
pub use game_state::GameState;
