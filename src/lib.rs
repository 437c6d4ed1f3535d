//! Flappy - terminal Flappy Bird.
//!
//! The library holds the game logic, rendering and UI so the binary stays a
//! thin driver and tests can run the game headless.

pub mod build_info;
pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod render;
pub mod ui;
pub mod utils;
