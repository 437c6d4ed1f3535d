//! Error type shared by the fallible edges of the game (storage, config, assets).
//!
//! Nothing in the frame loop propagates these: callers log them and fall back
//! to defaults so a broken file never stops a run.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlappyError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not determine a data directory for this platform")]
    NoDataDir,

    #[error("sprite '{name}': {reason}")]
    Sprite { name: String, reason: String },
}

impl FlappyError {
    pub fn sprite(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Sprite {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FlappyError>;
