//! Sprite handles and the asynchronous asset store.
//!
//! Sprites are decoded on a background thread and handed to the frame loop
//! over a channel. Until a sprite arrives, lookups return `None` and the
//! scene skips it.

use crate::error::{FlappyError, Result};
use crate::render::canvas::Rgb;
use crate::render::sprites::{builtin, palette};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// Every image the game draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    BirdUp,
    BirdMid,
    BirdDown,
    Background,
    Ground,
    Pipe,
    Digit(u8),
    GetReady,
    GameOver,
}

impl SpriteId {
    pub const ALL: [SpriteId; 18] = [
        SpriteId::BirdUp,
        SpriteId::BirdMid,
        SpriteId::BirdDown,
        SpriteId::Background,
        SpriteId::Ground,
        SpriteId::Pipe,
        SpriteId::Digit(0),
        SpriteId::Digit(1),
        SpriteId::Digit(2),
        SpriteId::Digit(3),
        SpriteId::Digit(4),
        SpriteId::Digit(5),
        SpriteId::Digit(6),
        SpriteId::Digit(7),
        SpriteId::Digit(8),
        SpriteId::Digit(9),
        SpriteId::GetReady,
        SpriteId::GameOver,
    ];

    /// File stem used for overrides, e.g. `bird-up` or `digit-7`.
    pub fn file_stem(&self) -> String {
        match self {
            SpriteId::BirdUp => "bird-up".to_string(),
            SpriteId::BirdMid => "bird-mid".to_string(),
            SpriteId::BirdDown => "bird-down".to_string(),
            SpriteId::Background => "background".to_string(),
            SpriteId::Ground => "ground".to_string(),
            SpriteId::Pipe => "pipe".to_string(),
            SpriteId::Digit(d) => format!("digit-{d}"),
            SpriteId::GetReady => "get-ready".to_string(),
            SpriteId::GameOver => "game-over".to_string(),
        }
    }
}

/// A decoded image: intrinsic size in world pixels plus a palette grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub name: String,
    pub width: f64,
    pub height: f64,
    cols: usize,
    rows: usize,
    pixels: Vec<Option<Rgb>>,
}

impl Sprite {
    /// A sprite with nothing in it; draws as a no-op.
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            width: 0.0,
            height: 0.0,
            cols: 0,
            rows: 0,
            pixels: Vec::new(),
        }
    }

    /// Decode palette rows. All rows must be the same non-zero length.
    pub fn from_rows<S: AsRef<str>>(
        name: &str,
        width: f64,
        height: f64,
        rows: &[S],
    ) -> Result<Self> {
        if rows.is_empty() {
            return Err(FlappyError::sprite(name, "no pixel rows"));
        }
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(FlappyError::sprite(name, "size must be non-negative"));
        }

        let cols = rows[0].as_ref().chars().count();
        if cols == 0 {
            return Err(FlappyError::sprite(name, "empty pixel row"));
        }

        let mut pixels = Vec::with_capacity(cols * rows.len());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != cols {
                return Err(FlappyError::sprite(
                    name,
                    format!("row {i} has {len} columns, expected {cols}"),
                ));
            }
            for ch in row.chars() {
                let color = palette(ch).ok_or_else(|| {
                    FlappyError::sprite(name, format!("unknown palette character '{ch}'"))
                })?;
                pixels.push(color);
            }
        }

        Ok(Self {
            name: name.to_string(),
            width,
            height,
            cols,
            rows: rows.len(),
            pixels,
        })
    }

    /// Parse a `.sprite` file: a `<width> <height>` line, then palette rows.
    /// Blank lines and lines starting with `#` are skipped.
    pub fn parse(name: &str, text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.trim().is_empty() && !l.starts_with('#'));

        let header = lines
            .next()
            .ok_or_else(|| FlappyError::sprite(name, "missing size header"))?;
        let mut dims = header.split_whitespace().map(str::parse::<f64>);
        let (width, height) = match (dims.next(), dims.next(), dims.next()) {
            (Some(Ok(w)), Some(Ok(h)), None) => (w, h),
            _ => {
                return Err(FlappyError::sprite(
                    name,
                    format!("bad size header '{header}'"),
                ))
            }
        };

        let rows: Vec<&str> = lines.collect();
        Self::from_rows(name, width, height, &rows)
    }

    /// Whether drawing this sprite would put anything on screen.
    pub fn is_ready(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && !self.pixels.is_empty()
    }

    /// Nearest-neighbour sample at normalised `(u, v)` in `[0, 1)`.
    pub fn sample(&self, u: f64, v: f64) -> Option<Rgb> {
        if self.pixels.is_empty() {
            return None;
        }
        let col = ((u * self.cols as f64) as usize).min(self.cols - 1);
        let row = ((v * self.rows as f64) as usize).min(self.rows - 1);
        self.pixels[row * self.cols + col]
    }
}

/// Decode one sprite: an override file in `override_dir` wins over the
/// builtin art.
pub fn load_sprite(id: SpriteId, override_dir: Option<&Path>) -> Result<Sprite> {
    let name = id.file_stem();
    if let Some(dir) = override_dir {
        let path = dir.join(format!("{name}.sprite"));
        if path.is_file() {
            let text = fs::read_to_string(&path)?;
            return Sprite::parse(&name, &text);
        }
    }
    let art = builtin(id);
    Sprite::from_rows(&name, art.width, art.height, art.rows.as_slice())
}

/// Holds every sprite that has finished loading.
pub struct AssetStore {
    sprites: HashMap<SpriteId, Sprite>,
    pending: Option<Receiver<(SpriteId, Sprite)>>,
}

impl AssetStore {
    /// A store with nothing loaded.
    pub fn empty() -> Self {
        Self {
            sprites: HashMap::new(),
            pending: None,
        }
    }

    /// Start decoding every sprite on a background thread. Call
    /// [`AssetStore::poll`] each frame to pick up what has arrived.
    pub fn load_in_background(override_dir: Option<PathBuf>) -> Self {
        let (tx, rx) = mpsc::channel();
        let spawned = thread::Builder::new()
            .name("asset-loader".to_string())
            .spawn(move || {
                for id in SpriteId::ALL {
                    match load_sprite(id, override_dir.as_deref()) {
                        Ok(sprite) => {
                            if tx.send((id, sprite)).is_err() {
                                return;
                            }
                        }
                        Err(e) => log::warn!("Skipping asset: {}", e),
                    }
                }
            });

        match spawned {
            Ok(_) => Self {
                sprites: HashMap::new(),
                pending: Some(rx),
            },
            Err(e) => {
                log::warn!("Could not start asset loader thread: {}", e);
                Self::empty()
            }
        }
    }

    /// Decode every sprite on the calling thread.
    pub fn load_blocking(override_dir: Option<&Path>) -> Self {
        let mut store = Self::empty();
        for id in SpriteId::ALL {
            match load_sprite(id, override_dir) {
                Ok(sprite) => store.insert(id, sprite),
                Err(e) => log::warn!("Skipping asset: {}", e),
            }
        }
        store
    }

    /// Move any sprites the loader has finished into the store.
    /// Returns how many arrived.
    pub fn poll(&mut self) -> usize {
        let Some(rx) = &self.pending else {
            return 0;
        };

        let mut arrived = Vec::new();
        let mut finished = false;
        loop {
            match rx.try_recv() {
                Ok(item) => arrived.push(item),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    finished = true;
                    break;
                }
            }
        }

        let count = arrived.len();
        for (id, sprite) in arrived {
            self.insert(id, sprite);
        }
        if finished {
            self.pending = None;
            log::info!("Asset loading finished ({} sprites)", self.sprites.len());
        }
        count
    }

    pub fn insert(&mut self, id: SpriteId, sprite: Sprite) {
        self.sprites.insert(id, sprite);
    }

    pub fn get(&self, id: SpriteId) -> Option<&Sprite> {
        self.sprites.get(&id).filter(|s| s.is_ready())
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
