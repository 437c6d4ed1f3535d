//! Rendering: sprite loading, the half-block pixel canvas, and the scene.

pub mod assets;
pub mod canvas;
pub mod scene;
pub mod sprites;
pub mod surface;

pub use assets::{AssetStore, Sprite, SpriteId};
pub use canvas::{CanvasView, PixelCanvas, Rgb};
pub use surface::Surface;
