//! The drawing surface the scene renders onto.
//!
//! Coordinates are world pixels of the logical screen. Implementations map
//! them to whatever raster they own.

use crate::render::assets::Sprite;
use crate::render::canvas::Rgb;

pub trait Surface {
    /// Logical width in world pixels.
    fn width(&self) -> f64;
    /// Logical height in world pixels.
    fn height(&self) -> f64;

    /// Fill a rectangle under the current transform.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgb);

    /// Draw `sprite` with its top-left corner at `(x, y)`, scaled to `size`
    /// or drawn at its intrinsic size. A sprite with no pixels or zero size
    /// draws nothing.
    fn draw_image(&mut self, sprite: &Sprite, x: f64, y: f64, size: Option<(f64, f64)>);

    /// Push the current transform.
    fn save(&mut self);
    /// Pop back to the last saved transform. Unbalanced restores are ignored.
    fn restore(&mut self);
    fn translate(&mut self, dx: f64, dy: f64);
    /// Rotate clockwise (y grows downward) by `radians`.
    fn rotate(&mut self, radians: f64);
    fn scale(&mut self, sx: f64, sy: f64);
}
