//! Half-block pixel canvas: a software raster implementing [`Surface`],
//! shown in the terminal two pixels per cell (`▀`, fg = top, bg = bottom).

use crate::render::assets::Sprite;
use crate::render::surface::Surface;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c.0, c.1, c.2)
    }
}

/// 2D affine transform `(x, y) → (a·x + c·y + e, b·x + d·y + f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn translation(tx: f64, ty: f64) -> Self {
        Self {
            e: tx,
            f: ty,
            ..Self::IDENTITY
        }
    }

    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::IDENTITY
        }
    }

    pub fn rotation(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        }
    }

    /// `self × other`: `other` is applied first.
    pub fn then(&self, other: &Affine) -> Affine {
        Affine {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    /// `None` for degenerate (non-invertible) transforms.
    pub fn inverse(&self) -> Option<Affine> {
        let det = self.a * self.d - self.b * self.c;
        if det.abs() < f64::EPSILON {
            return None;
        }
        Some(Affine {
            a: self.d / det,
            b: -self.b / det,
            c: -self.c / det,
            d: self.a / det,
            e: (self.c * self.f - self.d * self.e) / det,
            f: (self.b * self.e - self.a * self.f) / det,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PixelCanvas {
    logical_width: f64,
    logical_height: f64,
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
    base: Affine,
    transform: Affine,
    stack: Vec<Affine>,
}

impl PixelCanvas {
    /// Canvas for a `logical_width × logical_height` world drawn at `scale`
    /// raster pixels per world pixel.
    pub fn new(logical_width: f64, logical_height: f64, scale: f64) -> Self {
        let width = ((logical_width * scale).round() as usize).max(1);
        let height = ((logical_height * scale).round() as usize).max(1);
        let base = Affine::scaling(scale, scale);
        Self {
            logical_width,
            logical_height,
            width,
            height,
            pixels: vec![Rgb::default(); width * height],
            base,
            transform: base,
            stack: Vec::new(),
        }
    }

    /// Largest canvas for the world that fits `cols × rows` terminal cells.
    pub fn fit(logical_width: f64, logical_height: f64, cols: u16, rows: u16) -> Self {
        let scale = (cols as f64 / logical_width).min(rows as f64 * 2.0 / logical_height);
        Self::new(logical_width, logical_height, scale.max(f64::EPSILON))
    }

    pub fn pixel_width(&self) -> usize {
        self.width
    }

    pub fn pixel_height(&self) -> usize {
        self.height
    }

    /// Terminal cells the canvas occupies.
    pub fn cell_size(&self) -> (u16, u16) {
        (self.width as u16, self.height.div_ceil(2) as u16)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y * self.width + x]
    }

    /// Map a world point to raster pixels, ignoring the transform stack.
    pub fn world_to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        self.base.apply(x, y)
    }

    /// Start a frame: clear to `color` and reset the transform stack.
    pub fn begin_frame(&mut self, color: Rgb) {
        self.pixels.fill(color);
        self.transform = self.base;
        self.stack.clear();
    }

    /// Rasterise the local-space quad `[x, x+w) × [y, y+h)` under the
    /// current transform. `shader` receives normalised `(u, v)` in `[0, 1)`.
    fn paint_quad(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        mut shader: impl FnMut(f64, f64) -> Option<Rgb>,
    ) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let Some(inverse) = self.transform.inverse() else {
            return;
        };

        let corners = [
            self.transform.apply(x, y),
            self.transform.apply(x + w, y),
            self.transform.apply(x, y + h),
            self.transform.apply(x + w, y + h),
        ];
        let min_x = corners.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
        let max_x = corners.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
        let min_y = corners.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let max_y = corners.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

        // `as usize` saturates negatives to 0.
        let x0 = min_x.floor().max(0.0) as usize;
        let y0 = min_y.floor().max(0.0) as usize;
        let x1 = (max_x.ceil().max(0.0) as usize).min(self.width);
        let y1 = (max_y.ceil().max(0.0) as usize).min(self.height);

        for py in y0..y1 {
            for px in x0..x1 {
                let (lx, ly) = inverse.apply(px as f64 + 0.5, py as f64 + 0.5);
                let u = (lx - x) / w;
                let v = (ly - y) / h;
                if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
                    continue;
                }
                if let Some(color) = shader(u, v) {
                    self.pixels[py * self.width + px] = color;
                }
            }
        }
    }

    fn push_transform(&mut self, local: Affine) {
        self.transform = self.transform.then(&local);
    }
}

impl Surface for PixelCanvas {
    fn width(&self) -> f64 {
        self.logical_width
    }

    fn height(&self) -> f64 {
        self.logical_height
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgb) {
        self.paint_quad(x, y, width, height, |_, _| Some(color));
    }

    fn draw_image(&mut self, sprite: &Sprite, x: f64, y: f64, size: Option<(f64, f64)>) {
        if !sprite.is_ready() {
            return;
        }
        let (w, h) = size.unwrap_or((sprite.width, sprite.height));
        self.paint_quad(x, y, w, h, |u, v| sprite.sample(u, v));
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(saved) = self.stack.pop() {
            self.transform = saved;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.push_transform(Affine::translation(dx, dy));
    }

    fn rotate(&mut self, radians: f64) {
        self.push_transform(Affine::rotation(radians));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.push_transform(Affine::scaling(sx, sy));
    }
}

/// Widget that blits a [`PixelCanvas`] into a terminal buffer.
pub struct CanvasView<'a> {
    canvas: &'a PixelCanvas,
}

impl<'a> CanvasView<'a> {
    pub fn new(canvas: &'a PixelCanvas) -> Self {
        Self { canvas }
    }
}

impl Widget for CanvasView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (cols, rows) = self.canvas.cell_size();
        let cols = cols.min(area.width);
        let rows = rows.min(area.height);

        for cy in 0..rows {
            for cx in 0..cols {
                let px = cx as usize;
                let top_y = cy as usize * 2;
                let top = self.canvas.pixel(px, top_y);
                let bottom = if top_y + 1 < self.canvas.height {
                    Color::from(self.canvas.pixel(px, top_y + 1))
                } else {
                    Color::Reset
                };
                buf.get_mut(area.x + cx, area.y + cy)
                    .set_char('▀')
                    .set_fg(top.into())
                    .set_bg(bottom);
            }
        }
    }
}
