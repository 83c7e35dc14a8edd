//! Rasterisation of a [`GeometryBuffer`] into an RGBA [`Canvas`].
//!
//! Geometry is fitted to the canvas with a per-axis scale and a fixed margin on
//! every side: the minimum corner of the bounds lands on `(margin, margin)`.
//! Segments are drawn in buffer order, each with a hue proportional to its index,
//! so the same geometry always produces the same pixels.

use crate::error::Result;
use crate::geometry::{Bounds, GeometryBuffer};
use glam::DVec2;
use image::{ImageBuffer, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tunables for the geometry-to-pixel transform and the colour ramp.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterConfig {
    /// Pixels per turtle unit along X.
    pub x_scale: f64,
    /// Pixels per turtle unit along Y.
    pub y_scale: f64,
    /// Empty border, in pixels, on every side.
    pub margin: u32,
    /// HSL saturation of segment colours, in percent.
    pub saturation: f64,
    /// HSL lightness of segment colours, in percent.
    pub lightness: f64,
    /// Colour of pixels no segment touches.
    pub background: [u8; 4],
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            x_scale: 5.0,
            y_scale: 5.0,
            margin: 10,
            saturation: 50.0,
            lightness: 50.0,
            background: [0, 0, 0, 255],
        }
    }
}

/// The transform from turtle space to pixel space, and the canvas size it implies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    origin: DVec2,
    scale: DVec2,
    margin: f64,
    width: u32,
    height: u32,
}

impl Viewport {
    /// Fits `bounds` into a canvas using the scale and margin of `config`.
    pub fn fit(bounds: &Bounds, config: &RasterConfig) -> Self {
        let scale = DVec2::new(config.x_scale, config.y_scale);
        let margin = f64::from(config.margin);
        // Pixel indices run from 0 to size * scale inside the margins, hence the + 1.
        let extent = (bounds.size() * scale).round() + DVec2::splat(1.0 + 2.0 * margin);
        Self {
            origin: bounds.min,
            scale,
            margin,
            width: extent.x as u32,
            height: extent.y as u32,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Maps a turtle-space point to the nearest pixel.
    pub fn to_pixel(&self, point: DVec2) -> (i64, i64) {
        let p = ((point - self.origin) * self.scale + DVec2::splat(self.margin)).round();
        (p.x as i64, p.y as i64)
    }
}

/// A finished raster image, ready to be handed to an encoder.
#[derive(Clone, Debug)]
pub struct Canvas {
    image: RgbaImage,
    background: Rgba<u8>,
}

impl Canvas {
    /// A `width`×`height` canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: [u8; 4]) -> Self {
        Self {
            image: ImageBuffer::from_pixel(width, height, Rgba(background)),
            background: Rgba(background),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Whether `(x, y)` lies inside the canvas and was never drawn on.
    pub fn is_background(&self, x: u32, y: u32) -> bool {
        self.image
            .get_pixel_checked(x, y)
            .is_some_and(|p| *p == self.background)
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Draws a line of `thickness` pixels between two pixel positions.
    pub fn draw_line(
        &mut self,
        from: (i64, i64),
        to: (i64, i64),
        thickness: u32,
        color: Rgba<u8>,
    ) {
        // http://members.chello.at/~easyfilter/bresenham.html
        let delta_x = (to.0 - from.0).abs();
        let step_x = if from.0 < to.0 { 1 } else { -1 };

        let delta_y = -(to.1 - from.1).abs();
        let step_y = if from.1 < to.1 { 1 } else { -1 };

        let mut error = delta_x + delta_y;
        let mut current = from;
        loop {
            self.stamp(current, thickness, color);

            if current == to {
                break;
            }

            let e2 = 2 * error;
            if e2 >= delta_y {
                error += delta_y;
                current.0 += step_x;
            }
            if e2 <= delta_x {
                error += delta_x;
                current.1 += step_y;
            }
        }
    }

    /// Paints a square brush of side `thickness` centred on `center`, clipped to the canvas.
    fn stamp(&mut self, center: (i64, i64), thickness: u32, color: Rgba<u8>) {
        let side = i64::from(thickness.max(1));
        let low = -((side - 1) / 2);
        let (width, height) = (i64::from(self.width()), i64::from(self.height()));
        for dy in low..low + side {
            for dx in low..low + side {
                let (x, y) = (center.0 + dx, center.1 + dy);
                if (0..width).contains(&x) && (0..height).contains(&y) {
                    self.image.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }
}

/// Converts HSL (hue in degrees, saturation and lightness in percent) to opaque RGBA.
pub fn hsl_to_rgba(hue: f64, saturation: f64, lightness: f64) -> Rgba<u8> {
    let s = (saturation / 100.0).clamp(0.0, 1.0);
    let l = (lightness / 100.0).clamp(0.0, 1.0);
    let h = hue.rem_euclid(360.0) / 60.0;

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = l - chroma / 2.0;
    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgba([channel(r), channel(g), channel(b), u8::MAX])
}

/// Draws geometry onto a freshly sized canvas.
#[derive(Clone, Debug, Default)]
pub struct Rasterizer {
    config: RasterConfig,
}

impl Rasterizer {
    pub fn new(config: RasterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    /// The viewport `buffer` would be rendered with.
    pub fn viewport(&self, buffer: &GeometryBuffer) -> Result<Viewport> {
        Ok(Viewport::fit(&buffer.bounds()?, &self.config))
    }

    /// Renders `buffer` with lines `thickness` pixels wide.
    ///
    /// Fails with [`Error::EmptyGeometry`](crate::Error::EmptyGeometry) when the buffer
    /// holds no segments.
    pub fn render(&self, buffer: &GeometryBuffer, thickness: u32) -> Result<Canvas> {
        let viewport = self.viewport(buffer)?;
        let mut canvas = Canvas::new(viewport.width(), viewport.height(), self.config.background);

        let total = buffer.len() as f64;
        for (i, segment) in buffer.iter().enumerate() {
            let hue = (i as f64 / total) * 360.0;
            let color = hsl_to_rgba(hue, self.config.saturation, self.config.lightness);
            canvas.draw_line(
                viewport.to_pixel(segment.p1),
                viewport.to_pixel(segment.p2),
                thickness,
                color,
            );
        }

        debug!(
            width = canvas.width(),
            height = canvas.height(),
            segments = buffer.len(),
            thickness,
            "render complete"
        );
        Ok(canvas)
    }
}
