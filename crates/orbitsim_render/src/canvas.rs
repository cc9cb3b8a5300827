//! RGBA framebuffer with the handful of 2D canvas operations the simulation needs

use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use orbitsim_math::Vec2;

use crate::color::Rgba;
use crate::error::RenderError;

/// A drawing surface of `width × height` pixels, row-major, origin top-left
///
/// Starts fully transparent, like a fresh HTML canvas.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Canvas {
    /// Create a transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; width as usize * height as usize],
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, row-major
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Raw RGBA8 bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Pixel at (x, y), or None outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.index(x as i64, y as i64).map(|i| self.pixels[i])
    }

    /// Overwrite every pixel
    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Blend a rectangle over the canvas, clipped to its bounds
    pub fn fill_rect(&mut self, x: i64, y: i64, width: u32, height: u32, color: Rgba) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + width as i64).min(self.width as i64);
        let y1 = (y + height as i64).min(self.height as i64);

        for py in y0..y1 {
            for px in x0..x1 {
                self.blend(px, py, color);
            }
        }
    }

    /// Blend the whole canvas with `color`
    pub fn fill(&mut self, color: Rgba) {
        for px in &mut self.pixels {
            *px = color.over(*px);
        }
    }

    /// Blend a filled circle over the canvas
    ///
    /// A pixel is covered when its centre lies inside the circle. Circles too
    /// small to cover any pixel centre still light the pixel under `center`,
    /// so sub-pixel bodies stay visible.
    pub fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba) {
        if !center.is_finite() || !radius.is_finite() {
            return;
        }
        let radius = radius.max(0.0);
        let r2 = radius * radius;

        let min_x = (center.x - radius).floor().max(0.0) as i64;
        let max_x = (center.x + radius).ceil().min(self.width as f64 - 1.0) as i64;
        let min_y = (center.y - radius).floor().max(0.0) as i64;
        let max_y = (center.y + radius).ceil().min(self.height as f64 - 1.0) as i64;

        let mut covered = false;
        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let dx = px as f64 + 0.5 - center.x;
                let dy = py as f64 + 0.5 - center.y;
                if dx * dx + dy * dy <= r2 {
                    self.blend(px, py, color);
                    covered = true;
                }
            }
        }

        if !covered {
            self.blend(center.x.floor() as i64, center.y.floor() as i64, color);
        }
    }

    /// Encode the canvas as PNG
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out).write_image(
            self.as_bytes(),
            self.width,
            self.height,
            ExtendedColorType::Rgba8,
        )?;
        Ok(out)
    }

    /// Write the canvas to a PNG file
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    fn blend(&mut self, x: i64, y: i64, color: Rgba) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.over(self.pixels[i]);
        }
    }
}
