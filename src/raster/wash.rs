use crate::foundation::core::{PixelRect, Rgba8};
use crate::foundation::math::Rng64;
use crate::raster::buffer::RasterBuffer;

/// The opaque cover painted over the hidden message.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WashStyle {
    /// Base fill, `rgba(220, 236, 246, 0.95)` in the reference build.
    pub color: Rgba8,
    /// Colour of the texture speckles (alpha is randomized per speckle).
    pub speckle_rgb: [u8; 3],
    pub speckle_count: u32,
    /// Edge of each square speckle, in pixels.
    pub speckle_size: u32,
    /// Upper bound of the per-speckle alpha, in `[0, 1]`.
    pub speckle_max_alpha: f64,
}

impl Default for WashStyle {
    fn default() -> Self {
        Self {
            color: Rgba8::with_alpha_f(220, 236, 246, 0.95),
            speckle_rgb: [200, 220, 235],
            speckle_count: 1000,
            speckle_size: 2,
            speckle_max_alpha: 0.3,
        }
    }
}

impl WashStyle {
    /// Flat wash with no texture. Used by "paint again".
    pub fn paint_plain(&self, buf: &mut RasterBuffer) {
        buf.fill(self.color);
    }

    /// Flat wash plus seeded speckles. Used when the paint surface is first mounted.
    ///
    /// Speckles are composited source-over, so they never lower the wash alpha.
    pub fn paint_textured(&self, buf: &mut RasterBuffer, seed: u64) {
        self.paint_plain(buf);

        let mut rng = Rng64::new(seed);
        let w = f64::from(buf.width());
        let h = f64::from(buf.height());
        let [r, g, b] = self.speckle_rgb;
        for _ in 0..self.speckle_count {
            let x = (rng.next_f64_01() * w).floor() as u32;
            let y = (rng.next_f64_01() * h).floor() as u32;
            let alpha = rng.next_f64_01() * self.speckle_max_alpha;
            let rect = PixelRect {
                x0: x,
                y0: y,
                x1: x.saturating_add(self.speckle_size),
                y1: y.saturating_add(self.speckle_size),
            };
            buf.fill_rect_over(rect, Rgba8::with_alpha_f(r, g, b, alpha));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/wash.rs"]
mod tests;
