use crate::foundation::core::PixelRect;
use crate::raster::brush::{BrushStroke, EraseBrush};
use crate::raster::buffer::RasterBuffer;

/// Pixels with alpha strictly below this count as revealed.
pub const REVEAL_ALPHA_THRESHOLD: u8 = 50;

/// Reveal percentage that must be exceeded before the message blooms.
pub const BLOOM_THRESHOLD_PCT: f64 = 40.0;

/// Alpha-channel sampler computing how much of a buffer has been erased.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealEstimator {
    alpha_threshold: u8,
}

impl Default for RevealEstimator {
    fn default() -> Self {
        Self::new(REVEAL_ALPHA_THRESHOLD)
    }
}

impl RevealEstimator {
    pub fn new(alpha_threshold: u8) -> Self {
        Self { alpha_threshold }
    }

    pub fn alpha_threshold(&self) -> u8 {
        self.alpha_threshold
    }

    /// Count revealed pixels in a raw RGBA8 slice. Trailing partial pixels are ignored.
    pub fn count_revealed(&self, rgba: &[u8]) -> usize {
        rgba.chunks_exact(4)
            .filter(|px| px[3] < self.alpha_threshold)
            .count()
    }

    pub fn count_revealed_in(&self, buf: &RasterBuffer, rect: PixelRect) -> usize {
        let x1 = rect.x1.min(buf.width());
        let y1 = rect.y1.min(buf.height());
        if rect.x0 >= x1 {
            return 0;
        }
        let data = buf.pixels();
        let mut n = 0usize;
        for y in rect.y0..y1 {
            let start = buf.offset(rect.x0, y);
            let end = buf.offset(x1, y);
            n += self.count_revealed(&data[start..end]);
        }
        n
    }

    /// Percentage of revealed pixels in a raw RGBA8 slice, in `[0, 100]`.
    pub fn estimate_rgba(&self, rgba: &[u8]) -> f64 {
        percent(self.count_revealed(rgba), rgba.len() / 4)
    }

    /// Full-buffer scan.
    pub fn estimate(&self, buf: &RasterBuffer) -> f64 {
        self.estimate_rgba(buf.pixels())
    }
}

fn percent(revealed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    ((revealed as f64 / total as f64) * 100.0).clamp(0.0, 100.0)
}

/// Incremental revealed-pixel counter.
///
/// Rescans only the stroke's bounding box before and after each erase, so a stroke costs
/// O(stroke area) rather than O(buffer). Always agrees with [`RevealEstimator::estimate`].
#[derive(Clone, Debug, PartialEq)]
pub struct RevealCounter {
    estimator: RevealEstimator,
    revealed: usize,
    total: usize,
}

impl RevealCounter {
    pub fn from_buffer(estimator: RevealEstimator, buf: &RasterBuffer) -> Self {
        Self {
            estimator,
            revealed: estimator.count_revealed(buf.pixels()),
            total: buf.canvas().pixel_count(),
        }
    }

    pub fn revealed_pixels(&self) -> usize {
        self.revealed
    }

    pub fn percent(&self) -> f64 {
        percent(self.revealed, self.total)
    }

    /// Erase `stroke` from `buf` with `brush` and fold the change into the count.
    pub fn apply_stroke(&mut self, brush: &EraseBrush, buf: &mut RasterBuffer, stroke: &BrushStroke) {
        let Some(rect) = PixelRect::clipped(stroke.bounds(), buf.canvas()) else {
            return;
        };
        let before = self.estimator.count_revealed_in(buf, rect);
        if brush.apply(buf, stroke).is_none() {
            return;
        }
        let after = self.estimator.count_revealed_in(buf, rect);
        // Erasing only lowers alpha, so `after >= before`.
        self.revealed += after.saturating_sub(before);
    }

    /// Recount after the buffer was repainted wholesale.
    pub fn resync(&mut self, buf: &RasterBuffer) {
        self.revealed = self.estimator.count_revealed(buf.pixels());
        self.total = buf.canvas().pixel_count();
    }
}

/// Reveal progress plus the one-way bloom latch.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealState {
    /// Revealed share of the buffer, in `[0, 100]`.
    pub percent: f64,
    /// Set once `percent` exceeds the bloom threshold; only [`RevealState::reset`] clears it.
    pub revealed: bool,
}

impl RevealState {
    /// Record a fresh estimate. Returns `true` when this observation trips the latch.
    pub fn observe(&mut self, percent: f64, bloom_threshold_pct: f64) -> bool {
        self.percent = percent.clamp(0.0, 100.0);
        if !self.revealed && self.percent > bloom_threshold_pct {
            self.revealed = true;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/estimator.rs"]
mod tests;
