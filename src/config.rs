use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::Canvas;
use crate::foundation::error::{SketchError, SketchResult};
use crate::raster::brush::EraseBrush;
use crate::raster::wash::WashStyle;
use crate::reveal::estimator::{BLOOM_THRESHOLD_PCT, REVEAL_ALPHA_THRESHOLD};

/// Fade window during which further completion signals are ignored.
pub const DEFAULT_TRANSITION_GUARD_MS: u64 = 500;

/// Tunables for one greeting session. Defaults reproduce the reference build exactly.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Paint surface size in buffer pixels.
    pub canvas: Canvas,
    pub brush: EraseBrush,
    pub wash: WashStyle,
    /// Alpha below which a pixel counts as revealed.
    pub reveal_alpha_threshold: u8,
    /// Reveal percentage that must be exceeded to bloom the hidden message.
    pub bloom_threshold_pct: f64,
    pub transition_guard_ms: u64,
    /// Seed for every randomized decoration (wash speckles, confetti, hearts).
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::REFERENCE,
            brush: EraseBrush::default(),
            wash: WashStyle::default(),
            reveal_alpha_threshold: REVEAL_ALPHA_THRESHOLD,
            bloom_threshold_pct: BLOOM_THRESHOLD_PCT,
            transition_guard_ms: DEFAULT_TRANSITION_GUARD_MS,
            seed: 0x5EED_F10E,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> SketchResult<()> {
        self.canvas.validate()?;
        self.brush.validate()?;
        if !self.bloom_threshold_pct.is_finite()
            || self.bloom_threshold_pct < 0.0
            || self.bloom_threshold_pct >= 100.0
        {
            return Err(SketchError::validation(
                "bloom_threshold_pct must be within [0, 100)",
            ));
        }
        if self.reveal_alpha_threshold == 0 {
            return Err(SketchError::validation(
                "reveal_alpha_threshold must be > 0 or nothing can ever be revealed",
            ));
        }
        if !(0.0..=1.0).contains(&self.wash.speckle_max_alpha) {
            return Err(SketchError::validation(
                "wash.speckle_max_alpha must be within [0, 1]",
            ));
        }
        if self.wash.color.a < self.reveal_alpha_threshold {
            return Err(SketchError::validation(
                "wash alpha must not start out below the reveal threshold",
            ));
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> SketchResult<Self> {
        let cfg: SessionConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: &Path) -> SketchResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read session config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
