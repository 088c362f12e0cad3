use crate::foundation::core::{PixelRect, Point, Rect};
use crate::foundation::error::{SketchError, SketchResult};
use crate::foundation::math::lerp;
use crate::raster::buffer::RasterBuffer;

pub const DEFAULT_BRUSH_RADIUS: f64 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientStop {
    /// Position along the radius, `0` at the center and `1` at the rim.
    pub offset: f64,
    /// Erase strength at this offset, in `[0, 1]`.
    pub alpha: f64,
}

/// Soft edge: full strength at the center, half at 70% of the radius, none at the rim.
pub const SOFT_EDGE_STOPS: [GradientStop; 3] = [
    GradientStop {
        offset: 0.0,
        alpha: 1.0,
    },
    GradientStop {
        offset: 0.7,
        alpha: 0.5,
    },
    GradientStop {
        offset: 1.0,
        alpha: 0.0,
    },
];

/// One brush application in buffer pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BrushStroke {
    pub center: Point,
    pub radius: f64,
}

impl BrushStroke {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Bounding box including the anti-aliased rim.
    pub fn bounds(&self) -> Rect {
        let r = self.radius + 0.5;
        Rect::new(
            self.center.x - r,
            self.center.y - r,
            self.center.x + r,
            self.center.y + r,
        )
    }
}

/// Erase brush: a solid destination-out disc followed by a destination-out radial gradient.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EraseBrush {
    pub radius: f64,
    /// Strength of the solid disc pass, in `[0, 1]`.
    pub erase_strength: f64,
    pub soft_edge: Vec<GradientStop>,
}

impl Default for EraseBrush {
    fn default() -> Self {
        Self {
            radius: DEFAULT_BRUSH_RADIUS,
            erase_strength: 1.0,
            soft_edge: SOFT_EDGE_STOPS.to_vec(),
        }
    }
}

impl EraseBrush {
    pub fn validate(&self) -> SketchResult<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(SketchError::validation("brush radius must be finite and > 0"));
        }
        if !(0.0..=1.0).contains(&self.erase_strength) {
            return Err(SketchError::validation(
                "brush erase_strength must be within [0, 1]",
            ));
        }
        if self.soft_edge.is_empty() {
            return Err(SketchError::validation(
                "brush soft_edge needs at least one stop",
            ));
        }
        let mut prev = f64::NEG_INFINITY;
        for stop in &self.soft_edge {
            if !(0.0..=1.0).contains(&stop.offset) || !(0.0..=1.0).contains(&stop.alpha) {
                return Err(SketchError::validation(
                    "gradient stop offset/alpha must be within [0, 1]",
                ));
            }
            if stop.offset < prev {
                return Err(SketchError::validation(
                    "gradient stops must be sorted by offset",
                ));
            }
            prev = stop.offset;
        }
        Ok(())
    }

    pub fn stroke_at(&self, center: Point) -> BrushStroke {
        BrushStroke::new(center, self.radius)
    }

    /// Gradient erase strength at normalized distance `t` from the center.
    ///
    /// Clamps to the first/last stop outside the stop range, like a canvas radial gradient.
    pub fn gradient_alpha(&self, t: f64) -> f64 {
        let stops = &self.soft_edge;
        let Some(first) = stops.first() else {
            return 0.0;
        };
        if t <= first.offset {
            return first.alpha;
        }
        for pair in stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                if span <= 0.0 {
                    return b.alpha;
                }
                return lerp(a.alpha, b.alpha, (t - a.offset) / span);
            }
        }
        stops.last().map_or(0.0, |s| s.alpha)
    }

    /// Apply `stroke` to `buf`, returning the pixel rectangle that may have changed.
    ///
    /// Erasing only ever scales alpha down; colour channels are left as they are.
    pub fn apply(&self, buf: &mut RasterBuffer, stroke: &BrushStroke) -> Option<PixelRect> {
        let radius = stroke.radius;
        if !radius.is_finite() || radius <= 0.0 {
            return None;
        }
        let rect = PixelRect::clipped(stroke.bounds(), buf.canvas())?;

        for y in rect.y0..rect.y1 {
            for x in rect.x0..rect.x1 {
                let px = f64::from(x) + 0.5;
                let py = f64::from(y) + 0.5;
                let d = (px - stroke.center.x).hypot(py - stroke.center.y);
                // One pixel of coverage ramp across the rim.
                let coverage = (radius + 0.5 - d).clamp(0.0, 1.0);
                if coverage <= 0.0 {
                    continue;
                }

                let solid = self.erase_strength * coverage;
                let soft = self.gradient_alpha(d / radius) * coverage;
                let keep = (1.0 - solid) * (1.0 - soft);

                let i = buf.offset(x, y) + 3;
                let data = buf.pixels_mut();
                let a = f64::from(data[i]) * keep;
                data[i] = a.round().clamp(0.0, 255.0) as u8;
            }
        }
        Some(rect)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/brush.rs"]
mod tests;
