use crate::foundation::core::{Point, Rect, Size};

/// Raw input delivered by the host, in client (screen) coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaintInput {
    PointerDown { at: Point },
    PointerMove { at: Point },
    PointerUp,
    /// The pointer left the interactive surface.
    PointerLeave,
    /// Only the first touch point is used.
    TouchStart { touches: Vec<Point> },
    TouchMove { touches: Vec<Point> },
    TouchEnd,
}

/// Where the buffer is displayed on screen, used to map client coordinates into buffer pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceRect {
    pub rect: Rect,
}

impl SurfaceRect {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Surface displayed at its natural size with its top-left corner at the client origin.
    pub fn identity(buffer: Size) -> Self {
        Self::new(Rect::from_origin_size(Point::ORIGIN, buffer))
    }

    /// `(client - origin) * (buffer / displayed)` per axis.
    ///
    /// Returns `None` for degenerate surfaces or non-finite coordinates.
    pub fn to_buffer(&self, client: Point, buffer: Size) -> Option<Point> {
        let w = self.rect.width();
        let h = self.rect.height();
        if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
            return None;
        }
        if !(client.x.is_finite() && client.y.is_finite()) {
            return None;
        }
        Some(Point::new(
            (client.x - self.rect.x0) * (buffer.width / w),
            (client.y - self.rect.y0) * (buffer.height / h),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/input.rs"]
mod tests;
