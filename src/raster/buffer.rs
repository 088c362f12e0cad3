use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Canvas, PixelRect, Rgba8};
use crate::foundation::error::{SketchError, SketchResult};

/// Row-major RGBA8 pixel grid with straight (non-premultiplied) alpha.
///
/// This is the paint surface: the wash is painted into it, strokes erase its alpha, and the
/// reveal estimator reads the alpha channel back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterBuffer {
    canvas: Canvas,
    data: Vec<u8>,
}

impl RasterBuffer {
    /// Fully transparent buffer.
    pub fn new(canvas: Canvas) -> SketchResult<Self> {
        canvas.validate()?;
        Ok(Self {
            canvas,
            data: vec![0; canvas.byte_len()],
        })
    }

    pub fn filled(canvas: Canvas, color: Rgba8) -> SketchResult<Self> {
        let mut buf = Self::new(canvas)?;
        buf.fill(color);
        Ok(buf)
    }

    pub fn from_rgba8(canvas: Canvas, data: Vec<u8>) -> SketchResult<Self> {
        canvas.validate()?;
        if data.len() != canvas.byte_len() {
            return Err(SketchError::validation(format!(
                "rgba8 buffer length {} does not match {}x{}x4",
                data.len(),
                canvas.width,
                canvas.height
            )));
        }
        Ok(Self { canvas, data })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    pub fn height(&self) -> u32 {
        self.canvas.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub(crate) fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.canvas.width as usize) + (x as usize)) * 4
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        let i = self.offset(x, y);
        Some(Rgba8::new(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ))
    }

    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        self.pixel(x, y).map(|p| p.a)
    }

    /// Replace every pixel with `color` (source-copy).
    pub fn fill(&mut self, color: Rgba8) {
        let px = color.to_array();
        for d in self.data.chunks_exact_mut(4) {
            d.copy_from_slice(&px);
        }
    }

    /// Composite `color` over the pixels of `rect` (source-over).
    pub fn fill_rect_over(&mut self, rect: PixelRect, color: Rgba8) {
        if color.a == 0 {
            return;
        }
        let x1 = rect.x1.min(self.canvas.width);
        let y1 = rect.y1.min(self.canvas.height);
        for y in rect.y0..y1 {
            for x in rect.x0..x1 {
                let i = self.offset(x, y);
                let dst = [
                    self.data[i],
                    self.data[i + 1],
                    self.data[i + 2],
                    self.data[i + 3],
                ];
                self.data[i..i + 4].copy_from_slice(&over_straight(dst, color));
            }
        }
    }

    pub fn to_rgba_image(&self) -> SketchResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.canvas.width, self.canvas.height, self.data.clone())
            .ok_or_else(|| SketchError::export("raster buffer does not match its dimensions"))
    }

    pub fn save_png(&self, path: &Path) -> SketchResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        image::save_buffer_with_format(
            path,
            &self.data,
            self.canvas.width,
            self.canvas.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// Straight-alpha source-over of a single pixel.
pub(crate) fn over_straight(dst: [u8; 4], src: Rgba8) -> [u8; 4] {
    let sa = src.alpha_f();
    if sa <= 0.0 {
        return dst;
    }
    let da = f64::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return [0, 0, 0, 0];
    }

    let blend = |s: u8, d: u8| {
        let c = (f64::from(s) * sa + f64::from(d) * da * (1.0 - sa)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };
    [
        blend(src.r, dst[0]),
        blend(src.g, dst[1]),
        blend(src.b, dst[2]),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;
