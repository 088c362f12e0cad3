use std::fmt;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;

use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{SketchError, SketchResult};
use crate::stages::letter::{LETTER, LetterLine, LineStyle};

const FONT_FAMILY: &str = "Georgia, serif";

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_svg(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// One positioned line of text; `y` is the baseline.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextRun {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub italic: bool,
    pub anchor: TextAnchor,
    pub color: Rgba8,
}

/// Static description of the downloadable letter image.
#[derive(Clone, Debug, PartialEq)]
pub struct LetterDocument {
    pub width: u32,
    pub height: u32,
    pub background: Rgba8,
    pub ink: Rgba8,
    pub accent: Rgba8,
    pub corner: Rgba8,
    pub corner_width: f64,
    /// Distance of the corner marks from the page edge.
    pub corner_inset: f64,
    /// Length of each arm of a corner mark.
    pub corner_arm: f64,
    pub margin_x: f64,
    pub lines: Vec<LetterLine>,
}

impl LetterDocument {
    /// 800x1000 cream page with the standard letter.
    pub fn standard() -> Self {
        Self {
            width: 800,
            height: 1000,
            background: Rgba8::opaque(0xFB, 0xF7, 0xF2),
            ink: Rgba8::opaque(0x5A, 0x3D, 0x35),
            accent: Rgba8::opaque(0xE6, 0xA2, 0x3C),
            corner: Rgba8::with_alpha_f(230, 162, 60, 0.3),
            corner_width: 2.0,
            corner_inset: 40.0,
            corner_arm: 40.0,
            margin_x: 80.0,
            lines: LETTER.to_vec(),
        }
    }

    /// The four L-shaped corner marks, each as three points.
    pub fn corner_marks(&self) -> [[Point; 3]; 4] {
        let (w, h) = (f64::from(self.width), f64::from(self.height));
        let (i, a) = (self.corner_inset, self.corner_arm);
        [
            [
                Point::new(i, i + a),
                Point::new(i, i),
                Point::new(i + a, i),
            ],
            [
                Point::new(w - i - a, i),
                Point::new(w - i, i),
                Point::new(w - i, i + a),
            ],
            [
                Point::new(i, h - i - a),
                Point::new(i, h - i),
                Point::new(i + a, h - i),
            ],
            [
                Point::new(w - i - a, h - i),
                Point::new(w - i, h - i),
                Point::new(w - i, h - i - a),
            ],
        ]
    }

    /// Position every non-blank line.
    ///
    /// The salutation sits alone near the top; the rest flows from `y = 200`, advancing 35px per
    /// text line and 20px per blank line.
    pub fn layout(&self) -> Vec<TextRun> {
        let mut runs = Vec::new();
        let mut y = 200.0;
        let center = f64::from(self.width) / 2.0;
        let right = f64::from(self.width) - self.margin_x;

        for line in &self.lines {
            let run = |x: f64, y: f64, size: f64, italic: bool, anchor, color| TextRun {
                text: line.text.to_string(),
                x,
                y,
                size,
                italic,
                anchor,
                color,
            };
            match line.style {
                LineStyle::Salutation => {
                    runs.push(run(self.margin_x, 140.0, 32.0, true, TextAnchor::Start, self.ink));
                    continue;
                }
                LineStyle::Blank => {
                    y += 20.0;
                    continue;
                }
                LineStyle::Body => {
                    runs.push(run(self.margin_x, y, 24.0, false, TextAnchor::Start, self.ink));
                }
                LineStyle::Highlight => {
                    runs.push(run(center, y, 36.0, true, TextAnchor::Middle, self.accent));
                }
                LineStyle::Signature => {
                    runs.push(run(right, y, 24.0, true, TextAnchor::End, self.ink));
                }
            }
            y += 35.0;
        }
        runs
    }

    pub fn to_svg(&self) -> String {
        SvgMarkup(self).to_string()
    }

    /// Rasterize to straight-alpha RGBA8.
    ///
    /// Text needs a serif face from the system font database; without one the text is skipped and
    /// only the page and corner marks are drawn.
    #[tracing::instrument(skip(self), fields(width = self.width, height = self.height))]
    pub fn rasterize(&self) -> SketchResult<image::RgbaImage> {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        let opts = usvg::Options {
            fontdb: Arc::new(db),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&self.to_svg(), &opts).context("parse letter svg")?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(self.width, self.height)
            .ok_or_else(|| SketchError::export("failed to allocate letter pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::default(),
            &mut pixmap.as_mut(),
        );

        let mut rgba = pixmap.take();
        demultiply_rgba8_in_place(&mut rgba);
        image::RgbaImage::from_raw(self.width, self.height, rgba)
            .ok_or_else(|| SketchError::export("letter pixmap size mismatch"))
    }

    pub fn export_png(&self, path: &Path) -> SketchResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        let img = self.rasterize()?;
        img.save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), "letter exported");
        Ok(())
    }
}

struct SvgMarkup<'a>(&'a LetterDocument);

impl fmt::Display for SvgMarkup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let doc = self.0;
        let (w, h) = (doc.width, doc.height);
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        )?;
        writeln!(
            f,
            r#"<rect width="{w}" height="{h}" fill="{}"/>"#,
            doc.background.to_hex_rgb()
        )?;
        for mark in doc.corner_marks() {
            let points = mark
                .iter()
                .map(|p| format!("{},{}", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(
                f,
                r#"<polyline points="{points}" fill="none" stroke="{}" stroke-opacity="{:.3}" stroke-width="{}"/>"#,
                doc.corner.to_hex_rgb(),
                doc.corner.alpha_f(),
                doc.corner_width
            )?;
        }
        for run in doc.layout() {
            writeln!(
                f,
                r#"<text x="{}" y="{}" font-family="{FONT_FAMILY}" font-size="{}" font-style="{}" text-anchor="{}" fill="{}" fill-opacity="{:.3}">{}</text>"#,
                run.x,
                run.y,
                run.size,
                if run.italic { "italic" } else { "normal" },
                run.anchor.as_svg(),
                run.color.to_hex_rgb(),
                run.color.alpha_f(),
                escape_xml(&run.text)
            )?;
        }
        writeln!(f, "</svg>")
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/letter.rs"]
mod tests;
