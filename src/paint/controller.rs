use crate::config::SessionConfig;
use crate::foundation::core::{Canvas, Point};
use crate::paint::input::{PaintInput, SurfaceRect};
use crate::raster::brush::EraseBrush;
use crate::raster::buffer::RasterBuffer;
use crate::raster::wash::WashStyle;
use crate::reveal::estimator::{RevealCounter, RevealEstimator, RevealState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintPhase {
    Idle,
    Painting,
}

/// Everything the controller needs from the session configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintSettings {
    pub canvas: Canvas,
    pub brush: EraseBrush,
    pub wash: WashStyle,
    pub estimator: RevealEstimator,
    pub bloom_threshold_pct: f64,
    pub seed: u64,
}

impl PaintSettings {
    pub fn from_config(cfg: &SessionConfig) -> Self {
        Self {
            canvas: cfg.canvas,
            brush: cfg.brush.clone(),
            wash: cfg.wash,
            estimator: RevealEstimator::new(cfg.reveal_alpha_threshold),
            bloom_threshold_pct: cfg.bloom_threshold_pct,
            seed: cfg.seed,
        }
    }
}

impl Default for PaintSettings {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}

struct MountedSurface {
    buffer: RasterBuffer,
    counter: RevealCounter,
}

/// Turns pointer and touch input into erase strokes and keeps [`RevealState`] current.
///
/// Until [`PaintController::mount`] succeeds every operation is a silent no-op.
pub struct PaintController {
    settings: PaintSettings,
    surface: SurfaceRect,
    mounted: Option<MountedSurface>,
    phase: PaintPhase,
    state: RevealState,
    strokes: u64,
}

impl PaintController {
    pub fn new(settings: PaintSettings) -> Self {
        let surface = SurfaceRect::identity(settings.canvas.size());
        Self {
            settings,
            surface,
            mounted: None,
            phase: PaintPhase::Idle,
            state: RevealState::default(),
            strokes: 0,
        }
    }

    /// Allocate the buffer and paint the textured wash over it.
    ///
    /// A canvas that cannot be allocated leaves the controller unmounted.
    pub fn mount(&mut self) {
        let buffer = match RasterBuffer::new(self.settings.canvas) {
            Ok(mut buffer) => {
                self.settings
                    .wash
                    .paint_textured(&mut buffer, self.settings.seed);
                buffer
            }
            Err(err) => {
                tracing::warn!(%err, "paint surface unavailable");
                return;
            }
        };
        let counter = RevealCounter::from_buffer(self.settings.estimator, &buffer);
        self.mounted = Some(MountedSurface { buffer, counter });
        self.phase = PaintPhase::Idle;
        self.state.reset();
        self.strokes = 0;
        tracing::debug!(
            width = self.settings.canvas.width,
            height = self.settings.canvas.height,
            "paint surface mounted"
        );
    }

    pub fn unmount(&mut self) {
        self.mounted = None;
        self.phase = PaintPhase::Idle;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn set_surface(&mut self, surface: SurfaceRect) {
        self.surface = surface;
    }

    pub fn surface(&self) -> SurfaceRect {
        self.surface
    }

    pub fn phase(&self) -> PaintPhase {
        self.phase
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn strokes_applied(&self) -> u64 {
        self.strokes
    }

    pub fn buffer(&self) -> Option<&RasterBuffer> {
        self.mounted.as_ref().map(|m| &m.buffer)
    }

    pub fn settings(&self) -> &PaintSettings {
        &self.settings
    }

    /// Dispatch one input event. Returns `true` if a stroke was applied.
    pub fn handle(&mut self, input: &PaintInput) -> bool {
        match input {
            PaintInput::PointerDown { at } => self.press(*at),
            PaintInput::PointerMove { at } => self.drag(*at),
            PaintInput::TouchStart { touches } => match touches.first() {
                Some(at) => self.press(*at),
                None => false,
            },
            PaintInput::TouchMove { touches } => match touches.first() {
                Some(at) => self.drag(*at),
                None => false,
            },
            PaintInput::PointerUp | PaintInput::PointerLeave | PaintInput::TouchEnd => {
                self.release();
                false
            }
        }
    }

    pub fn press(&mut self, client: Point) -> bool {
        if self.mounted.is_none() {
            return false;
        }
        self.phase = PaintPhase::Painting;
        self.stroke_client(client)
    }

    pub fn drag(&mut self, client: Point) -> bool {
        if self.phase != PaintPhase::Painting {
            return false;
        }
        self.stroke_client(client)
    }

    pub fn release(&mut self) {
        self.phase = PaintPhase::Idle;
    }

    fn stroke_client(&mut self, client: Point) -> bool {
        match self.surface.to_buffer(client, self.settings.canvas.size()) {
            Some(p) => self.stroke_at(p),
            None => false,
        }
    }

    /// Erase one stroke at buffer coordinates `p` and re-estimate progress.
    pub fn stroke_at(&mut self, p: Point) -> bool {
        let Some(m) = self.mounted.as_mut() else {
            return false;
        };
        let stroke = self.settings.brush.stroke_at(p);
        m.counter
            .apply_stroke(&self.settings.brush, &mut m.buffer, &stroke);
        self.strokes += 1;

        let percent = m.counter.percent();
        if self.state.observe(percent, self.settings.bloom_threshold_pct) {
            tracing::debug!(percent, strokes = self.strokes, "hidden message revealed");
        }
        true
    }

    /// "Paint again": restore the plain wash and clear progress and the latch.
    pub fn reset(&mut self) {
        let Some(m) = self.mounted.as_mut() else {
            return;
        };
        self.settings.wash.paint_plain(&mut m.buffer);
        m.counter.resync(&m.buffer);
        self.state.reset();
        self.phase = PaintPhase::Idle;
        tracing::debug!(strokes = self.strokes, "paint surface reset");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/controller.rs"]
mod tests;
