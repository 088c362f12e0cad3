use crate::foundation::core::Point;
use crate::paint::controller::{PaintController, PaintSettings};
use crate::paint::input::{PaintInput, SurfaceRect};
use crate::reveal::estimator::RevealState;
use crate::sequence::stage::Stage;
use crate::stages::StageState;

pub const PAINT_INSTRUCTION: &str = "Drag to paint away and reveal what's beneath";

/// The message under the wash.
pub const HIDDEN_MESSAGE: [&str; 3] = [
    "\"I remember the way you listen \u{2014}",
    "not just waiting for your turn to speak,",
    "but truly hearing.\"",
];

/// Opacity of the hidden message before and after the bloom.
pub const MESSAGE_DIM_OPACITY: f64 = 0.3;

/// Progress bar reaches 100% at 40% revealed.
const PROGRESS_BAR_GAIN: f64 = 2.5;

/// Paint-reveal screen. Mounts its surface on creation and releases it when dropped.
pub struct PaintStage {
    controller: PaintController,
}

impl PaintStage {
    pub fn new(settings: PaintSettings) -> Self {
        let mut controller = PaintController::new(settings);
        controller.mount();
        Self { controller }
    }

    pub fn controller(&self) -> &PaintController {
        &self.controller
    }

    pub fn set_surface(&mut self, surface: SurfaceRect) {
        self.controller.set_surface(surface);
    }

    pub fn handle(&mut self, input: &PaintInput) -> bool {
        self.controller.handle(input)
    }

    /// Stroke directly in buffer coordinates, bypassing pointer state.
    pub fn stroke_at(&mut self, p: Point) -> bool {
        self.controller.stroke_at(p)
    }

    /// "Paint again".
    pub fn paint_again(&mut self) {
        self.controller.reset();
    }

    pub fn reveal(&self) -> RevealState {
        self.controller.state()
    }

    /// Value shown on the progress bar, `min(round(percent * 2.5), 100)`.
    pub fn display_progress(&self) -> u32 {
        (self.reveal().percent * PROGRESS_BAR_GAIN).round().min(100.0) as u32
    }

    pub fn message_opacity(&self) -> f64 {
        if self.reveal().revealed {
            1.0
        } else {
            MESSAGE_DIM_OPACITY
        }
    }
}

impl Drop for PaintStage {
    fn drop(&mut self) {
        self.controller.unmount();
    }
}

impl StageState for PaintStage {
    fn stage(&self) -> Stage {
        Stage::Paint
    }

    fn is_ready(&self) -> bool {
        self.reveal().revealed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stages/paint.rs"]
mod tests;
