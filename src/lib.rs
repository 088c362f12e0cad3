//! Sketchbloom is a headless engine for a six-stage animated greeting.
//!
//! The crate owns everything that is not pixels-on-a-real-screen:
//!
//! - A CPU [`RasterBuffer`] with an [`EraseBrush`] that paints away a textured wash
//! - A [`RevealEstimator`] and one-way bloom latch ([`RevealState`])
//! - A [`ScreenSequencer`] with a fade guard, driven through an [`Experience`]
//! - Letter PNG export and the finale's confetti schedule
//!
//! Time is explicit: hosts feed a [`SessionTime`] into `tick` calls and render whatever state
//! results.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod config;
pub(crate) mod effects;
pub(crate) mod export;
pub(crate) mod paint;
pub(crate) mod raster;
pub(crate) mod reveal;
pub(crate) mod sequence;
pub(crate) mod session;
pub(crate) mod stages;

pub use crate::foundation::core::{
    BezPath, Canvas, PixelRect, Point, Rect, Rgba8, SessionTime, Size, Vec2,
};
pub use crate::foundation::error::{SketchError, SketchResult};
pub use crate::foundation::math::Rng64;

pub use crate::config::{DEFAULT_TRANSITION_GUARD_MS, SessionConfig};
pub use crate::effects::confetti::{
    CELEBRATION_PALETTE, CelebrationPlan, ConfettiBurst, FloatingHeart, Origin, ScheduledBurst,
};
pub use crate::export::letter::{LetterDocument, TextAnchor, TextRun};
pub use crate::paint::controller::{PaintController, PaintPhase, PaintSettings};
pub use crate::paint::input::{PaintInput, SurfaceRect};
pub use crate::raster::brush::{BrushStroke, DEFAULT_BRUSH_RADIUS, EraseBrush, GradientStop};
pub use crate::raster::buffer::RasterBuffer;
pub use crate::raster::wash::WashStyle;
pub use crate::reveal::estimator::{
    BLOOM_THRESHOLD_PCT, REVEAL_ALPHA_THRESHOLD, RevealCounter, RevealEstimator, RevealState,
};
pub use crate::sequence::scheduler::Scheduler;
pub use crate::sequence::sequencer::{Advance, ScreenSequencer};
pub use crate::sequence::stage::{ProgressDot, Stage, progress_dots};
pub use crate::session::experience::{ActiveStage, Experience, ExperienceEvent};
pub use crate::stages::StageState;
pub use crate::stages::finale::{FinaleModal, FinaleResponse};
pub use crate::stages::hero::{HERO_CTA, HERO_HINT, HERO_SUBTITLE, HERO_TITLE, HeroStage};
pub use crate::stages::letter::{LETTER, LETTER_DOWNLOAD_NAME, LetterLine, LetterStage, LineStyle};
pub use crate::stages::paint::{HIDDEN_MESSAGE, PAINT_INSTRUCTION, PaintStage};
pub use crate::stages::sunflower::{PETALS, Petal, SunflowerStage, petal_path};
pub use crate::stages::timeline::{
    MILESTONES, Milestone, SlotView, TIMELINE_CLOSING_LINE, TimelineStage,
};
