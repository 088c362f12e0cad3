//! Per-stage state for the greeting screens.
//!
//! Each stage owns its own timers and reports readiness; the session decides when a ready stage
//! may signal completion to the sequencer.

pub(crate) mod finale;
pub(crate) mod hero;
pub(crate) mod letter;
pub(crate) mod paint;
pub(crate) mod sunflower;
pub(crate) mod timeline;

use crate::foundation::core::SessionTime;
use crate::sequence::stage::Stage;

/// Common surface of every sequence screen.
pub trait StageState {
    fn stage(&self) -> Stage;

    /// Fire any timers due at `now`.
    fn tick(&mut self, _now: SessionTime) {}

    /// Whether the stage currently offers its "continue" action.
    fn is_ready(&self) -> bool;
}
