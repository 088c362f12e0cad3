//! Stage ordering, fade guard and session timers.

pub(crate) mod scheduler;
pub(crate) mod sequencer;
pub(crate) mod stage;
