use crate::config::DEFAULT_TRANSITION_GUARD_MS;
use crate::foundation::core::SessionTime;
use crate::sequence::stage::Stage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Transition {
    Settled,
    Fading {
        to: Stage,
        deadline: SessionTime,
    },
}

/// Result of a completed fade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Advance {
    pub from: Stage,
    pub to: Stage,
    /// The finale overlay was opened by this advance.
    pub finale_opened: bool,
}

/// Linear stage machine with a fade guard.
///
/// A completion signal starts a fade; signals received while a fade is in flight are dropped.
/// The current stage only moves forward.
#[derive(Clone, Debug)]
pub struct ScreenSequencer {
    current: Stage,
    transition: Transition,
    finale_open: bool,
    guard_ms: u64,
}

impl Default for ScreenSequencer {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSITION_GUARD_MS)
    }
}

impl ScreenSequencer {
    pub fn new(guard_ms: u64) -> Self {
        Self {
            current: Stage::Hero,
            transition: Transition::Settled,
            finale_open: false,
            guard_ms,
        }
    }

    pub fn current(&self) -> Stage {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.transition, Transition::Fading { .. })
    }

    pub fn pending_deadline(&self) -> Option<SessionTime> {
        match self.transition {
            Transition::Settled => None,
            Transition::Fading { deadline, .. } => Some(deadline),
        }
    }

    pub fn finale_open(&self) -> bool {
        self.finale_open
    }

    /// The single sequence screen on display, if any. The finale has none: it is overlay-only.
    pub fn visible_screen(&self) -> Option<Stage> {
        match self.current {
            Stage::Finale => None,
            s => Some(s),
        }
    }

    /// Signal that the current stage is complete. Returns `false` if the signal was dropped.
    pub fn signal_complete(&mut self, now: SessionTime) -> bool {
        if self.is_transitioning() {
            tracing::trace!(stage = %self.current, "completion dropped during fade");
            return false;
        }
        let Some(to) = self.current.next() else {
            return false;
        };
        self.transition = Transition::Fading {
            to,
            deadline: now.after_millis(self.guard_ms),
        };
        true
    }

    /// Finish the fade once its deadline has passed.
    pub fn tick(&mut self, now: SessionTime) -> Option<Advance> {
        let Transition::Fading { to, deadline } = self.transition else {
            return None;
        };
        if now < deadline {
            return None;
        }

        let from = self.current;
        self.current = to;
        self.transition = Transition::Settled;
        let finale_opened = to == Stage::Finale;
        if finale_opened {
            self.finale_open = true;
        }
        tracing::info!(%from, %to, "stage advanced");
        Some(Advance {
            from,
            to,
            finale_opened,
        })
    }

    /// Dismiss the finale overlay. The sequence stays at its terminal stage.
    pub fn close_finale(&mut self) {
        self.finale_open = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/sequencer.rs"]
mod tests;
