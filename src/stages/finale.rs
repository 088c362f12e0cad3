use crate::effects::confetti::{CelebrationPlan, ConfettiBurst, FloatingHeart, floating_hearts};
use crate::foundation::core::SessionTime;
use crate::foundation::math::Rng64;
use crate::sequence::scheduler::Scheduler;

/// Delay between opening the overlay and fading it in.
pub const FINALE_FADE_IN_MS: u64 = 50;
pub const FLOATING_HEART_COUNT: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinaleResponse {
    Yes,
    Date,
    Maybe,
}

impl FinaleResponse {
    pub fn celebrates(self) -> bool {
        matches!(self, FinaleResponse::Yes | FinaleResponse::Date)
    }
}

#[derive(Clone, Debug, PartialEq)]
enum FinaleTimer {
    FadeIn,
    Burst(ConfettiBurst),
}

/// The closing question, shown as an overlay on top of the finished sequence.
#[derive(Clone, Debug)]
pub struct FinaleModal {
    open: bool,
    visible: bool,
    response: Option<FinaleResponse>,
    celebrating: bool,
    hearts: Vec<FloatingHeart>,
    rng: Rng64,
    timers: Scheduler<FinaleTimer>,
}

impl FinaleModal {
    pub fn new(seed: u64) -> Self {
        let mut rng = Rng64::new(seed);
        let hearts = floating_hearts(&mut rng, FLOATING_HEART_COUNT);
        Self {
            open: false,
            visible: false,
            response: None,
            celebrating: false,
            hearts,
            rng,
            timers: Scheduler::new(),
        }
    }

    pub fn open(&mut self, now: SessionTime) {
        if self.open {
            return;
        }
        self.open = true;
        self.timers
            .schedule_after(now, FINALE_FADE_IN_MS, FinaleTimer::FadeIn);
    }

    /// Dismiss the overlay. Clears the answer and any pending confetti.
    pub fn close(&mut self) {
        self.open = false;
        self.visible = false;
        self.response = None;
        self.celebrating = false;
        self.timers.clear();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn response(&self) -> Option<FinaleResponse> {
        self.response
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebrating
    }

    pub fn hearts(&self) -> &[FloatingHeart] {
        &self.hearts
    }

    /// Record an answer and queue its celebration. Ignored while the overlay is closed.
    pub fn respond(&mut self, response: FinaleResponse, now: SessionTime) -> Option<CelebrationPlan> {
        if !self.open {
            return None;
        }
        self.response = Some(response);
        let plan = match response {
            FinaleResponse::Yes => CelebrationPlan::for_yes(&mut self.rng),
            FinaleResponse::Date => CelebrationPlan::for_date(),
            FinaleResponse::Maybe => return None,
        };
        self.celebrating = true;
        for b in &plan.bursts {
            self.timers
                .schedule_after(now, b.at_ms, FinaleTimer::Burst(b.burst.clone()));
        }
        tracing::info!(
            ?response,
            bursts = plan.bursts.len(),
            "finale answered"
        );
        Some(plan)
    }

    /// Return to the question. Confetti already in flight keeps going.
    pub fn reset_response(&mut self) {
        self.response = None;
        self.celebrating = false;
    }

    /// Fire due timers, returning the confetti bursts the host should launch now.
    pub fn tick(&mut self, now: SessionTime) -> Vec<ConfettiBurst> {
        let mut fired = Vec::new();
        for timer in self.timers.drain_due(now) {
            match timer {
                FinaleTimer::FadeIn => self.visible = true,
                FinaleTimer::Burst(b) => fired.push(b),
            }
        }
        fired
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stages/finale.rs"]
mod tests;
