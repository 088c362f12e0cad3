use crate::foundation::core::SessionTime;
use crate::sequence::scheduler::Scheduler;
use crate::sequence::stage::Stage;
use crate::stages::StageState;

/// Delay before the next milestone becomes the prompted one.
pub const NEXT_MILESTONE_DELAY_MS: u64 = 600;
/// Delay between revealing the last milestone and offering "continue".
pub const TIMELINE_COMPLETE_DELAY_MS: u64 = 1_000;

pub const TIMELINE_CLOSING_LINE: &str = "Every moment with you adds another stroke to our story";

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Milestone {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub static MILESTONES: [Milestone; 4] = [
    Milestone {
        id: 1,
        title: "The First Conversation",
        description: "When words flowed easily, and silence felt comfortable too.",
        icon: "\u{1F4AD}",
    },
    Milestone {
        id: 2,
        title: "Shared Curiosity",
        description: "Questioning things together, finding wonder in the ordinary.",
        icon: "\u{1F50D}",
    },
    Milestone {
        id: 3,
        title: "Quiet Understanding",
        description: "Those moments when no explanation was needed.",
        icon: "\u{1F319}",
    },
    Milestone {
        id: 4,
        title: "Growing Together",
        description: "Choosing to understand rather than walk away.",
        icon: "\u{1F331}",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimelineTimer {
    Prompt(usize),
    Complete,
}

/// What an unrevealed slot shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum SlotView {
    Revealed(&'static Milestone),
    Prompt,
    Ellipsis,
}

impl SlotView {
    pub fn label(self) -> &'static str {
        match self {
            SlotView::Revealed(m) => m.title,
            SlotView::Prompt => "Click to reveal",
            SlotView::Ellipsis => "...",
        }
    }
}

/// Click-to-reveal list of milestones.
#[derive(Clone, Debug, Default)]
pub struct TimelineStage {
    revealed: Vec<usize>,
    current: usize,
    complete: bool,
    timers: Scheduler<TimelineTimer>,
}

impl TimelineStage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reveal milestone `index`. Repeats and out-of-range indices are ignored.
    pub fn reveal(&mut self, index: usize, now: SessionTime) -> bool {
        if index >= MILESTONES.len() || self.revealed.contains(&index) {
            return false;
        }
        self.revealed.push(index);
        if index + 1 < MILESTONES.len() {
            self.timers
                .schedule_after(now, NEXT_MILESTONE_DELAY_MS, TimelineTimer::Prompt(index + 1));
        } else {
            self.timers
                .schedule_after(now, TIMELINE_COMPLETE_DELAY_MS, TimelineTimer::Complete);
        }
        true
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    /// Revealed indices in the order they were clicked.
    pub fn reveal_order(&self) -> &[usize] {
        &self.revealed
    }

    pub fn prompted(&self) -> usize {
        self.current
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn slot(&self, index: usize) -> Option<SlotView> {
        let milestone = MILESTONES.get(index)?;
        Some(if self.is_revealed(index) {
            SlotView::Revealed(milestone)
        } else if self.current == index {
            SlotView::Prompt
        } else {
            SlotView::Ellipsis
        })
    }
}

impl StageState for TimelineStage {
    fn stage(&self) -> Stage {
        Stage::Timeline
    }

    fn tick(&mut self, now: SessionTime) {
        for timer in self.timers.drain_due(now) {
            match timer {
                TimelineTimer::Prompt(i) => self.current = i,
                TimelineTimer::Complete => self.complete = true,
            }
        }
    }

    fn is_ready(&self) -> bool {
        self.complete
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stages/timeline.rs"]
mod tests;
