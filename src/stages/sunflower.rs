use crate::foundation::core::{BezPath, Point, SessionTime};
use crate::sequence::scheduler::Scheduler;
use crate::sequence::stage::Stage;
use crate::stages::StageState;

/// Delay between the final petal and full bloom.
pub const FULL_BLOOM_DELAY_MS: u64 = 1_000;
/// How long a freshly revealed petal's message stays highlighted.
pub const ACTIVE_PETAL_MS: u64 = 2_000;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Petal {
    pub id: u32,
    pub text: &'static str,
    pub angle_deg: f64,
}

pub static PETALS: [Petal; 5] = [
    Petal {
        id: 1,
        text: "You think deeply, even when no one is watching.",
        angle_deg: 0.0,
    },
    Petal {
        id: 2,
        text: "You keep going, not loudly, but honestly.",
        angle_deg: 72.0,
    },
    Petal {
        id: 3,
        text: "You notice details most people rush past.",
        angle_deg: 144.0,
    },
    Petal {
        id: 4,
        text: "You face uncertainty without pretending it isn't there.",
        angle_deg: 216.0,
    },
    Petal {
        id: 5,
        text: "Being with you makes things feel more real.",
        angle_deg: 288.0,
    },
];

const PETAL_INNER_RADIUS: f64 = 55.0;

/// Outline of one petal around the flower center at the origin.
///
/// Revealed petals are longer and wider. Two quadratic curves run from the base, out to the tip
/// and back.
pub fn petal_path(angle_deg: f64, revealed: bool) -> BezPath {
    let rad = angle_deg.to_radians();
    let outer = if revealed { 140.0 } else { 120.0 };
    let half_width = (if revealed { 35.0_f64 } else { 30.0_f64 }).to_radians();

    let polar = |angle: f64, r: f64| Point::new(angle.cos() * r, angle.sin() * r);

    let tip = polar(rad, outer);
    let base1 = polar(rad - half_width, PETAL_INNER_RADIUS);
    let base2 = polar(rad + half_width, PETAL_INNER_RADIUS);
    let cp1 = polar(rad - 0.15, outer * 0.7);
    let cp2 = polar(rad + 0.15, outer * 0.7);

    let mut path = BezPath::new();
    path.move_to(base1);
    path.quad_to(cp1, tip);
    path.quad_to(cp2, base2);
    path.close_path();
    path
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SunflowerTimer {
    Bloom,
    ClearActive(u32),
}

/// Click-each-petal flower.
#[derive(Clone, Debug, Default)]
pub struct SunflowerStage {
    revealed: Vec<u32>,
    active: Option<u32>,
    full_bloom: bool,
    timers: Scheduler<SunflowerTimer>,
}

impl SunflowerStage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reveal petal `id`. Unknown ids and repeats are ignored.
    pub fn reveal_petal(&mut self, id: u32, now: SessionTime) -> bool {
        if !PETALS.iter().any(|p| p.id == id) || self.revealed.contains(&id) {
            return false;
        }
        self.revealed.push(id);
        self.active = Some(id);
        if self.revealed.len() == PETALS.len() {
            self.timers
                .schedule_after(now, FULL_BLOOM_DELAY_MS, SunflowerTimer::Bloom);
        }
        self.timers
            .schedule_after(now, ACTIVE_PETAL_MS, SunflowerTimer::ClearActive(id));
        true
    }

    pub fn is_revealed(&self, id: u32) -> bool {
        self.revealed.contains(&id)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    pub fn active_petal(&self) -> Option<&'static Petal> {
        let id = self.active?;
        PETALS.iter().find(|p| p.id == id)
    }

    pub fn is_fully_bloomed(&self) -> bool {
        self.full_bloom
    }

    /// Current outline of every petal, in petal order.
    pub fn outlines(&self) -> Vec<(u32, BezPath)> {
        PETALS
            .iter()
            .map(|p| (p.id, petal_path(p.angle_deg, self.is_revealed(p.id))))
            .collect()
    }
}

impl StageState for SunflowerStage {
    fn stage(&self) -> Stage {
        Stage::Sunflower
    }

    fn tick(&mut self, now: SessionTime) {
        for timer in self.timers.drain_due(now) {
            match timer {
                SunflowerTimer::Bloom => self.full_bloom = true,
                // A newer petal keeps its highlight.
                SunflowerTimer::ClearActive(id) => {
                    if self.active == Some(id) {
                        self.active = None;
                    }
                }
            }
        }
    }

    fn is_ready(&self) -> bool {
        self.full_bloom
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stages/sunflower.rs"]
mod tests;
