use crate::foundation::core::Rgba8;
use crate::foundation::math::Rng64;

pub const CELEBRATION_PALETTE: [Rgba8; 5] = [
    Rgba8::opaque(0xF2, 0xC9, 0x4C),
    Rgba8::opaque(0xE6, 0xA2, 0x3C),
    Rgba8::opaque(0xD4, 0x93, 0x2A),
    Rgba8::opaque(0x8B, 0x45, 0x13),
    Rgba8::opaque(0xFB, 0xF7, 0xF2),
];

/// Length of the "yes" side-cannon show.
pub const SIDE_CANNON_DURATION_MS: u64 = 3_000;
pub const SIDE_CANNON_INTERVAL_MS: u64 = 250;
const SIDE_CANNON_PEAK_PARTICLES: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Origin {
    /// Fraction of the viewport width.
    pub x: f64,
    /// Fraction of the viewport height; may be slightly negative (above the top edge).
    pub y: f64,
}

/// Parameters of one particle burst, mirroring what a canvas confetti effect consumes.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ConfettiBurst {
    pub particle_count: u32,
    /// Launch direction in degrees, 90 is straight up.
    pub angle: f64,
    /// Cone width in degrees.
    pub spread: f64,
    pub start_velocity: f64,
    /// Lifetime in animation ticks.
    pub ticks: u32,
    pub origin: Origin,
    pub colors: Vec<Rgba8>,
}

impl Default for ConfettiBurst {
    fn default() -> Self {
        Self {
            particle_count: 50,
            angle: 90.0,
            spread: 45.0,
            start_velocity: 45.0,
            ticks: 200,
            origin: Origin { x: 0.5, y: 0.5 },
            colors: CELEBRATION_PALETTE.to_vec(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScheduledBurst {
    /// Offset from the moment the celebration started.
    pub at_ms: u64,
    pub burst: ConfettiBurst,
}

/// Full, pre-rolled schedule of bursts for one celebration.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct CelebrationPlan {
    pub bursts: Vec<ScheduledBurst>,
}

impl CelebrationPlan {
    /// Side cannons every 250ms for three seconds, tapering off, plus two centre bursts.
    pub fn for_yes(rng: &mut Rng64) -> Self {
        let mut bursts = Vec::new();

        let mut at = SIDE_CANNON_INTERVAL_MS;
        while at < SIDE_CANNON_DURATION_MS {
            let left_ms = SIDE_CANNON_DURATION_MS - at;
            let count = (SIDE_CANNON_PEAK_PARTICLES * left_ms as f64
                / SIDE_CANNON_DURATION_MS as f64)
                .round() as u32;
            let side = |rng: &mut Rng64, x: (f64, f64), angle: (f64, f64)| ConfettiBurst {
                particle_count: count,
                angle: rng.range_f64(angle.0, angle.1),
                spread: 360.0,
                start_velocity: 30.0,
                ticks: 60,
                origin: Origin {
                    x: rng.range_f64(x.0, x.1),
                    y: rng.next_f64_01() - 0.2,
                },
                colors: CELEBRATION_PALETTE.to_vec(),
            };
            let left = side(rng, (0.1, 0.3), (45.0, 135.0));
            let right = side(rng, (0.7, 0.9), (225.0, 315.0));
            bursts.push(ScheduledBurst { at_ms: at, burst: left });
            bursts.push(ScheduledBurst {
                at_ms: at,
                burst: right,
            });
            at += SIDE_CANNON_INTERVAL_MS;
        }

        bursts.push(ScheduledBurst {
            at_ms: 100,
            burst: ConfettiBurst {
                particle_count: 100,
                spread: 70.0,
                origin: Origin { x: 0.5, y: 0.6 },
                angle: 90.0,
                ..ConfettiBurst::default()
            },
        });
        bursts.push(ScheduledBurst {
            at_ms: 800,
            burst: ConfettiBurst {
                particle_count: 80,
                spread: 100.0,
                origin: Origin { x: 0.5, y: 0.5 },
                ..ConfettiBurst::default()
            },
        });

        bursts.sort_by_key(|b| b.at_ms);
        Self { bursts }
    }

    /// A single, smaller golden burst.
    pub fn for_date() -> Self {
        Self {
            bursts: vec![ScheduledBurst {
                at_ms: 0,
                burst: ConfettiBurst {
                    particle_count: 60,
                    spread: 100.0,
                    origin: Origin { x: 0.5, y: 0.6 },
                    colors: CELEBRATION_PALETTE[..3].to_vec(),
                    ..ConfettiBurst::default()
                },
            }],
        }
    }

    pub fn total_particles(&self) -> u64 {
        self.bursts
            .iter()
            .map(|b| u64::from(b.burst.particle_count))
            .sum()
    }

    pub fn duration_ms(&self) -> u64 {
        self.bursts.iter().map(|b| b.at_ms).max().unwrap_or(0)
    }
}

/// A heart drifting up behind the celebration message.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FloatingHeart {
    pub duration_s: f64,
    /// Horizontal position, percent of the modal width.
    pub left_pct: f64,
}

pub fn floating_hearts(rng: &mut Rng64, count: usize) -> Vec<FloatingHeart> {
    (0..count)
        .map(|_| FloatingHeart {
            duration_s: 2.0 + rng.next_f64_01() * 2.0,
            left_pct: 50.0 + (rng.next_f64_01() * 40.0 - 20.0),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/confetti.rs"]
mod tests;
