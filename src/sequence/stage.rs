use std::fmt;

/// The six ordered steps of the greeting.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Hero,
    Timeline,
    Sunflower,
    Paint,
    Letter,
    /// Shown as an overlay rather than a replacement screen.
    Finale,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Hero,
        Stage::Timeline,
        Stage::Sunflower,
        Stage::Paint,
        Stage::Letter,
        Stage::Finale,
    ];

    /// Stages that get a dot in the progress indicator.
    pub const INDICATED: [Stage; 5] = [
        Stage::Hero,
        Stage::Timeline,
        Stage::Sunflower,
        Stage::Paint,
        Stage::Letter,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<Stage> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    pub fn name(self) -> &'static str {
        match self {
            Stage::Hero => "hero",
            Stage::Timeline => "timeline",
            Stage::Sunflower => "sunflower",
            Stage::Paint => "paint",
            Stage::Letter => "letter",
            Stage::Finale => "finale",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Stage::Hero => "A Little Sketch",
            Stage::Timeline => "Brushstrokes of Us",
            Stage::Sunflower => "What I See in You",
            Stage::Paint => "Paint the Memory",
            Stage::Letter => "A Letter for You",
            Stage::Finale => "One Last Question",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ProgressDot {
    pub stage: Stage,
    pub active: bool,
}

/// One dot per indicated stage; a dot is active once the sequence has reached its stage.
pub fn progress_dots(current: Stage) -> [ProgressDot; 5] {
    Stage::INDICATED.map(|stage| ProgressDot {
        stage,
        active: stage.index() <= current.index(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/stage.rs"]
mod tests;
