use crate::sequence::stage::Stage;
use crate::stages::StageState;

pub const HERO_TITLE: &str = "A Little Sketch";
pub const HERO_SUBTITLE: &str = "For someone who notices the details";
pub const HERO_CTA: &str = "Open this little sketch";
pub const HERO_HINT: &str = "Take your time \u{2022} No rush";

/// Opening card. Always ready; the call to action is the completion signal.
#[derive(Clone, Debug, Default)]
pub struct HeroStage {
    opened: bool,
}

impl HeroStage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Press the call to action.
    pub fn open(&mut self) {
        self.opened = true;
    }

    pub fn was_opened(&self) -> bool {
        self.opened
    }
}

impl StageState for HeroStage {
    fn stage(&self) -> Stage {
        Stage::Hero
    }

    fn is_ready(&self) -> bool {
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stages/hero.rs"]
mod tests;
