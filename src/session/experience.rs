use crate::config::SessionConfig;
use crate::effects::confetti::ConfettiBurst;
use crate::foundation::core::SessionTime;
use crate::foundation::error::SketchResult;
use crate::foundation::math::Rng64;
use crate::paint::controller::PaintSettings;
use crate::sequence::sequencer::{Advance, ScreenSequencer};
use crate::sequence::stage::{ProgressDot, Stage, progress_dots};
use crate::stages::StageState;
use crate::stages::finale::FinaleModal;
use crate::stages::hero::HeroStage;
use crate::stages::letter::LetterStage;
use crate::stages::paint::PaintStage;
use crate::stages::sunflower::SunflowerStage;
use crate::stages::timeline::TimelineStage;

const FINALE_STREAM: u64 = 0xF1_4A_1E;

/// The one sequence screen currently mounted.
pub enum ActiveStage {
    Hero(HeroStage),
    Timeline(TimelineStage),
    Sunflower(SunflowerStage),
    Paint(PaintStage),
    Letter(LetterStage),
}

impl ActiveStage {
    fn mount(stage: Stage, cfg: &SessionConfig, now: SessionTime) -> Option<Self> {
        Some(match stage {
            Stage::Hero => ActiveStage::Hero(HeroStage::new()),
            Stage::Timeline => ActiveStage::Timeline(TimelineStage::new()),
            Stage::Sunflower => ActiveStage::Sunflower(SunflowerStage::new()),
            Stage::Paint => ActiveStage::Paint(PaintStage::new(PaintSettings::from_config(cfg))),
            Stage::Letter => ActiveStage::Letter(LetterStage::new(now)),
            Stage::Finale => return None,
        })
    }

    fn state(&self) -> &dyn StageState {
        match self {
            ActiveStage::Hero(s) => s,
            ActiveStage::Timeline(s) => s,
            ActiveStage::Sunflower(s) => s,
            ActiveStage::Paint(s) => s,
            ActiveStage::Letter(s) => s,
        }
    }

    fn state_mut(&mut self) -> &mut dyn StageState {
        match self {
            ActiveStage::Hero(s) => s,
            ActiveStage::Timeline(s) => s,
            ActiveStage::Sunflower(s) => s,
            ActiveStage::Paint(s) => s,
            ActiveStage::Letter(s) => s,
        }
    }
}

/// Something the host should react to after a [`Experience::tick`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ExperienceEvent {
    Advanced(Advance),
    FinaleOpened,
    Confetti(ConfettiBurst),
}

/// Session context: the sequencer, the mounted stage and the finale overlay.
///
/// Time only moves when the host calls [`Experience::tick`]; every timer in every stage is a
/// deadline against the [`SessionTime`] passed in.
pub struct Experience {
    config: SessionConfig,
    sequencer: ScreenSequencer,
    active: Option<ActiveStage>,
    finale: FinaleModal,
    now: SessionTime,
}

impl Experience {
    pub fn new(config: SessionConfig) -> SketchResult<Self> {
        config.validate()?;
        let sequencer = ScreenSequencer::new(config.transition_guard_ms);
        let finale = FinaleModal::new(Rng64::new(config.seed).fork(FINALE_STREAM).next_u64());
        let active = ActiveStage::mount(Stage::Hero, &config, SessionTime::ZERO);
        Ok(Self {
            config,
            sequencer,
            active,
            finale,
            now: SessionTime::ZERO,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn now(&self) -> SessionTime {
        self.now
    }

    pub fn current(&self) -> Stage {
        self.sequencer.current()
    }

    pub fn is_transitioning(&self) -> bool {
        self.sequencer.is_transitioning()
    }

    pub fn visible_screen(&self) -> Option<Stage> {
        self.sequencer.visible_screen()
    }

    pub fn progress_dots(&self) -> [ProgressDot; 5] {
        progress_dots(self.current())
    }

    pub fn active(&self) -> Option<&ActiveStage> {
        self.active.as_ref()
    }

    /// Whether the mounted stage is offering "continue".
    pub fn can_continue(&self) -> bool {
        !self.sequencer.is_transitioning()
            && self.active.as_ref().is_some_and(|s| s.state().is_ready())
    }

    /// Press the mounted stage's continue action.
    ///
    /// Returns `false` if the stage is not ready yet, a fade is already running, or the sequence
    /// has reached the finale.
    pub fn request_continue(&mut self, now: SessionTime) -> bool {
        self.now = self.now.max(now);
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if !active.state().is_ready() {
            return false;
        }
        if let ActiveStage::Hero(hero) = active {
            hero.open();
        }
        self.sequencer.signal_complete(self.now)
    }

    /// Advance the clock: fire stage timers, finish fades and release due confetti.
    #[tracing::instrument(skip(self), fields(stage = %self.sequencer.current()))]
    pub fn tick(&mut self, now: SessionTime) -> Vec<ExperienceEvent> {
        self.now = self.now.max(now);
        let now = self.now;
        let mut events = Vec::new();

        if let Some(active) = self.active.as_mut() {
            active.state_mut().tick(now);
        }

        if let Some(advance) = self.sequencer.tick(now) {
            // Dropping the previous stage tears down its surface and timers.
            self.active = ActiveStage::mount(advance.to, &self.config, now);
            events.push(ExperienceEvent::Advanced(advance));
            if advance.finale_opened {
                self.finale.open(now);
                events.push(ExperienceEvent::FinaleOpened);
            }
        }

        events.extend(
            self.finale
                .tick(now)
                .into_iter()
                .map(ExperienceEvent::Confetti),
        );
        events
    }

    pub fn finale(&self) -> &FinaleModal {
        &self.finale
    }

    pub fn finale_mut(&mut self) -> &mut FinaleModal {
        &mut self.finale
    }

    pub fn close_finale(&mut self) {
        self.finale.close();
        self.sequencer.close_finale();
    }

    pub fn hero_mut(&mut self) -> Option<&mut HeroStage> {
        match self.active.as_mut()? {
            ActiveStage::Hero(s) => Some(s),
            _ => None,
        }
    }

    pub fn timeline_mut(&mut self) -> Option<&mut TimelineStage> {
        match self.active.as_mut()? {
            ActiveStage::Timeline(s) => Some(s),
            _ => None,
        }
    }

    pub fn sunflower_mut(&mut self) -> Option<&mut SunflowerStage> {
        match self.active.as_mut()? {
            ActiveStage::Sunflower(s) => Some(s),
            _ => None,
        }
    }

    pub fn paint_mut(&mut self) -> Option<&mut PaintStage> {
        match self.active.as_mut()? {
            ActiveStage::Paint(s) => Some(s),
            _ => None,
        }
    }

    pub fn letter_mut(&mut self) -> Option<&mut LetterStage> {
        match self.active.as_mut()? {
            ActiveStage::Letter(s) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/experience.rs"]
mod tests;
