use std::path::Path;

use crate::export::letter::LetterDocument;
use crate::foundation::core::SessionTime;
use crate::sequence::scheduler::Scheduler;
use crate::sequence::stage::Stage;
use crate::stages::StageState;

/// Delay before "continue" is offered, long enough for the letter to write itself out.
pub const LETTER_CONTINUE_DELAY_MS: u64 = 4_000;

pub const LETTER_DOWNLOAD_NAME: &str = "my-valentine-letter.png";

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Salutation,
    Body,
    Blank,
    Highlight,
    Signature,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LetterLine {
    pub text: &'static str,
    pub style: LineStyle,
}

const fn line(text: &'static str, style: LineStyle) -> LetterLine {
    LetterLine { text, style }
}

const fn body(text: &'static str) -> LetterLine {
    line(text, LineStyle::Body)
}

const BLANK: LetterLine = line("", LineStyle::Blank);

pub static LETTER: [LetterLine; 18] = [
    line("Mon \u{e9}toile,", LineStyle::Salutation),
    BLANK,
    body("I like how you move through the world \u{2014} thoughtfully, deliberately,"),
    body("with a quiet kind of courage. You question things. You try again"),
    body("when it would be easier not to. You keep becoming."),
    BLANK,
    body("Being with you has made me steadier, sharper, and more honest"),
    body("with myself. Even when things weren't smooth, we chose to understand"),
    body("each other instead of walking away. That matters to me more than"),
    body("grand gestures ever could."),
    BLANK,
    body("I don't need a perfect story. I want more real days with you \u{2014}"),
    body("conversations that stretch late, shared silences that feel full,"),
    body("and the slow work of growing side by side."),
    BLANK,
    line("Will you be my Valentine?", LineStyle::Highlight),
    BLANK,
    line("\u{2014} Rahul", LineStyle::Signature),
];

/// Milliseconds after mount at which line `index` starts to appear.
pub fn line_delay_ms(index: usize) -> u64 {
    300 + 200 * index as u64
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LetterTimer {
    ShowContinue,
}

/// The letter screen: lines write in over time, and the letter can be saved as an image.
#[derive(Clone, Debug)]
pub struct LetterStage {
    mounted_at: SessionTime,
    show_continue: bool,
    timers: Scheduler<LetterTimer>,
}

impl LetterStage {
    pub fn new(now: SessionTime) -> Self {
        let mut timers = Scheduler::new();
        timers.schedule_after(now, LETTER_CONTINUE_DELAY_MS, LetterTimer::ShowContinue);
        Self {
            mounted_at: now,
            show_continue: false,
            timers,
        }
    }

    /// Number of leading lines that have started to appear by `now`.
    pub fn visible_lines(&self, now: SessionTime) -> usize {
        let elapsed = now.millis_since(self.mounted_at);
        (0..LETTER.len())
            .take_while(|&i| line_delay_ms(i) <= elapsed)
            .count()
    }

    /// Save the letter as a PNG. Synchronous and best-effort: failures are logged, never surfaced.
    #[tracing::instrument(skip(self))]
    pub fn download(&self, path: &Path) -> bool {
        match LetterDocument::standard().export_png(path) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(%err, "error creating letter");
                false
            }
        }
    }
}

impl StageState for LetterStage {
    fn stage(&self) -> Stage {
        Stage::Letter
    }

    fn tick(&mut self, now: SessionTime) {
        for timer in self.timers.drain_due(now) {
            match timer {
                LetterTimer::ShowContinue => self.show_continue = true,
            }
        }
    }

    fn is_ready(&self) -> bool {
        self.show_continue
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stages/letter.rs"]
mod tests;
