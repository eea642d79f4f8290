use crate::flair::{pick, Picker, PARTY_FRAMES, QUIPS, REWARDS};
use crate::render::Renderer;
use crate::test_event::{Action, TestEvent};

use super::summary::RunSummary;

/// More failures than this earn a reward suggestion.
pub const REWARD_THRESHOLD: usize = 3;

const DANCE_ROUNDS: usize = 3;
const FRAMES_PER_ROUND: usize = 2;

/// What is left to do once the stream has been summarized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finale {
    pub summary: RunSummary,
    /// Frames of the victory dance, when one is due.
    pub dance: Option<Vec<&'static str>>,
}

/// Folds decoded events into a [`RunSummary`], rendering each one as it
/// arrives.
pub struct EventProcessor<'a> {
    renderer: &'a mut dyn Renderer,
    picker: &'a mut dyn Picker,
    summary: RunSummary,
}

impl<'a> EventProcessor<'a> {
    pub fn new(renderer: &'a mut dyn Renderer, picker: &'a mut dyn Picker) -> Self {
        Self {
            renderer,
            picker,
            summary: RunSummary::default(),
        }
    }

    pub fn process(&mut self, event: &TestEvent) {
        self.summary.record(event.action);

        match event.action {
            Action::Pass => self.renderer.pass(event),
            Action::Fail => {
                self.renderer.alert();
                let quip = if event.is_package_level() {
                    pick(self.picker, QUIPS).copied()
                } else {
                    None
                };
                self.renderer.fail(event, quip);
            }
            Action::Skip => self.renderer.skip(event),
            Action::Output => {
                if !event.output.is_empty() {
                    self.renderer.output(&event.output);
                }
            }
            _ => {}
        }
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    pub fn renderer(&mut self) -> &mut dyn Renderer {
        &mut *self.renderer
    }

    /// Renders the counters and the reward, and decides on the dance.
    pub fn finish(self, celebrate: bool) -> Finale {
        let summary = self.summary;
        self.renderer.summary(&summary);

        if summary.fail > REWARD_THRESHOLD {
            if let Some(reward) = pick(self.picker, REWARDS) {
                self.renderer.reward(summary.fail, reward);
            }
        }

        let dance = (summary.fail == 0 && celebrate).then(|| {
            (0..DANCE_ROUNDS * FRAMES_PER_ROUND)
                .filter_map(|_| pick(self.picker, PARTY_FRAMES).copied())
                .collect()
        });

        Finale { summary, dance }
    }
}
