use crate::test_event::Action;

/// Counters for one run. A new run always starts from `RunSummary::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
}

impl RunSummary {
    pub fn record(&mut self, action: Action) {
        match action {
            Action::Pass => self.pass += 1,
            Action::Fail => self.fail += 1,
            Action::Skip => self.skip += 1,
            _ => {}
        }
    }

    pub fn total(&self) -> usize {
        self.pass + self.fail + self.skip
    }

    pub fn has_failures(&self) -> bool {
        self.fail > 0
    }
}
