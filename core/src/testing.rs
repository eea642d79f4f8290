use crate::error::RunnerError;
use crate::render::Renderer;
use crate::runner::RunSummary;
use crate::test_event::{DecodeError, TestEvent};

#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Welcome,
    FunDisabled,
    Pass(String),
    Fail { subject: String, quip: Option<String> },
    Skip(String),
    Output(String),
    Alert,
    DecodeError,
    RunError(String),
    Summary(RunSummary),
    Reward { failures: usize, reward: String },
    DanceStart,
    DanceFrame(String),
    DanceEnd,
    TestsFailed,
    Clear,
    ChangesDetected,
    WatchError,
    Goodbye,
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub seen: Vec<Rendered>,
}

impl RecordingRenderer {
    pub fn count(&self, pred: impl Fn(&Rendered) -> bool) -> usize {
        self.seen.iter().filter(|r| pred(r)).count()
    }
}

impl Renderer for RecordingRenderer {
    fn welcome(&mut self) {
        self.seen.push(Rendered::Welcome);
    }

    fn fun_disabled(&mut self) {
        self.seen.push(Rendered::FunDisabled);
    }

    fn pass(&mut self, event: &TestEvent) {
        self.seen.push(Rendered::Pass(event.subject().to_string()));
    }

    fn fail(&mut self, event: &TestEvent, quip: Option<&str>) {
        self.seen.push(Rendered::Fail {
            subject: event.subject().to_string(),
            quip: quip.map(str::to_string),
        });
    }

    fn skip(&mut self, event: &TestEvent) {
        self.seen.push(Rendered::Skip(event.package.clone()));
    }

    fn output(&mut self, text: &str) {
        self.seen.push(Rendered::Output(text.to_string()));
    }

    fn alert(&mut self) {
        self.seen.push(Rendered::Alert);
    }

    fn decode_error(&mut self, _err: &DecodeError) {
        self.seen.push(Rendered::DecodeError);
    }

    fn run_error(&mut self, err: &RunnerError) {
        self.seen.push(Rendered::RunError(err.to_string()));
    }

    fn summary(&mut self, summary: &RunSummary) {
        self.seen.push(Rendered::Summary(*summary));
    }

    fn reward(&mut self, failures: usize, reward: &str) {
        self.seen.push(Rendered::Reward {
            failures,
            reward: reward.to_string(),
        });
    }

    fn dance_start(&mut self) {
        self.seen.push(Rendered::DanceStart);
    }

    fn dance_frame(&mut self, frame: &str) {
        self.seen.push(Rendered::DanceFrame(frame.to_string()));
    }

    fn dance_end(&mut self) {
        self.seen.push(Rendered::DanceEnd);
    }

    fn tests_failed(&mut self) {
        self.seen.push(Rendered::TestsFailed);
    }

    fn clear_screen(&mut self) {
        self.seen.push(Rendered::Clear);
    }

    fn changes_detected(&mut self) {
        self.seen.push(Rendered::ChangesDetected);
    }

    fn watch_error(&mut self, _err: &notify::Error) {
        self.seen.push(Rendered::WatchError);
    }

    fn goodbye(&mut self) {
        self.seen.push(Rendered::Goodbye);
    }
}
