//! Display sink used by the event processor, the run orchestration and the
//! change watcher.
//!
//! `core` never writes to the terminal itself; concrete renderers live in the
//! plugins crate.

use crate::error::RunnerError;
use crate::runner::RunSummary;
use crate::test_event::{DecodeError, TestEvent};

pub trait Renderer: Send {
    fn welcome(&mut self);
    fn fun_disabled(&mut self);

    fn pass(&mut self, event: &TestEvent);
    /// `quip` is only set for package-level failures.
    fn fail(&mut self, event: &TestEvent, quip: Option<&str>);
    fn skip(&mut self, event: &TestEvent);
    fn output(&mut self, text: &str);
    /// Attention side effect accompanying a failure.
    fn alert(&mut self);

    fn decode_error(&mut self, err: &DecodeError);
    fn run_error(&mut self, err: &RunnerError);

    fn summary(&mut self, summary: &RunSummary);
    fn reward(&mut self, failures: usize, reward: &str);
    fn dance_start(&mut self);
    fn dance_frame(&mut self, frame: &str);
    fn dance_end(&mut self);
    /// The test command itself exited unsuccessfully.
    fn tests_failed(&mut self);

    fn clear_screen(&mut self);
    fn changes_detected(&mut self);
    fn watch_error(&mut self, err: &notify::Error);
    fn goodbye(&mut self);
}
