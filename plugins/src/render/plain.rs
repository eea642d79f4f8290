use std::fmt;
use std::io::Write;

use slothtest_core::error::RunnerError;
use slothtest_core::render::Renderer;
use slothtest_core::runner::RunSummary;
use slothtest_core::test_event::{DecodeError, TestEvent};

use super::error_chain;

/// Undecorated output for `--emojis=false`: ASCII verdict lines, no quips,
/// no bell, no colors, no screen clearing.
pub struct PlainRenderer<W> {
    out: W,
}

impl<W: Write + Send> PlainRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        let res = self.out.write_fmt(args).and_then(|_| self.out.flush());
        if let Err(err) = res {
            tracing::trace!(target: "slothtest.render", error = %err, "write failed");
        }
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        self.emit(format_args!("{args}\n"));
    }
}

impl<W: Write + Send> Renderer for PlainRenderer<W> {
    fn welcome(&mut self) {
        self.line(format_args!("\nSlothTest v1.0 - Go tests but sloooowly awesome!"));
    }

    fn fun_disabled(&mut self) {
        self.line(format_args!("Fun disabled. You monster."));
    }

    fn pass(&mut self, event: &TestEvent) {
        let indent = if event.is_package_level() { "" } else { "    " };
        self.line(format_args!("{indent}PASS {}", event.subject()));
    }

    fn fail(&mut self, event: &TestEvent, _quip: Option<&str>) {
        let indent = if event.is_package_level() { "" } else { "    " };
        self.line(format_args!("{indent}FAIL {}", event.subject()));
    }

    fn skip(&mut self, event: &TestEvent) {
        self.line(format_args!("SKIP {}", event.package));
    }

    fn output(&mut self, text: &str) {
        self.emit(format_args!("{text}"));
    }

    fn alert(&mut self) {}

    fn decode_error(&mut self, err: &DecodeError) {
        self.line(format_args!("Error decoding JSON: {}", error_chain(err)));
    }

    fn run_error(&mut self, err: &RunnerError) {
        self.line(format_args!("{}", error_chain(err)));
    }

    fn summary(&mut self, summary: &RunSummary) {
        self.line(format_args!("\nTest Summary:"));
        self.line(format_args!("  + Passed: {}", summary.pass));
        self.line(format_args!("  x Failed: {}", summary.fail));
        self.line(format_args!("  ~ Skipped: {}", summary.skip));
    }

    fn reward(&mut self, failures: usize, reward: &str) {
        self.line(format_args!("\n  BINGO! {failures} failures! Reward: {reward}"));
    }

    fn dance_start(&mut self) {
        self.line(format_args!("\nVictory Dance Sequence Initiated!"));
    }

    fn dance_frame(&mut self, frame: &str) {
        self.emit(format_args!("\r{frame} "));
    }

    fn dance_end(&mut self) {
        self.line(format_args!("\nDance party complete! You rock!"));
    }

    fn tests_failed(&mut self) {
        self.line(format_args!("Tests failed. Sloth is disappointed."));
    }

    fn clear_screen(&mut self) {}

    fn changes_detected(&mut self) {
        self.line(format_args!("\nSloth detected changes! Re-running tests..."));
    }

    fn watch_error(&mut self, err: &notify::Error) {
        self.line(format_args!("Watcher error: {err}"));
    }

    fn goodbye(&mut self) {
        self.line(format_args!("\nSloth says goodbye! Catch you on the flip side!"));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use slothtest_core::test_event::Action;

    use super::*;

    fn text(r: PlainRenderer<Vec<u8>>) -> String {
        String::from_utf8(r.into_inner()).unwrap()
    }

    #[test]
    fn verdicts_are_plain_and_output_is_verbatim() {
        let mut r = PlainRenderer::new(Vec::new());
        r.output("--- FAIL: TestSubtraction (0.00s)\n");
        r.alert();
        r.fail(
            &TestEvent::new(Action::Fail, "example.com/m", "TestSubtraction"),
            None,
        );
        r.fail(
            &TestEvent::new(Action::Fail, "example.com/m", ""),
            Some("Was that test written by a cat? 🐾"),
        );
        r.pass(&TestEvent::new(Action::Pass, "example.com/n", ""));
        assert_eq!(
            text(r),
            "--- FAIL: TestSubtraction (0.00s)\n    FAIL TestSubtraction\nFAIL example.com/m\nPASS example.com/n\n"
        );
    }

    #[test]
    fn summary_is_ascii_only() {
        let mut r = PlainRenderer::new(Vec::new());
        r.summary(&RunSummary {
            pass: 2,
            fail: 0,
            skip: 1,
        });
        let out = text(r);
        assert!(out.is_ascii());
        assert!(out.contains("Passed: 2"));
        assert!(out.contains("Failed: 0"));
        assert!(out.contains("Skipped: 1"));
    }

    #[test]
    fn decode_error_names_the_line() {
        let source = serde_json::from_str::<TestEvent>("{not json").unwrap_err();
        let err = DecodeError::InvalidJson { line: 3, source };
        let mut r = PlainRenderer::new(Vec::new());
        r.decode_error(&err);
        assert!(text(r).starts_with("Error decoding JSON: invalid event on line 3: "));
    }
}
