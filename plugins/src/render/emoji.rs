use std::fmt;
use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{Clear, ClearType};
use slothtest_core::error::RunnerError;
use slothtest_core::flair::{pick, Picker, PASS_EMOJIS};
use slothtest_core::render::Renderer;
use slothtest_core::runner::RunSummary;
use slothtest_core::test_event::{DecodeError, TestEvent};

use super::error_chain;

const FAIL_SOUND: &str = "💥🔥📢 BZZT!";
const SKIP_SOUND: &str = "💤😴🌙";

/// Decorated output: colors, emojis, bells and dancing.
pub struct EmojiRenderer<W> {
    out: W,
    picker: Box<dyn Picker>,
    color: bool,
}

impl<W: Write + Send> EmojiRenderer<W> {
    pub fn new(out: W, picker: Box<dyn Picker>) -> Self {
        Self {
            out,
            picker,
            color: true,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, s: &str, color: Color) -> String {
        if self.color {
            s.with(color).to_string()
        } else {
            s.to_string()
        }
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

    fn random_emoji(&mut self) -> &'static str {
        pick(self.picker.as_mut(), PASS_EMOJIS).copied().unwrap_or("🦥")
    }
}

impl<W: Write + Send> Renderer for EmojiRenderer<W> {
    fn welcome(&mut self) {
        let banner = self.paint(
            "\n🦥 SlothTest v1.0 - Go tests but sloooowly awesome!",
            Color::Cyan,
        );
        self.line(format_args!("{banner}"));
    }

    fn fun_disabled(&mut self) {
        self.line(format_args!("😢 Fun disabled. You monster."));
    }

    fn pass(&mut self, event: &TestEvent) {
        let mark = self.paint("✔", Color::Green);
        let emoji = self.random_emoji();
        if event.is_package_level() {
            self.line(format_args!("{mark} {emoji} {}", event.package));
        } else {
            self.line(format_args!("    {mark} {emoji} {}", event.test));
        }
    }

    fn fail(&mut self, event: &TestEvent, quip: Option<&str>) {
        let mark = self.paint("✖", Color::Red);
        if event.is_package_level() {
            self.line(format_args!("{mark} 💩 {}", event.package));
            if let Some(quip) = quip {
                self.line(format_args!("{quip}"));
            }
        } else {
            self.line(format_args!("    {mark} 💩 {} {FAIL_SOUND}", event.test));
        }
    }

    fn skip(&mut self, event: &TestEvent) {
        let mark = self.paint("⚠", Color::Yellow);
        self.line(format_args!("{mark} 🦥 {} {SKIP_SOUND}", event.package));
    }

    fn output(&mut self, text: &str) {
        self.emit(format_args!("📜 {text}"));
    }

    fn alert(&mut self) {
        self.emit(format_args!("\x07"));
    }

    fn decode_error(&mut self, err: &DecodeError) {
        self.line(format_args!("🤯 Error decoding JSON: {}", error_chain(err)));
    }

    fn run_error(&mut self, err: &RunnerError) {
        let icon = match err {
            RunnerError::Spawn { .. } => "😱",
            RunnerError::StdoutUnavailable => "😡",
        };
        self.line(format_args!("{icon} {}", error_chain(err)));
    }

    fn summary(&mut self, summary: &RunSummary) {
        let title = self.paint("📊 Test Summary:", Color::Cyan);
        let pass = self.paint("✔", Color::Green);
        let fail = self.paint("✖", Color::Red);
        let skip = self.paint("⚠", Color::Yellow);
        self.line(format_args!("\n{title}"));
        self.line(format_args!("  {pass} Passed: {}", summary.pass));
        self.line(format_args!("  {fail} Failed: {}", summary.fail));
        self.line(format_args!("  {skip} Skipped: {}", summary.skip));
    }

    fn reward(&mut self, failures: usize, reward: &str) {
        self.line(format_args!(
            "\n  🎰 BINGO! {failures} failures! Reward: {reward}"
        ));
    }

    fn dance_start(&mut self) {
        self.line(format_args!("\n🎉 Victory Dance Sequence Initiated!"));
    }

    fn dance_frame(&mut self, frame: &str) {
        self.emit(format_args!("\r{frame} "));
    }

    fn dance_end(&mut self) {
        self.line(format_args!("\n🦜 Dance party complete! You rock! 🤘"));
    }

    fn tests_failed(&mut self) {
        let msg = self.paint("😭 Tests failed. Sloth is disappointed.", Color::Red);
        self.line(format_args!("{msg}"));
    }

    fn clear_screen(&mut self) {
        if let Err(err) = crossterm::execute!(self.out, Clear(ClearType::All), MoveTo(0, 0)) {
            tracing::trace!(target: "slothtest.render", error = %err, "clear failed");
        }
    }

    fn changes_detected(&mut self) {
        let msg = self.paint("🦥 Sloth detected changes! Re-running tests...", Color::Blue);
        self.line(format_args!("{msg}"));
    }

    fn watch_error(&mut self, err: &notify::Error) {
        self.line(format_args!("😱 Watcher error: {err}"));
    }

    fn goodbye(&mut self) {
        let msg = self.paint(
            "\n🦥 Sloth says goodbye! Catch you on the flip side!",
            Color::Cyan,
        );
        self.line(format_args!("{msg}"));
    }
}
