use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const MOON: [&str; 8] = ["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"];
const BAR: [&str; 4] = ["|", "/", "-", "\\"];

/// Progress indicator bound to one run. It ticks on indicatif's own thread
/// and is cleared when the guard is dropped.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn start(visible: bool, tick: Duration) -> Self {
        if !visible {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let frames: Vec<String> = (0..MOON.len())
            .map(|i| format!("{} Running tests... {}", MOON[i], BAR[i % BAR.len()]))
            .chain(std::iter::once(String::new()))
            .collect();
        let frames: Vec<&str> = frames.iter().map(String::as_str).collect();

        let style = ProgressStyle::with_template("{spinner}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&frames);

        let bar = ProgressBar::new_spinner().with_style(style);
        bar.enable_steady_tick(tick);
        tracing::trace!(
            target: "slothtest.progress",
            tick_ms = tick.as_millis() as u64,
            "spinner started"
        );
        Self { bar }
    }

    /// Runs `f` with the spinner line hidden so output does not interleave.
    pub fn suspend<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.bar.suspend(f)
    }

    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_spinner_still_runs_closures() {
        let spinner = Spinner::start(false, Duration::from_millis(100));
        assert!(spinner.is_hidden());
        let v = spinner.suspend(|| 7);
        assert_eq!(v, 7);
    }
}
