use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle phase reported by a [`TestEvent`].
///
/// Only `pass`, `fail`, `skip` and `output` are acted upon; the remaining
/// phases are decoded so they do not count as malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Start,
    Run,
    Pause,
    Cont,
    Pass,
    Bench,
    Fail,
    Output,
    Skip,
    #[serde(other)]
    Other,
}

impl Action {
    /// Whether this action contributes to the run counters.
    pub fn is_verdict(self) -> bool {
        matches!(self, Action::Pass | Action::Fail | Action::Skip)
    }
}

/// One line of `go test -json` (test2json) output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestEvent {
    #[serde(rename = "Time", default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,

    #[serde(rename = "Action")]
    pub action: Action,

    #[serde(rename = "Package", default)]
    pub package: String,

    /// Empty when the event concerns the whole package.
    #[serde(rename = "Test", default)]
    pub test: String,

    #[serde(rename = "Elapsed", default, skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<f64>,

    #[serde(rename = "Output", default)]
    pub output: String,
}

impl TestEvent {
    pub fn new(action: Action, package: impl Into<String>, test: impl Into<String>) -> Self {
        Self {
            time: None,
            action,
            package: package.into(),
            test: test.into(),
            elapsed: None,
            output: String::new(),
        }
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    pub fn is_package_level(&self) -> bool {
        self.test.is_empty()
    }

    /// Name shown for pass/fail lines: the test if present, else the package.
    pub fn subject(&self) -> &str {
        if self.is_package_level() {
            &self.package
        } else {
            &self.test
        }
    }
}
