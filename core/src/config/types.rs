use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub runner: RunnerConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub exit: ExitConfig,
}

impl AppConfig {
    /// Applies `nofun`: decoration and celebration are switched off no matter
    /// what the other toggles say.
    pub fn resolve(mut self) -> Self {
        if self.display.nofun {
            self.display.emojis = false;
            self.display.dance = false;
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_emojis")]
    pub emojis: bool,

    #[serde(default)]
    pub dance: bool,

    #[serde(default)]
    pub nofun: bool,

    #[serde(default = "default_progress_tick_ms")]
    pub progress_tick_ms: u64,

    #[serde(default = "default_dance_frame_ms")]
    pub dance_frame_ms: u64,
}

fn default_emojis() -> bool {
    true
}

fn default_progress_tick_ms() -> u64 {
    100
}

fn default_dance_frame_ms() -> u64 {
    300
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            emojis: default_emojis(),
            dance: false,
            nofun: false,
            progress_tick_ms: default_progress_tick_ms(),
            dance_frame_ms: default_dance_frame_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default = "default_args")]
    pub args: Vec<String>,

    #[serde(default = "default_workdir")]
    pub workdir: PathBuf,
}

fn default_program() -> String {
    "go".to_string()
}

fn default_args() -> Vec<String> {
    vec!["test".into(), "./...".into(), "-json".into()]
}

fn default_workdir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
            workdir: default_workdir(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// File extension (without the dot) whose changes trigger a re-run.
    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default = "default_workdir")]
    pub root: PathBuf,
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_extension() -> String {
    "go".to_string()
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            debounce_ms: default_debounce_ms(),
            extension: default_extension(),
            root: default_workdir(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExitConfig {
    /// Exit with status 1 after a single run that saw failures. Watch mode
    /// always exits 0.
    #[serde(default)]
    pub nonzero_on_failure: bool,
}
