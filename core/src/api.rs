//! Stable re-exports for consumers (`cli`, `plugins`).
//!
//! Prefer importing from `slothtest_core::api` instead of reaching into internal modules.

pub use crate::config::{
    apply_env_overrides, load_default, load_from_path, AppConfig, DisplayConfig, ExitConfig,
};
pub use crate::context::AppContext;
pub use crate::error::{CliError, ConfigError, RunnerError, WatchError};
pub use crate::flair::{pick, Picker, PASS_EMOJIS};
pub use crate::render::Renderer;
pub use crate::runner::{process_exit_code, RunReport, RunSummary};
pub use crate::test_event::{Action, DecodeError, TestEvent};
pub use crate::watch::WatchExit;
