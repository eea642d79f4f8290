pub mod exit;
mod processor;
mod run;
mod spinner;
mod summary;

pub use exit::{normalize_exit, process_exit_code};
pub use processor::{EventProcessor, Finale, REWARD_THRESHOLD};
pub use run::{play_victory_dance, run_tests, RunContext, RunReport};
pub use spinner::Spinner;
pub use summary::RunSummary;
