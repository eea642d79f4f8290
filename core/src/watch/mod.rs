//! Change watcher: directory registration, notification filtering and the
//! debounced re-run loop.

mod debounce;
mod event_loop;
mod filter;
mod signal;
mod source;
mod walk;

pub use debounce::Debouncer;
pub use event_loop::{watch_loop, WatchExit, WatchHandler};
pub use filter::{is_hidden_dir_name, is_under_hidden_dir, ChangeFilter};
pub use signal::shutdown_signal;
pub use source::{NotifySource, WatchSources};
pub use walk::collect_watch_dirs;
