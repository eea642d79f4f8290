pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod flair;
pub mod render;
pub mod runner;
pub mod test_event;
pub mod watch;

#[cfg(test)]
mod testing;

pub use context::AppContext;
