use std::time::Duration;

use async_trait::async_trait;

use super::debounce::Debouncer;
use super::filter::ChangeFilter;
use super::source::WatchSources;

/// What the watch loop does when something happens.
#[async_trait]
pub trait WatchHandler: Send {
    /// Runs the test command from scratch.
    async fn run_tests(&mut self);
    /// Called right before a debounced re-run.
    fn changes_detected(&mut self);
    fn source_error(&mut self, err: &notify::Error);
    fn shutting_down(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchExit {
    Signal,
    SourceClosed,
}

/// Initial run, then re-run after every burst of qualifying changes once
/// `delay` has passed without another one.
///
/// A shutdown during a run returns immediately; the in-flight test command
/// is left alone.
pub async fn watch_loop<H>(
    sources: WatchSources,
    filter: &ChangeFilter,
    delay: Duration,
    handler: &mut H,
) -> WatchExit
where
    H: WatchHandler + ?Sized,
{
    let WatchSources {
        mut events,
        mut errors,
        mut shutdown,
    } = sources;
    let mut debouncer = Debouncer::new(delay);
    let mut errors_open = true;

    tokio::select! {
        _ = handler.run_tests() => {}
        _ = &mut shutdown => {
            handler.shutting_down();
            return WatchExit::Signal;
        }
    }

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                handler.shutting_down();
                return WatchExit::Signal;
            }

            maybe_event = events.recv() => {
                let Some(event) = maybe_event else {
                    tracing::info!(target: "slothtest.watch", "notification channel closed");
                    return WatchExit::SourceClosed;
                };
                if filter.accepts(&event) {
                    tracing::debug!(
                        target: "slothtest.watch",
                        paths = ?event.paths,
                        "change detected, debouncing"
                    );
                    debouncer.reset();
                }
            }

            maybe_err = errors.recv(), if errors_open => {
                match maybe_err {
                    Some(err) => {
                        tracing::warn!(
                            target: "slothtest.watch",
                            error = %err,
                            "file watcher error"
                        );
                        handler.source_error(&err);
                    }
                    None => errors_open = false,
                }
            }

            _ = debouncer.elapsed() => {
                handler.changes_detected();
                tokio::select! {
                    _ = handler.run_tests() => {}
                    _ = &mut shutdown => {
                        handler.shutting_down();
                        return WatchExit::Signal;
                    }
                }
            }
        }
    }
}
