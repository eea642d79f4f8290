use std::path::PathBuf;

use futures::future::BoxFuture;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::error::WatchError;

/// The inputs multiplexed by the watch loop.
pub struct WatchSources {
    pub events: mpsc::UnboundedReceiver<Event>,
    pub errors: mpsc::UnboundedReceiver<notify::Error>,
    pub shutdown: BoxFuture<'static, ()>,
}

/// Keeps the underlying OS watcher alive. Notifications stop once this is
/// dropped.
pub struct NotifySource {
    _watcher: RecommendedWatcher,
    watched: usize,
}

impl NotifySource {
    /// Registers each directory non-recursively and forwards notifications
    /// and errors into two channels.
    pub fn start(
        dirs: &[PathBuf],
    ) -> Result<
        (
            Self,
            mpsc::UnboundedReceiver<Event>,
            mpsc::UnboundedReceiver<notify::Error>,
        ),
        WatchError,
    > {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (error_tx, error_rx) = mpsc::unbounded_channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    let _ = event_tx.send(event);
                }
                Err(err) => {
                    let _ = error_tx.send(err);
                }
            },
            Config::default(),
        )
        .map_err(WatchError::Init)?;

        for dir in dirs {
            watcher
                .watch(dir, RecursiveMode::NonRecursive)
                .map_err(|source| WatchError::Register {
                    path: dir.clone(),
                    source,
                })?;
        }

        tracing::info!(target: "slothtest.watch", directories = dirs.len(), "file watcher started");
        Ok((
            Self {
                _watcher: watcher,
                watched: dirs.len(),
            },
            event_rx,
            error_rx,
        ))
    }

    pub fn watched(&self) -> usize {
        self.watched
    }
}
