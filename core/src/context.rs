use std::time::Duration;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::error::WatchError;
use crate::flair::Picker;
use crate::render::Renderer;
use crate::runner::{run_tests, RunContext, RunReport};
use crate::watch::{
    collect_watch_dirs, shutdown_signal, watch_loop, ChangeFilter, NotifySource, WatchExit,
    WatchHandler, WatchSources,
};

/// Everything a run needs, built once at start-up.
pub struct AppContext {
    cfg: AppConfig,
    renderer: Box<dyn Renderer>,
    picker: Box<dyn Picker>,
    runs: usize,
}

impl AppContext {
    pub fn new(cfg: AppConfig, renderer: Box<dyn Renderer>, picker: Box<dyn Picker>) -> Self {
        Self {
            cfg,
            renderer,
            picker,
            runs: 0,
        }
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.cfg
    }

    pub fn renderer(&mut self) -> &mut dyn Renderer {
        self.renderer.as_mut()
    }

    pub fn runs(&self) -> usize {
        self.runs
    }

    pub async fn run_once(&mut self) -> RunReport {
        self.runs += 1;
        run_tests(RunContext {
            cfg: &self.cfg,
            renderer: self.renderer.as_mut(),
            picker: self.picker.as_mut(),
        })
        .await
    }

    /// Registers the watch root and loops until a shutdown signal arrives.
    pub async fn watch(&mut self) -> Result<WatchExit, WatchError> {
        let dirs = collect_watch_dirs(&self.cfg.watch.root)?;
        let (source, events, errors) = NotifySource::start(&dirs)?;
        tracing::debug!(target: "slothtest.watch", watched = source.watched(), "watching");

        let sources = WatchSources {
            events,
            errors,
            shutdown: Box::pin(shutdown_signal()),
        };
        let filter = ChangeFilter::new(self.cfg.watch.extension.clone())
            .with_root(&self.cfg.watch.root);
        let delay = Duration::from_millis(self.cfg.watch.debounce_ms);

        let exit = watch_loop(sources, &filter, delay, self).await;
        drop(source);
        Ok(exit)
    }
}

#[async_trait]
impl WatchHandler for AppContext {
    async fn run_tests(&mut self) {
        self.run_once().await;
    }

    fn changes_detected(&mut self) {
        self.renderer.clear_screen();
        self.renderer.changes_detected();
    }

    fn source_error(&mut self, err: &notify::Error) {
        self.renderer.watch_error(err);
    }

    fn shutting_down(&mut self) {
        self.renderer.goodbye();
    }
}
