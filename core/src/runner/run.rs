use std::process::Stdio;
use std::time::Duration;

use tokio::io::BufReader;
use tokio::process::{Child, Command};
use tracing::Instrument;

use crate::config::{AppConfig, RunnerConfig};
use crate::error::RunnerError;
use crate::flair::Picker;
use crate::render::Renderer;
use crate::test_event::TestEventStream;

use super::exit::normalize_exit;
use super::processor::EventProcessor;
use super::spinner::Spinner;
use super::summary::RunSummary;

/// Outcome of a single run of the test command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// `None` when the run aborted before any event was read.
    pub summary: Option<RunSummary>,
    pub decode_failed: bool,
    /// Normalized exit code, if the child could be waited on.
    pub child_exit: Option<i32>,
}

impl RunReport {
    pub fn aborted() -> Self {
        Self {
            summary: None,
            decode_failed: false,
            child_exit: None,
        }
    }

    pub fn is_clean(&self) -> bool {
        let no_failures = self.summary.is_some_and(|s| !s.has_failures());
        no_failures && !self.decode_failed && self.child_exit == Some(0)
    }
}

pub struct RunContext<'a> {
    pub cfg: &'a AppConfig,
    pub renderer: &'a mut dyn Renderer,
    pub picker: &'a mut dyn Picker,
}

/// Runs the test command once: streams its events through an
/// [`EventProcessor`], prints the summary and checks the exit status.
pub async fn run_tests(ctx: RunContext<'_>) -> RunReport {
    let run_id = uuid::Uuid::new_v4().to_string();
    let span = tracing::info_span!(target: "slothtest.runner", "run", run_id = %run_id);
    run_tests_inner(ctx).instrument(span).await
}

async fn run_tests_inner(ctx: RunContext<'_>) -> RunReport {
    let RunContext {
        cfg,
        renderer,
        picker,
    } = ctx;

    let mut child = match spawn(&cfg.runner) {
        Ok(child) => child,
        Err(err) => {
            tracing::error!(target: "slothtest.runner", error = %err, "run aborted");
            renderer.run_error(&err);
            return RunReport::aborted();
        }
    };

    let Some(stdout) = child.stdout.take() else {
        let err = RunnerError::StdoutUnavailable;
        tracing::error!(target: "slothtest.runner", error = %err, "run aborted");
        renderer.run_error(&err);
        let _ = child.start_kill();
        return RunReport::aborted();
    };

    let spinner = Spinner::start(
        cfg.display.emojis,
        Duration::from_millis(cfg.display.progress_tick_ms),
    );
    let mut stream = TestEventStream::new(BufReader::new(stdout));
    let mut processor = EventProcessor::new(renderer, picker);
    let mut decode_failed = false;

    loop {
        match stream.next_event().await {
            Ok(Some(event)) => spinner.suspend(|| processor.process(&event)),
            Ok(None) => break,
            Err(err) => {
                tracing::warn!(
                    target: "slothtest.runner",
                    error = %err,
                    lines = stream.lines_read(),
                    "event stream decoding stopped"
                );
                spinner.suspend(|| processor.renderer().decode_error(&err));
                decode_failed = true;
                break;
            }
        }
    }

    drop(spinner);
    // Close our end of the pipe so a child still writing cannot block `wait`.
    drop(stream);

    let finale = processor.finish(cfg.display.dance);
    tracing::info!(
        target: "slothtest.runner",
        pass = finale.summary.pass,
        fail = finale.summary.fail,
        skip = finale.summary.skip,
        "run summarized"
    );

    if let Some(frames) = &finale.dance {
        play_victory_dance(
            renderer,
            frames,
            Duration::from_millis(cfg.display.dance_frame_ms),
        )
        .await;
    }

    let child_exit = match child.wait().await {
        Ok(status) => {
            let code = normalize_exit(status);
            tracing::debug!(target: "slothtest.runner", exit_code = code, "test command exited");
            if !status.success() {
                renderer.tests_failed();
            }
            Some(code)
        }
        Err(err) => {
            tracing::error!(
                target: "slothtest.runner",
                error = %err,
                "failed to wait for test command"
            );
            renderer.tests_failed();
            None
        }
    };

    RunReport {
        summary: Some(finale.summary),
        decode_failed,
        child_exit,
    }
}

fn spawn(runner: &RunnerConfig) -> Result<Child, RunnerError> {
    tracing::debug!(
        target: "slothtest.runner",
        program = %runner.program,
        args = ?runner.args,
        workdir = %runner.workdir.display(),
        "starting test command"
    );
    Command::new(&runner.program)
        .args(&runner.args)
        .current_dir(&runner.workdir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| RunnerError::Spawn {
            program: runner.program.clone(),
            source,
        })
}

pub async fn play_victory_dance(
    renderer: &mut dyn Renderer,
    frames: &[&str],
    frame_delay: Duration,
) {
    renderer.dance_start();
    for frame in frames {
        renderer.dance_frame(frame);
        tokio::time::sleep(frame_delay).await;
    }
    renderer.dance_end();
}
