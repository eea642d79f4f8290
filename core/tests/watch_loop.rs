//! Debounce behavior of the watch loop, driven with paused tokio time.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use notify::event::{CreateKind, DataChange, ModifyKind, RemoveKind, RenameMode};
use notify::{Event, EventKind};
use slothtest_core::watch::{watch_loop, ChangeFilter, WatchExit, WatchHandler, WatchSources};
use tokio::sync::{mpsc, oneshot};
use tokio::time::sleep;

#[derive(Clone, Default)]
struct Counters {
    runs: Arc<AtomicUsize>,
    banners: Arc<AtomicUsize>,
    errors: Arc<AtomicUsize>,
    goodbyes: Arc<AtomicUsize>,
}

struct CountingHandler {
    counters: Counters,
    run_time: Duration,
}

#[async_trait]
impl WatchHandler for CountingHandler {
    async fn run_tests(&mut self) {
        sleep(self.run_time).await;
        self.counters.runs.fetch_add(1, Ordering::SeqCst);
    }

    fn changes_detected(&mut self) {
        self.counters.banners.fetch_add(1, Ordering::SeqCst);
    }

    fn source_error(&mut self, _err: &notify::Error) {
        self.counters.errors.fetch_add(1, Ordering::SeqCst);
    }

    fn shutting_down(&mut self) {
        self.counters.goodbyes.fetch_add(1, Ordering::SeqCst);
    }
}

struct Harness {
    events: mpsc::UnboundedSender<Event>,
    errors: mpsc::UnboundedSender<notify::Error>,
    stop: oneshot::Sender<()>,
    counters: Counters,
    task: tokio::task::JoinHandle<WatchExit>,
}

fn start(run_time: Duration) -> Harness {
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let (errors_tx, errors_rx) = mpsc::unbounded_channel();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let counters = Counters::default();

    let sources = WatchSources {
        events: events_rx,
        errors: errors_rx,
        shutdown: Box::pin(async move {
            let _ = stop_rx.await;
        }),
    };
    let mut handler = CountingHandler {
        counters: counters.clone(),
        run_time,
    };
    let task = tokio::spawn(async move {
        let filter = ChangeFilter::new("go");
        watch_loop(sources, &filter, Duration::from_millis(500), &mut handler).await
    });

    Harness {
        events: events_tx,
        errors: errors_tx,
        stop: stop_tx,
        counters,
        task,
    }
}

fn event(kind: EventKind, path: &str) -> Event {
    Event::new(kind).add_path(PathBuf::from(path))
}

fn write(path: &str) -> Event {
    event(EventKind::Modify(ModifyKind::Data(DataChange::Any)), path)
}

#[tokio::test(start_paused = true)]
async fn initial_run_happens_before_any_change() {
    let h = start(Duration::ZERO);
    sleep(Duration::from_millis(10)).await;
    assert_eq!(h.counters.runs.load(Ordering::SeqCst), 1);
    assert_eq!(h.counters.banners.load(Ordering::SeqCst), 0);

    h.stop.send(()).unwrap();
    assert_eq!(h.task.await.unwrap(), WatchExit::Signal);
    assert_eq!(h.counters.goodbyes.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn burst_within_delay_triggers_one_rerun() {
    let h = start(Duration::ZERO);
    sleep(Duration::from_millis(10)).await;

    h.events.send(write("./internal/example_test.go")).unwrap();
    sleep(Duration::from_millis(100)).await;
    h.events.send(write("./internal/example_test.go")).unwrap();
    sleep(Duration::from_millis(300)).await;
    h.events.send(event(EventKind::Create(CreateKind::File), "./main.go")).unwrap();

    // 499ms after the last change: still waiting
    sleep(Duration::from_millis(499)).await;
    assert_eq!(h.counters.runs.load(Ordering::SeqCst), 1);

    sleep(Duration::from_millis(1000)).await;
    assert_eq!(h.counters.runs.load(Ordering::SeqCst), 2);
    assert_eq!(h.counters.banners.load(Ordering::SeqCst), 1);

    h.stop.send(()).unwrap();
    h.task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn spaced_changes_trigger_separate_reruns() {
    let h = start(Duration::ZERO);
    sleep(Duration::from_millis(10)).await;

    h.events.send(write("a.go")).unwrap();
    sleep(Duration::from_millis(700)).await;
    h.events.send(write("b.go")).unwrap();
    sleep(Duration::from_millis(700)).await;

    assert_eq!(h.counters.runs.load(Ordering::SeqCst), 3);

    h.stop.send(()).unwrap();
    h.task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn non_qualifying_notifications_are_ignored() {
    let h = start(Duration::ZERO);
    sleep(Duration::from_millis(10)).await;

    h.events.send(write("./README.md")).unwrap();
    h.events
        .send(event(EventKind::Remove(RemoveKind::File), "./main.go"))
        .unwrap();
    h.events
        .send(event(
            EventKind::Modify(ModifyKind::Name(RenameMode::From)),
            "./main.go",
        ))
        .unwrap();
    h.events.send(write("./.git/x.go")).unwrap();
    sleep(Duration::from_secs(5)).await;

    assert_eq!(h.counters.runs.load(Ordering::SeqCst), 1);

    h.stop.send(()).unwrap();
    h.task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn atomic_save_triggers_a_rerun() {
    let h = start(Duration::ZERO);
    sleep(Duration::from_millis(10)).await;

    // editor writes a temp file, then renames it over the source file
    h.events.send(write("./.main.go.swp")).unwrap();
    h.events
        .send(event(
            EventKind::Modify(ModifyKind::Name(RenameMode::To)),
            "./main.go",
        ))
        .unwrap();
    sleep(Duration::from_secs(1)).await;

    assert_eq!(h.counters.runs.load(Ordering::SeqCst), 2);
    assert_eq!(h.counters.banners.load(Ordering::SeqCst), 1);

    h.stop.send(()).unwrap();
    h.task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn source_errors_do_not_stop_the_loop() {
    let h = start(Duration::ZERO);
    sleep(Duration::from_millis(10)).await;

    h.errors.send(notify::Error::generic("boom")).unwrap();
    h.errors.send(notify::Error::generic("again")).unwrap();
    sleep(Duration::from_millis(10)).await;
    assert_eq!(h.counters.errors.load(Ordering::SeqCst), 2);

    h.events.send(write("a.go")).unwrap();
    sleep(Duration::from_secs(1)).await;
    assert_eq!(h.counters.runs.load(Ordering::SeqCst), 2);

    h.stop.send(()).unwrap();
    h.task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn shutdown_interrupts_a_running_rerun() {
    let h = start(Duration::from_secs(60));
    // the initial run is still in flight
    sleep(Duration::from_secs(1)).await;
    assert_eq!(h.counters.runs.load(Ordering::SeqCst), 0);

    h.stop.send(()).unwrap();
    assert_eq!(h.task.await.unwrap(), WatchExit::Signal);
    assert_eq!(h.counters.runs.load(Ordering::SeqCst), 0);
    assert_eq!(h.counters.goodbyes.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn closed_notification_channel_ends_the_loop() {
    let h = start(Duration::ZERO);
    let Harness {
        events, task, stop, ..
    } = h;
    drop(events);
    assert_eq!(task.await.unwrap(), WatchExit::SourceClosed);
    drop(stop);
}
