use std::pin::Pin;
use std::time::Duration;

use tokio::time::{sleep, Sleep};

/// Holds at most one pending deadline. `reset` replaces it; `elapsed`
/// resolves once it passes and leaves the debouncer idle.
pub struct Debouncer {
    delay: Duration,
    pending: Option<Pin<Box<Sleep>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn reset(&mut self) {
        self.pending = Some(Box::pin(sleep(self.delay)));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Cancel-safe: dropping the future keeps the deadline armed.
    pub async fn elapsed(&mut self) {
        match self.pending.as_mut() {
            Some(timer) => {
                timer.as_mut().await;
                self.pending = None;
            }
            None => std::future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::{timeout, Instant};

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn idle_debouncer_never_fires() {
        let mut d = Debouncer::new(Duration::from_millis(500));
        assert!(!d.is_pending());
        assert!(timeout(Duration::from_secs(10), d.elapsed()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn reset_pushes_the_deadline() {
        let start = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(500));
        d.reset();

        // not yet due after 300ms
        assert!(timeout(Duration::from_millis(300), d.elapsed()).await.is_err());
        assert!(d.is_pending());

        d.reset();
        d.elapsed().await;
        assert!(!d.is_pending());
        let waited = start.elapsed();
        assert!(waited >= Duration::from_millis(800), "{waited:?}");
        assert!(waited < Duration::from_millis(900), "{waited:?}");
    }
}
