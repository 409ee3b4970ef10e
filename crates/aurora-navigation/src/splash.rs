//! One-shot splash transition with cancellation on drop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;

/// A scheduled splash-to-home transition.
///
/// Dropping the guard aborts the pending timer task, so a screen that is
/// torn down before the delay elapses never navigates afterwards. Must be
/// created from within a tokio runtime.
pub struct SplashDelay {
    task: JoinHandle<()>,
    fired: Arc<AtomicBool>,
}

impl SplashDelay {
    /// Schedules `on_elapsed` to run once after `delay`.
    pub fn schedule<F>(delay: Duration, on_elapsed: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);

        tracing::debug!(delay_ms = delay.as_millis() as u64, "splash transition scheduled");

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The swap keeps the callback one-shot even if an explicit
            // cancel races with the timer.
            if !flag.swap(true, Ordering::SeqCst) {
                tracing::info!("splash delay elapsed");
                on_elapsed();
            }
        });

        Self { task, fired }
    }

    /// Whether the transition has already run.
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    /// Cancels the pending transition. Equivalent to dropping the guard.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for SplashDelay {
    fn drop(&mut self) {
        if !self.has_fired() {
            tracing::debug!("splash transition cancelled before firing");
        }
        self.task.abort();
    }
}
