//! Cancellable delayed dispatch for search-as-you-type.
//!
//! A query is only dispatched once input has been stable for the delay;
//! scheduling a new task cancels any not-yet-fired prior one. This is the
//! only cancellation semantic in the system — in-flight requests are never
//! aborted, only pending ones.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// How long input must stay unchanged before a search dispatches.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Arm the timer for `task`, replacing (and aborting) any pending one.
    pub fn schedule<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));
    }

    /// Drop any pending task without running it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
