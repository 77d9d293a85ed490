//! Trailing-edge debouncing for rapid input events.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Coalesces bursts of calls into one delayed execution of the last call.
///
/// Each [`call`](Self::call) aborts whatever is still pending and schedules
/// the action afresh after the configured delay, so within any burst only
/// the final value is ever acted on. Used to keep rapid search input from
/// recomputing the query pipeline on every keystroke.
///
/// Requires a running tokio runtime; a pending execution is aborted when the
/// debouncer is dropped.
pub struct Debouncer<T> {
    delay: Duration,
    action: Arc<dyn Fn(T) + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Wrap `action` so that only the last call in a `delay` window runs.
    pub fn new(delay: Duration, action: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self { delay, action: Arc::new(action), pending: None }
    }

    /// Schedule the action with `value`, cancelling any pending execution.
    pub fn call(&mut self, value: T) {
        self.cancel();

        let action = Arc::clone(&self.action);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action(value);
        }));
    }

    /// Cancel a pending execution, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether an execution is currently scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<T> std::fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.pending.is_some())
            .finish()
    }
}
