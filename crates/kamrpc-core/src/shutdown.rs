use std::sync::{Condvar, Mutex};
use std::time::Duration;

/// Cooperative shutdown flag with interruptible waits.
///
/// The tracker sleeps between ticks on [`ShutdownSignal::wait`], which
/// returns the moment another thread calls [`ShutdownSignal::trigger`]
/// instead of running out the full interval.
pub struct ShutdownSignal {
    stopped: Mutex<bool>,
    condvar: Condvar,
}

impl ShutdownSignal {
    /// Create a signal in the running (non-triggered) state.
    pub fn new() -> Self {
        Self {
            stopped: Mutex::new(false),
            condvar: Condvar::new(),
        }
    }

    /// Request shutdown and wake every waiting thread.
    pub fn trigger(&self) {
        let mut stopped = self.stopped.lock().unwrap_or_else(|e| e.into_inner());
        *stopped = true;
        self.condvar.notify_all();
    }

    /// Check whether shutdown has been requested.
    pub fn is_triggered(&self) -> bool {
        *self.stopped.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Sleep for `duration` unless shutdown is requested first.
    ///
    /// Returns `true` when shutdown was requested, `false` when the full
    /// duration elapsed.
    pub fn wait(&self, duration: Duration) -> bool {
        let stopped = self.stopped.lock().unwrap_or_else(|e| e.into_inner());
        let (stopped, _) = self
            .condvar
            .wait_timeout_while(stopped, duration, |stopped| !*stopped)
            .unwrap_or_else(|e| e.into_inner());
        *stopped
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}
