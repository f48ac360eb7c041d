//! Elapsed-time logging for backend calls.

use std::time::{Duration, Instant};

/// Logs how long a scope took when it is dropped.
///
/// ```rust
/// use restree::TimeTracker;
///
/// fn list_containers() {
///     let _timer = TimeTracker::start("list_containers");
///     // ... talk to the daemon ...
/// } // logs "list_containers took 1.2ms" at info level
/// # list_containers();
/// ```
#[derive(Debug)]
#[must_use = "the elapsed time is logged when the tracker is dropped"]
pub struct TimeTracker {
    name: String,
    start: Instant,
    done: bool,
}

impl TimeTracker {
    /// Start timing `name`.
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
            done: false,
        }
    }

    /// Time elapsed so far.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Log now and return the elapsed time. Nothing is logged on drop afterwards.
    pub fn finish(mut self) -> Duration {
        self.done = true;
        self.log()
    }

    fn log(&self) -> Duration {
        let elapsed = self.elapsed();
        tracing::info!(name = %self.name, ?elapsed, "{} took {:?}", self.name, elapsed);
        elapsed
    }
}

impl Drop for TimeTracker {
    fn drop(&mut self) {
        if !self.done {
            self.log();
        }
    }
}
