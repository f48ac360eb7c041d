//! # Prefetching
//!
//! Best-effort warm-up of [`Readable`](crate::Readable) entries.
//!
//! Backends with expensive connection setup (TLS handshakes, auth) benefit
//! from starting that work before a consumer's real read arrives. A
//! [`Prefetcher`] opens the entry on a background task and, if the stream is
//! releasable, releases it once the idle window has elapsed. The window is
//! measured from the moment `prefetch` was called, not from last access.
//!
//! ```text
//! prefetch(entry) ──▶ spawn ──▶ open ──▶ releasable? ──no──▶ drop
//!                                            │
//!                                           yes
//!                                            ▼
//!                           wait until start + timeout ──▶ release
//!                                   (or claim / shutdown)
//! ```
//!
//! ## Hand-off
//!
//! [`Prefetcher::prefetch`] is fire-and-forget. When a consumer wants the warm
//! stream itself, [`Prefetcher::prefetch_with_handle`] returns a
//! [`PrefetchHandle`]; [`PrefetchHandle::claim`] takes the stream and cancels
//! the pending release. The claimer and the release task contend for the same
//! slot, so exactly one of them ends up with the stream.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, OwnedMutexGuard};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::{Context, Entry, Stream, TreeError};

/// Default idle window before a prefetched stream is released.
pub const DEFAULT_PREFETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Prefetcher configuration.
///
/// Deserializes from `{"timeout_secs": 2.5}`; missing fields take their defaults.
///
/// # Example
///
/// ```rust
/// use restree::PrefetchConfig;
/// use std::time::Duration;
///
/// let config: PrefetchConfig = serde_json::from_str(r#"{"timeout_secs": 2.5}"#).unwrap();
/// assert_eq!(config.timeout, Duration::from_millis(2500));
/// assert_eq!(PrefetchConfig::default().timeout, Duration::from_secs(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PrefetchConfig {
    /// How long a prefetched stream stays open, measured from prefetch start.
    #[serde(rename = "timeout_secs", with = "duration_secs_serde")]
    pub timeout: Duration,
}

impl PrefetchConfig {
    /// Replace the idle window.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_PREFETCH_TIMEOUT,
        }
    }
}

type Slot = Arc<Mutex<Option<Box<dyn Stream>>>>;

/// Opens readable entries ahead of demand and releases them after a bounded window.
///
/// Must be used from within a Tokio runtime. Outside one, prefetch requests
/// are logged and ignored.
#[derive(Debug, Default)]
pub struct Prefetcher {
    config: PrefetchConfig,
    shutdown: CancellationToken,
}

impl Prefetcher {
    /// Create a prefetcher with the given configuration.
    pub fn new(config: PrefetchConfig) -> Self {
        Self {
            config,
            shutdown: CancellationToken::new(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &PrefetchConfig {
        &self.config
    }

    /// Warm `entry` in the background. Never blocks and never reports errors.
    ///
    /// Entries without the readable capability are ignored.
    pub fn prefetch(&self, entry: Arc<dyn Entry>) {
        drop(self.prefetch_with_handle(entry));
    }

    /// Like [`prefetch`](Self::prefetch), but returns a handle that can claim
    /// the warm stream before it is released.
    pub fn prefetch_with_handle(&self, entry: Arc<dyn Entry>) -> PrefetchHandle {
        let slot: Slot = Arc::new(Mutex::new(None));
        let handle = PrefetchHandle {
            slot: Arc::clone(&slot),
            claimed: CancellationToken::new(),
        };

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(entry = entry.name(), "prefetch requested outside a tokio runtime");
            return handle;
        };
        if self.shutdown.is_cancelled() {
            tracing::debug!(entry = entry.name(), "prefetch requested after shutdown");
            return handle;
        }
        // Held by the warm-up task until the open settles, so claim() waits for it.
        let Ok(guard) = slot.try_lock_owned() else {
            return handle;
        };

        let window = Window {
            deadline: Instant::now() + self.config.timeout,
            shutdown: self.shutdown.clone(),
            claimed: handle.claimed.clone(),
        };
        runtime.spawn(warm(entry, guard, window));
        handle
    }

    /// Cancel in-flight opens and release every pending stream now.
    ///
    /// Shutdown is terminal: later prefetch requests are logged and ignored.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}

/// Claims the stream produced by one prefetch.
pub struct PrefetchHandle {
    slot: Slot,
    claimed: CancellationToken,
}

impl PrefetchHandle {
    /// Take ownership of the warm stream and cancel its scheduled release.
    ///
    /// Waits for an in-flight open to settle, at most until the idle window
    /// ends. Returns `None` if the open failed or outlived the window, if the
    /// stream was not releasable, or if it has already been released.
    pub async fn claim(self) -> Option<Box<dyn Stream>> {
        let stream = self.slot.lock().await.take();
        self.claimed.cancel();
        stream
    }
}

struct Window {
    deadline: Instant,
    shutdown: CancellationToken,
    claimed: CancellationToken,
}

async fn warm(
    entry: Arc<dyn Entry>,
    mut guard: OwnedMutexGuard<Option<Box<dyn Stream>>>,
    window: Window,
) {
    let Some(readable) = entry.as_readable() else {
        tracing::debug!(entry = entry.name(), "prefetch skipped: entry is not readable");
        return;
    };

    let ctx = Context::from_token(window.shutdown.child_token());
    // An open still pending at the deadline is dropped; returning frees the slot.
    let opened = tokio::select! {
        result = ctx.run(entry.name(), readable.open(&ctx)) => result,
        _ = tokio::time::sleep_until(window.deadline) => {
            tracing::debug!(entry = entry.name(), "prefetch open outlived the idle window");
            return;
        }
    };
    let stream = match opened {
        Ok(Ok(stream)) => stream,
        Ok(Err(source)) => {
            let err = TreeError::OpenFailed {
                entry: entry.name().to_string(),
                source,
            };
            tracing::debug!(error = %err, "prefetch open failed");
            return;
        }
        Err(_) => {
            tracing::debug!(entry = entry.name(), "prefetch open cancelled");
            return;
        }
    };

    if !stream.is_releasable() {
        tracing::trace!(entry = entry.name(), "prefetched stream is not releasable; dropping");
        return;
    }

    *guard = Some(stream);
    let slot = Arc::clone(OwnedMutexGuard::mutex(&guard));
    drop(guard);

    tokio::select! {
        _ = tokio::time::sleep_until(window.deadline) => {}
        _ = window.shutdown.cancelled() => {}
        _ = window.claimed.cancelled() => {}
    }

    let pending = slot.lock().await.take();
    if let Some(mut stream) = pending {
        match stream.release().await {
            Ok(()) => tracing::trace!(entry = entry.name(), "released prefetched stream"),
            Err(e) => tracing::debug!(entry = entry.name(), error = %e, "failed to release prefetched stream"),
        }
    }
}

/// Serde support for `Duration` as (fractional) seconds.
mod duration_secs_serde {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(duration.as_secs_f64())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(D::Error::custom)
    }
}
