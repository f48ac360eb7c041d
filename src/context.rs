//! Cancellable context threaded through every backend call.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::TreeError;

/// A cancellable context passed to [`Group::list`](crate::Group::list) and
/// [`Readable::open`](crate::Readable::open).
///
/// Cloning a `Context` shares the same cancellation state. Use
/// [`child`](Self::child) for a context that is cancelled with its parent but
/// can also be cancelled on its own.
///
/// # Example
///
/// ```rust
/// use restree::Context;
///
/// let parent = Context::background();
/// let child = parent.child();
/// parent.cancel();
/// assert!(child.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    token: CancellationToken,
}

impl Context {
    /// A fresh context that is never cancelled unless [`cancel`](Self::cancel) is called.
    pub fn background() -> Self {
        Self::default()
    }

    /// Wrap an existing cancellation token.
    pub fn from_token(token: CancellationToken) -> Self {
        Self { token }
    }

    /// A context cancelled whenever this one is.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
        }
    }

    /// Cancel this context and all of its children.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns `true` once the context has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Completes when the context is cancelled.
    pub async fn cancelled(&self) {
        self.token.cancelled().await
    }

    /// The underlying token, for backends that select on it directly.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Drive `fut` to completion unless the context is cancelled first.
    ///
    /// On cancellation the future is dropped, aborting the in-flight call, and
    /// [`TreeError::Cancelled`] is returned carrying `path`.
    pub async fn run<F>(&self, path: &str, fut: F) -> Result<F::Output, TreeError>
    where
        F: Future,
    {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(TreeError::Cancelled { path: path.to_string() }),
            out = fut => Ok(out),
        }
    }
}
