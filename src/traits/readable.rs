//! The stream capability.

use std::io::Cursor;

use async_trait::async_trait;
use tokio::io::AsyncRead;

use crate::{BackendError, Context, Entry};

/// An entry that can produce a byte stream.
///
/// Implementors must also override [`Entry::as_readable`] to return `Some(self)`.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn Readable`.
#[async_trait]
pub trait Readable: Entry {
    /// Open a byte stream over this entry's content.
    ///
    /// The returned stream is owned by the caller until it is dropped or
    /// released.
    ///
    /// # Errors
    ///
    /// Any backend failure (connection setup, auth, missing resource).
    async fn open(&self, ctx: &Context) -> Result<Box<dyn Stream>, BackendError>;
}

/// An open byte stream, optionally supporting explicit release.
///
/// Streams backed by a connection (an exec session, a log follower) should
/// return `true` from [`is_releasable`](Self::is_releasable) and tear the
/// connection down in [`release`](Self::release).
#[async_trait]
pub trait Stream: AsyncRead + Send + Unpin {
    /// Returns `true` if [`release`](Self::release) does real work.
    fn is_releasable(&self) -> bool {
        false
    }

    /// Release the resources behind this stream.
    async fn release(&mut self) -> Result<(), BackendError> {
        Ok(())
    }
}

// In-memory content, no release needed
impl Stream for Cursor<Vec<u8>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    #[test]
    fn readable_is_object_safe() {
        fn _check(_: &dyn Readable) {}
        fn _check_stream(_: &dyn Stream) {}
    }

    #[tokio::test]
    async fn cursor_stream_reads_and_is_not_releasable() {
        let mut stream: Box<dyn Stream> = Box::new(Cursor::new(b"hello".to_vec()));
        assert!(!stream.is_releasable());

        let mut out = String::new();
        stream.read_to_string(&mut out).await.unwrap();
        assert_eq!(out, "hello");
        stream.release().await.unwrap();
    }
}
