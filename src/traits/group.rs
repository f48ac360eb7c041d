//! The container capability.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{BackendError, Context, Entry};

/// An entry that can list child entries.
///
/// Listing returns children in the backend's order, which is not necessarily
/// sorted. Listing is not guaranteed to be idempotent: backends may build fresh
/// entries on every call, so no identity is preserved across calls.
///
/// Implementors must also override [`Entry::as_group`] to return `Some(self)`.
///
/// # Cancellation
///
/// `ctx` is cancelled when the caller gives up. Backends may watch
/// [`Context::cancelled`]; callers in this crate additionally race every call
/// against the context and drop the in-flight future on cancellation.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn Group`.
#[async_trait]
pub trait Group: Entry {
    /// List this group's children.
    ///
    /// # Errors
    ///
    /// Any backend failure. The resolver wraps it as
    /// [`TreeError::ListFailed`](crate::TreeError::ListFailed).
    async fn list(&self, ctx: &Context) -> Result<Vec<Arc<dyn Entry>>, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_is_object_safe() {
        fn _check(_: &dyn Group) {}
    }

    #[test]
    fn group_requires_send_sync() {
        fn _assert_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_send_sync::<dyn Group>();
    }
}
