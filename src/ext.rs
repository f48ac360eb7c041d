//! # Extension Traits
//!
//! Convenience methods for entries and groups.
//!
//! ## Overview
//!
//! [`EntryExt`] and [`GroupExt`] provide commonly-needed helpers that aren't
//! part of the capability traits. Both have blanket implementations, so every
//! entry and group gets them for free, including trait objects.
//!
//! ## Available Methods
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`is_group`](EntryExt::is_group) | Check for the group capability |
//! | [`is_readable`](EntryExt::is_readable) | Check for the readable capability |
//! | [`capabilities`](EntryExt::capabilities) | Both checks as a [`Capabilities`] value |
//! | [`children`](GroupExt::children) | List with cancellation and error context |
//! | [`find`](GroupExt::find) | Find a direct child by name |

use std::sync::Arc;

use async_trait::async_trait;

use crate::{Capabilities, Context, Entry, Group, TreeError, find_entry_by_name, join_path};

/// Extension methods for any entry.
///
/// # Example
///
/// ```rust
/// use restree::{Entry, EntryExt, StaticGroup};
///
/// let g = StaticGroup::new("containers", vec![]);
/// assert!(g.is_group());
/// assert!(!g.is_readable());
/// ```
pub trait EntryExt: Entry {
    /// Returns `true` if this entry can list children.
    fn is_group(&self) -> bool {
        self.as_group().is_some()
    }

    /// Returns `true` if this entry can open a byte stream.
    fn is_readable(&self) -> bool {
        self.as_readable().is_some()
    }

    /// The capability set of this entry.
    fn capabilities(&self) -> Capabilities {
        Capabilities {
            group: self.is_group(),
            readable: self.is_readable(),
        }
    }
}

// Blanket implementation - every entry gets EntryExt for free
impl<E: Entry + ?Sized> EntryExt for E {}

/// Extension methods for any group.
#[async_trait]
pub trait GroupExt: Group {
    /// List children, racing the call against `ctx`.
    ///
    /// No lookup is in progress, so a listing error reports no
    /// [`segment`](TreeError::segment).
    ///
    /// # Errors
    ///
    /// - [`TreeError::ListFailed`] - the backend listing failed
    /// - [`TreeError::Cancelled`] - `ctx` was cancelled first
    async fn children(&self, ctx: &Context) -> Result<Vec<Arc<dyn Entry>>, TreeError> {
        let path = join_path(&[self.name()]);
        ctx.run(&path, self.list(ctx))
            .await?
            .map_err(|source| TreeError::ListFailed {
                segment: String::new(),
                path: path.clone(),
                group: self.name().to_string(),
                source,
            })
    }

    /// Find the first direct child named `name`.
    ///
    /// # Errors
    ///
    /// See [`find_entry_by_name`].
    async fn find(&self, ctx: &Context, name: &str) -> Result<Arc<dyn Entry>, TreeError> {
        find_entry_by_name(ctx, self, name).await
    }
}

// Blanket implementation
impl<G: Group + ?Sized> GroupExt for G {}
