//! # Capability Traits
//!
//! The traits a backend implements to expose its resources as a tree.
//!
//! ## Capabilities
//!
//! Every node is an [`Entry`]. An entry may additionally expose capabilities:
//!
//! | Capability | Trait | Accessor | Meaning |
//! |------------|-------|----------|---------|
//! | Container | [`Group`] | [`Entry::as_group`] | Can list child entries |
//! | Stream | [`Readable`] | [`Entry::as_readable`] | Can open a byte [`Stream`] |
//!
//! An entry can be a group, a readable, both, or neither. Capabilities are
//! queried through the accessors, never by inspecting concrete types:
//!
//! ```rust
//! use restree::{Context, Entry, EntryBase, Group, BackendError};
//! use std::sync::Arc;
//!
//! struct Containers {
//!     base: EntryBase,
//! }
//!
//! impl Entry for Containers {
//!     fn name(&self) -> &str {
//!         self.base.name()
//!     }
//!
//!     fn as_group(&self) -> Option<&dyn Group> {
//!         Some(self)
//!     }
//! }
//!
//! #[async_trait::async_trait]
//! impl Group for Containers {
//!     async fn list(&self, _ctx: &Context) -> Result<Vec<Arc<dyn Entry>>, BackendError> {
//!         Ok(Vec::new())
//!     }
//! }
//!
//! let c = Containers { base: EntryBase::new("containers") };
//! assert!(c.as_group().is_some());
//! assert!(c.as_readable().is_none());
//! ```
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync` and take `&self`, so entries can be shared
//! across tasks as `Arc<dyn Entry>`.

mod entry;
mod group;
mod readable;

pub use entry::Entry;
pub use group::Group;
pub use readable::{Readable, Stream};
