//! # restree
//!
//! Entry-tree navigation and metadata normalization for exposing external
//! resources (instances, containers, volumes, API objects) as a filesystem-like
//! hierarchy.
//!
//! This crate contains the **generic core** only: capability traits, the path
//! resolver, the metadata normalizer and the prefetcher. Concrete backends
//! (a container-engine adapter, a cloud API adapter) implement the traits, and a
//! filesystem driver sits on top.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust
//! use restree::{resolve_path, Context, Entry, StaticGroup};
//! use std::sync::Arc;
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let volumes: Arc<dyn Entry> = Arc::new(StaticGroup::new("volumes", vec![]));
//! let root: Arc<dyn Entry> = Arc::new(StaticGroup::new("docker", vec![volumes]));
//!
//! let found = resolve_path(&Context::background(), root, "/volumes").await?;
//! assert_eq!(found.name(), "volumes");
//! # Ok::<(), restree::TreeError>(())
//! # }).unwrap();
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Entry`] | A named node; exposes capabilities through accessors |
//! | [`Group`] | Capability: list child entries |
//! | [`Readable`] | Capability: open a byte [`Stream`] |
//! | [`Context`] | Cancellation threaded through every backend call |
//! | [`TreeError`] | Error type with path context and an [`ErrorKind`] |
//! | [`AttributeMap`] | Normalized JSON-compatible metadata |
//! | [`Prefetcher`] | Timeout-bounded background warm-up of readable entries |
//!
//! ---
//!
//! ## Operations
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`resolve`] / [`resolve_path`] | Walk segments from a root to an entry |
//! | [`find_entry_by_name`] | Find one direct child of a group |
//! | [`normalize`] | Structured value to [`AttributeMap`] via a JSON round trip |
//! | [`normalize_bytes`] | Serialized JSON object to [`AttributeMap`] |
//! | [`Prefetcher::prefetch`] | Fire-and-forget warm-up |
//!
//! ---
//!
//! ## Error Handling
//!
//! Resolution failures are distinguishable by kind, so a filesystem layer can
//! map them to different outward codes:
//!
//! ```rust
//! use restree::{ErrorKind, TreeError};
//!
//! let err = TreeError::NotAGroup {
//!     segment: "x".into(),
//!     path: "/volumes/pgdata/x".into(),
//!     entry: "pgdata".into(),
//! };
//! assert_eq!(err.kind(), ErrorKind::NotAGroup);
//!
//! let io: std::io::Error = err.into();
//! assert_eq!(io.kind(), std::io::ErrorKind::NotADirectory);
//! ```
//!
//! Normalization never panics; bad input comes back as
//! [`TreeError::MalformedMetadata`] or [`TreeError::UnsupportedMetadataShape`].
//! Prefetch failures are logged at `debug` and otherwise swallowed.
//!
//! ---
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync` and take `&self`. The tree holds no shared
//! mutable state: every [`Group::list`] call is independent, so traversal needs
//! no locking.
//!
//! ## Logging
//!
//! Diagnostics go through [`tracing`]. The crate never installs a subscriber.

// Private modules
mod context;
mod error;
mod ext;
mod metadata;
mod path_resolver;
mod prefetch;
mod static_group;
mod timing;
mod traits;
mod types;

// Public re-exports - error types
pub use error::{BackendError, ErrorKind, TreeError};

// Public re-exports - core types
pub use context::Context;
pub use types::{AttributeMap, Capabilities, EntryBase, join_path, split_path};

// Public re-exports - capability traits
pub use traits::{Entry, Group, Readable, Stream};

// Public re-exports - path resolution
pub use path_resolver::{LinearResolver, PathResolver, find_entry_by_name, resolve, resolve_path};

// Public re-exports - metadata
pub use metadata::{normalize, normalize_bytes};

// Public re-exports - prefetching
pub use prefetch::{DEFAULT_PREFETCH_TIMEOUT, PrefetchConfig, PrefetchHandle, Prefetcher};

// Public re-exports - infrastructure
pub use ext::{EntryExt, GroupExt};
pub use static_group::StaticGroup;
pub use timing::TimeTracker;
