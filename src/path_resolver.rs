//! # Path Resolution
//!
//! Walks a tree of [`Entry`] values from a root, one name segment at a time.
//!
//! ## Algorithm
//!
//! ```text
//! current = root
//! for segment in segments:
//!     current must be a Group        else NotAGroup
//!     children = current.list(ctx)   else ListFailed (or Cancelled)
//!     current = first child named segment   else NotFound
//! return current
//! ```
//!
//! Matching is exact and case-sensitive. Each segment costs one `list` call and
//! a linear scan; nothing is cached between calls. When a group holds two
//! children with the same name, the first one listed wins, so the result is
//! only as deterministic as the backend's listing order.
//!
//! The terminal entry is returned whatever its capabilities; callers decide
//! what to do with a non-group result.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use restree::{resolve_path, Context};
//!
//! let entry = resolve_path(&Context::background(), root, "/docker/containers/web").await?;
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::{Context, Entry, Group, TreeError, join_path, split_path};

// ============================================================================
// Trait Definition
// ============================================================================

/// Strategy trait for path resolution algorithms.
///
/// # Implementors
///
/// - [`LinearResolver`]: list-and-scan walk, one backend call per segment
///
/// # Object Safety
///
/// The trait is object-safe, enabling runtime resolver selection as
/// `Box<dyn PathResolver>`.
#[async_trait]
pub trait PathResolver: Send + Sync {
    /// Resolve `segments` starting at `root`.
    ///
    /// # Errors
    ///
    /// - [`TreeError::NotAGroup`] - the walk reached an entry that cannot list children
    /// - [`TreeError::ListFailed`] - a backend listing failed
    /// - [`TreeError::NotFound`] - a segment is absent from its group
    /// - [`TreeError::Cancelled`] - `ctx` was cancelled during a listing
    async fn resolve(
        &self,
        ctx: &Context,
        root: Arc<dyn Entry>,
        segments: &[String],
    ) -> Result<Arc<dyn Entry>, TreeError>;
}

/// The default resolver: lists each group and scans for the segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearResolver;

#[async_trait]
impl PathResolver for LinearResolver {
    async fn resolve(
        &self,
        ctx: &Context,
        root: Arc<dyn Entry>,
        segments: &[String],
    ) -> Result<Arc<dyn Entry>, TreeError> {
        resolve(ctx, root, segments).await
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Resolve `segments` starting at `root`.
///
/// An empty segment list returns `root` unchanged, even if `root` is not a group.
///
/// # Errors
///
/// See [`PathResolver::resolve`].
pub async fn resolve<S>(
    ctx: &Context,
    root: Arc<dyn Entry>,
    segments: &[S],
) -> Result<Arc<dyn Entry>, TreeError>
where
    S: AsRef<str> + Sync,
{
    let path = join_path(segments);
    let mut current = root;

    for segment in segments {
        let segment = segment.as_ref();
        let Some(group) = current.as_group() else {
            tracing::debug!(entry = current.name(), segment, path = %path, "walk hit a non-group entry");
            return Err(TreeError::NotAGroup {
                segment: segment.to_string(),
                path,
                entry: current.name().to_string(),
            });
        };

        let next = lookup(ctx, group, segment, &path).await?;
        current = next;
    }

    Ok(current)
}

/// Split a slash-separated `path` and resolve it starting at `root`.
///
/// # Errors
///
/// See [`PathResolver::resolve`].
pub async fn resolve_path(
    ctx: &Context,
    root: Arc<dyn Entry>,
    path: &str,
) -> Result<Arc<dyn Entry>, TreeError> {
    resolve(ctx, root, &split_path(path)).await
}

/// Find the first child of `group` named `name`.
///
/// # Errors
///
/// - [`TreeError::ListFailed`] - the backend listing failed
/// - [`TreeError::NotFound`] - no child has that name
/// - [`TreeError::Cancelled`] - `ctx` was cancelled during the listing
pub async fn find_entry_by_name<G>(
    ctx: &Context,
    group: &G,
    name: &str,
) -> Result<Arc<dyn Entry>, TreeError>
where
    G: Group + ?Sized,
{
    lookup(ctx, group, name, &join_path(&[group.name(), name])).await
}

async fn lookup<G>(
    ctx: &Context,
    group: &G,
    segment: &str,
    path: &str,
) -> Result<Arc<dyn Entry>, TreeError>
where
    G: Group + ?Sized,
{
    let children = ctx
        .run(path, group.list(ctx))
        .await?
        .map_err(|source| TreeError::ListFailed {
            segment: segment.to_string(),
            path: path.to_string(),
            group: group.name().to_string(),
            source,
        })?;

    tracing::trace!(group = group.name(), children = children.len(), segment, "listed group");

    children
        .into_iter()
        .find(|child| child.name() == segment)
        .ok_or_else(|| TreeError::NotFound {
            segment: segment.to_string(),
            path: path.to_string(),
            group: group.name().to_string(),
        })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BackendError, EntryBase, ErrorKind, StaticGroup};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Leaf(EntryBase);

    impl Entry for Leaf {
        fn name(&self) -> &str {
            self.0.name()
        }
    }

    fn leaf(name: &str) -> Arc<dyn Entry> {
        Arc::new(Leaf(EntryBase::new(name)))
    }

    struct CountingGroup {
        base: EntryBase,
        calls: AtomicUsize,
        fail: bool,
    }

    impl Entry for CountingGroup {
        fn name(&self) -> &str {
            self.base.name()
        }

        fn as_group(&self) -> Option<&dyn Group> {
            Some(self)
        }
    }

    #[async_trait]
    impl Group for CountingGroup {
        async fn list(&self, _ctx: &Context) -> Result<Vec<Arc<dyn Entry>>, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err("backend down".into());
            }
            Ok(vec![leaf("a"), leaf("b")])
        }
    }

    fn tree() -> Arc<dyn Entry> {
        Arc::new(StaticGroup::new(
            "root",
            vec![
                Arc::new(StaticGroup::new("dir", vec![leaf("file")])) as Arc<dyn Entry>,
                leaf("top"),
            ],
        ))
    }

    #[tokio::test]
    async fn empty_path_returns_root() {
        let root = tree();
        let empty: [&str; 0] = [];
        let found = resolve(&Context::background(), root.clone(), &empty).await.unwrap();
        assert!(Arc::ptr_eq(&found, &root));
    }

    #[tokio::test]
    async fn empty_path_on_non_group_root_returns_it() {
        let root = leaf("solo");
        let found = resolve_path(&Context::background(), root, "/").await.unwrap();
        assert_eq!(found.name(), "solo");
    }

    #[tokio::test]
    async fn resolves_nested_entry() {
        let found = resolve_path(&Context::background(), tree(), "/dir/file")
            .await
            .unwrap();
        assert_eq!(found.name(), "file");
    }

    #[tokio::test]
    async fn repeated_name_at_deeper_level_resolves_inner() {
        let inner: Arc<dyn Entry> = Arc::new(StaticGroup::new("a", vec![leaf("marker")]));
        let outer: Arc<dyn Entry> = Arc::new(StaticGroup::new("a", vec![inner.clone()]));
        let root: Arc<dyn Entry> = Arc::new(StaticGroup::new("root", vec![outer.clone()]));

        let found = resolve_path(&Context::background(), root, "/a/a").await.unwrap();
        assert!(Arc::ptr_eq(&found, &inner));
        assert!(!Arc::ptr_eq(&found, &outer));
    }

    #[tokio::test]
    async fn terminal_group_is_returned() {
        let found = resolve_path(&Context::background(), tree(), "dir").await.unwrap();
        assert!(found.as_group().is_some());
    }

    #[tokio::test]
    async fn missing_segment_is_not_found() {
        let err = resolve_path(&Context::background(), tree(), "/dir/nope")
            .await
            .err()
            .unwrap();
        match err {
            TreeError::NotFound {
                segment,
                path,
                group,
            } => {
                assert_eq!(segment, "nope");
                assert_eq!(path, "/dir/nope");
                assert_eq!(group, "dir");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn matching_is_case_sensitive() {
        let err = resolve_path(&Context::background(), tree(), "/DIR")
            .await
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn descending_through_leaf_is_not_a_group() {
        let err = resolve_path(&Context::background(), tree(), "/top/deeper")
            .await
            .err()
            .unwrap();
        match err {
            TreeError::NotAGroup {
                segment,
                path,
                entry,
            } => {
                assert_eq!(segment, "deeper");
                assert_eq!(path, "/top/deeper");
                assert_eq!(entry, "top");
            }
            other => panic!("expected NotAGroup, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn list_error_is_wrapped() {
        let root: Arc<dyn Entry> = Arc::new(CountingGroup {
            base: EntryBase::new("broken"),
            calls: AtomicUsize::new(0),
            fail: true,
        });
        let err = resolve_path(&Context::background(), root, "/a").await.err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ListFailed);
        assert_eq!(err.segment(), Some("a"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[tokio::test]
    async fn every_resolution_lists_again() {
        let group = Arc::new(CountingGroup {
            base: EntryBase::new("g"),
            calls: AtomicUsize::new(0),
            fail: false,
        });
        let root: Arc<dyn Entry> = group.clone();
        let ctx = Context::background();
        resolve_path(&ctx, root.clone(), "a").await.unwrap();
        resolve_path(&ctx, root, "b").await.unwrap();
        assert_eq!(group.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn cancelled_context_stops_walk() {
        let ctx = Context::background();
        ctx.cancel();
        let err = resolve_path(&ctx, tree(), "/dir/file").await.err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Cancelled);
        assert_eq!(err.path(), Some("/dir/file"));
    }

    #[tokio::test]
    async fn find_entry_by_name_reports_group() {
        let group = StaticGroup::new("containers", vec![leaf("web")]);
        let ctx = Context::background();
        let web = find_entry_by_name(&ctx, &group, "web").await.unwrap();
        assert_eq!(web.name(), "web");

        let err = find_entry_by_name(&ctx, &group, "db").await.err().unwrap();
        assert!(err.to_string().contains("containers"));
    }

    #[tokio::test]
    async fn linear_resolver_can_be_boxed() {
        let resolver: Box<dyn PathResolver> = Box::new(LinearResolver);
        let found = resolver
            .resolve(&Context::background(), tree(), &split_path("/dir/file"))
            .await
            .unwrap();
        assert_eq!(found.name(), "file");
    }
}
