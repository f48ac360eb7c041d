//! A group with a fixed child list.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{BackendError, Context, Entry, EntryBase, Group};

/// A [`Group`] whose children are fixed at construction.
///
/// Typical use is a backend root that exposes one directory per resource
/// kind (containers, volumes, ...). Every [`list`](Group::list) call returns
/// the same children in the same order.
///
/// # Example
///
/// ```rust
/// use restree::{Entry, StaticGroup};
/// use std::sync::Arc;
///
/// let containers: Arc<dyn Entry> = Arc::new(StaticGroup::new("containers", vec![]));
/// let volumes: Arc<dyn Entry> = Arc::new(StaticGroup::new("volumes", vec![]));
/// let root = StaticGroup::new("docker", vec![containers, volumes]);
/// assert_eq!(root.children().len(), 2);
/// ```
pub struct StaticGroup {
    base: EntryBase,
    children: Vec<Arc<dyn Entry>>,
}

impl StaticGroup {
    /// Create a group named `name` holding `children` in order.
    pub fn new(name: impl Into<String>, children: Vec<Arc<dyn Entry>>) -> Self {
        Self {
            base: EntryBase::new(name),
            children,
        }
    }

    /// The fixed children.
    pub fn children(&self) -> &[Arc<dyn Entry>] {
        &self.children
    }
}

impl Entry for StaticGroup {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn as_group(&self) -> Option<&dyn Group> {
        Some(self)
    }
}

#[async_trait]
impl Group for StaticGroup {
    async fn list(&self, _ctx: &Context) -> Result<Vec<Arc<dyn Entry>>, BackendError> {
        Ok(self.children.clone())
    }
}

impl std::fmt::Debug for StaticGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticGroup")
            .field("name", &self.base.name())
            .field(
                "children",
                &self.children.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_children_in_order() {
        let a: Arc<dyn Entry> = Arc::new(StaticGroup::new("a", vec![]));
        let b: Arc<dyn Entry> = Arc::new(StaticGroup::new("b", vec![]));
        let root = StaticGroup::new("root", vec![b, a]);

        let names: Vec<String> = root
            .list(&Context::background())
            .await
            .unwrap()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn is_a_group_not_a_readable() {
        let g = StaticGroup::new("g", vec![]);
        assert!(g.as_group().is_some());
        assert!(g.as_readable().is_none());
    }

    #[test]
    fn debug_shows_child_names() {
        let child: Arc<dyn Entry> = Arc::new(StaticGroup::new("child", vec![]));
        let g = StaticGroup::new("parent", vec![child]);
        let dbg = format!("{g:?}");
        assert!(dbg.contains("parent"));
        assert!(dbg.contains("child"));
    }
}
