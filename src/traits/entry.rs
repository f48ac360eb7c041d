//! The unit of the resource tree.

use crate::{Group, Readable};

/// A named node in the resource tree.
///
/// Capabilities are discovered through [`as_group`](Self::as_group) and
/// [`as_readable`](Self::as_readable). Both default to `None`; an entry that
/// implements [`Group`] or [`Readable`] overrides the matching accessor to
/// return `Some(self)`.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self`.
///
/// # Object Safety
///
/// This trait is object-safe. Trees are built from `Arc<dyn Entry>`.
///
/// # Example
///
/// ```rust
/// use restree::{Entry, EntryBase};
///
/// struct Volume {
///     base: EntryBase,
/// }
///
/// impl Entry for Volume {
///     fn name(&self) -> &str {
///         self.base.name()
///     }
/// }
///
/// let v = Volume { base: EntryBase::new("pgdata") };
/// assert_eq!(v.name(), "pgdata");
/// assert!(v.as_group().is_none());
/// ```
pub trait Entry: Send + Sync {
    /// The entry's name. Immutable after construction.
    fn name(&self) -> &str;

    /// This entry as a [`Group`], if it can list children.
    fn as_group(&self) -> Option<&dyn Group> {
        None
    }

    /// This entry as a [`Readable`], if it can produce a byte stream.
    fn as_readable(&self) -> Option<&dyn Readable> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EntryBase;

    struct Plain(EntryBase);

    impl Entry for Plain {
        fn name(&self) -> &str {
            self.0.name()
        }
    }

    #[test]
    fn entry_is_object_safe() {
        fn _check(_: &dyn Entry) {}
    }

    #[test]
    fn default_capabilities_are_empty() {
        let e = Plain(EntryBase::new("plain"));
        assert!(e.as_group().is_none());
        assert!(e.as_readable().is_none());
    }
}
