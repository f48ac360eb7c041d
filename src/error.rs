//! Error types for entry-tree navigation and metadata normalization.

use std::io;

/// Error type produced by backends at the capability seam.
///
/// The core wraps these without inspecting them.
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Tree error type with contextual variants.
///
/// Resolution errors carry the failing segment and the full path so a
/// filesystem layer can tell "nothing there" from "backend is broken" from
/// "not navigable further". Uses `#[non_exhaustive]` for forward compatibility.
///
/// # Examples
///
/// ```rust
/// use restree::{ErrorKind, TreeError};
///
/// let err = TreeError::NotFound {
///     segment: "web".into(),
///     path: "/docker/containers/web".into(),
///     group: "containers".into(),
/// };
/// assert_eq!(err.kind(), ErrorKind::NotFound);
/// assert_eq!(err.to_string(), "not found: web in group containers (path /docker/containers/web)");
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    // Resolution Errors
    /// A segment is absent from the group's listing.
    #[error("not found: {segment} in group {group} (path {path})")]
    NotFound {
        /// The segment that was not found.
        segment: String,
        /// The full path being resolved.
        path: String,
        /// Name of the group that was searched.
        group: String,
    },

    /// The path descends through an entry that cannot list children.
    #[error("not a group: {entry} cannot contain {segment} (path {path})")]
    NotAGroup {
        /// The segment that could not be looked up.
        segment: String,
        /// The full path being resolved.
        path: String,
        /// Name of the non-group entry.
        entry: String,
    },

    /// The backend failed while listing a group.
    #[error("list failed for group {group} while looking up {segment} (path {path}): {source}")]
    ListFailed {
        /// The segment being looked up when listing failed.
        segment: String,
        /// The full path being resolved.
        path: String,
        /// Name of the group whose listing failed.
        group: String,
        /// The backend error.
        #[source]
        source: BackendError,
    },

    /// The operation's context was cancelled while a backend call was in flight.
    #[error("cancelled: {path}")]
    Cancelled {
        /// The path (or operation) that was in progress.
        path: String,
    },

    // Metadata Errors
    /// Raw metadata bytes are not a well-formed serialized object.
    #[error("malformed metadata: {source}")]
    MalformedMetadata {
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// A structured value is not object-shaped or cannot be serialized.
    #[error("unsupported metadata shape: {reason}")]
    UnsupportedMetadataShape {
        /// Why the value was rejected.
        reason: String,
    },

    // Stream Errors
    /// Opening a readable entry failed.
    #[error("open failed for {entry}: {source}")]
    OpenFailed {
        /// Name of the entry that could not be opened.
        entry: String,
        /// The backend error.
        #[source]
        source: BackendError,
    },
}

/// Fieldless discriminant of [`TreeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`TreeError::NotFound`].
    NotFound,
    /// See [`TreeError::NotAGroup`].
    NotAGroup,
    /// See [`TreeError::ListFailed`].
    ListFailed,
    /// See [`TreeError::Cancelled`].
    Cancelled,
    /// See [`TreeError::MalformedMetadata`].
    MalformedMetadata,
    /// See [`TreeError::UnsupportedMetadataShape`].
    UnsupportedMetadataShape,
    /// See [`TreeError::OpenFailed`].
    OpenFailed,
}

impl TreeError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TreeError::NotFound { .. } => ErrorKind::NotFound,
            TreeError::NotAGroup { .. } => ErrorKind::NotAGroup,
            TreeError::ListFailed { .. } => ErrorKind::ListFailed,
            TreeError::Cancelled { .. } => ErrorKind::Cancelled,
            TreeError::MalformedMetadata { .. } => ErrorKind::MalformedMetadata,
            TreeError::UnsupportedMetadataShape { .. } => ErrorKind::UnsupportedMetadataShape,
            TreeError::OpenFailed { .. } => ErrorKind::OpenFailed,
        }
    }

    /// The failing path segment, for resolution errors.
    ///
    /// `None` when no lookup was in progress, as for a plain listing failure.
    pub fn segment(&self) -> Option<&str> {
        match self {
            TreeError::NotFound { segment, .. }
            | TreeError::NotAGroup { segment, .. }
            | TreeError::ListFailed { segment, .. } => {
                Some(segment.as_str()).filter(|s| !s.is_empty())
            }
            _ => None,
        }
    }

    /// The full path being resolved, for resolution and cancellation errors.
    pub fn path(&self) -> Option<&str> {
        match self {
            TreeError::NotFound { path, .. }
            | TreeError::NotAGroup { path, .. }
            | TreeError::ListFailed { path, .. }
            | TreeError::Cancelled { path } => Some(path.as_str()),
            _ => None,
        }
    }
}

impl From<TreeError> for io::Error {
    fn from(error: TreeError) -> Self {
        let kind = match error.kind() {
            ErrorKind::NotFound => io::ErrorKind::NotFound,
            ErrorKind::NotAGroup => io::ErrorKind::NotADirectory,
            ErrorKind::Cancelled => io::ErrorKind::Interrupted,
            ErrorKind::MalformedMetadata | ErrorKind::UnsupportedMetadataShape => {
                io::ErrorKind::InvalidData
            }
            ErrorKind::ListFailed | ErrorKind::OpenFailed => io::ErrorKind::Other,
        };
        io::Error::new(kind, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> TreeError {
        TreeError::NotFound {
            segment: "web".into(),
            path: "/containers/web".into(),
            group: "containers".into(),
        }
    }

    #[test]
    fn not_found_display() {
        assert_eq!(
            not_found().to_string(),
            "not found: web in group containers (path /containers/web)"
        );
    }

    #[test]
    fn not_a_group_display_names_entry() {
        let err = TreeError::NotAGroup {
            segment: "logs".into(),
            path: "/volumes/data/logs".into(),
            entry: "data".into(),
        };
        assert!(err.to_string().contains("data"));
        assert!(err.to_string().contains("/volumes/data/logs"));
        assert_eq!(err.segment(), Some("logs"));
    }

    #[test]
    fn list_failed_keeps_source() {
        let err = TreeError::ListFailed {
            segment: "web".into(),
            path: "/containers/web".into(),
            group: "containers".into(),
            source: "daemon unreachable".into(),
        };
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "daemon unreachable");
        assert_eq!(err.kind(), ErrorKind::ListFailed);
    }

    #[test]
    fn path_accessor_on_metadata_error_is_none() {
        let err = TreeError::UnsupportedMetadataShape {
            reason: "array".into(),
        };
        assert_eq!(err.path(), None);
        assert_eq!(err.segment(), None);
    }

    #[test]
    fn empty_segment_is_reported_as_none() {
        let err = TreeError::ListFailed {
            segment: String::new(),
            path: "/volumes".into(),
            group: "volumes".into(),
            source: "refused".into(),
        };
        assert_eq!(err.segment(), None);
        assert_eq!(err.path(), Some("/volumes"));
    }

    #[test]
    fn into_io_error_not_found() {
        let io_err: io::Error = not_found().into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn into_io_error_not_a_group() {
        let err = TreeError::NotAGroup {
            segment: "x".into(),
            path: "/a/x".into(),
            entry: "a".into(),
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotADirectory);
    }

    #[test]
    fn into_io_error_cancelled() {
        let io_err: io::Error = TreeError::Cancelled { path: "/a".into() }.into();
        assert_eq!(io_err.kind(), io::ErrorKind::Interrupted);
    }

    #[test]
    fn into_io_error_list_failed_is_other() {
        let err = TreeError::ListFailed {
            segment: "x".into(),
            path: "/x".into(),
            group: "root".into(),
            source: "boom".into(),
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::Other);
    }
}
