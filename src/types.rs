//! Core types for the resource tree.

/// Normalized, JSON-compatible key/value metadata for an entry.
///
/// Values are limited to strings, numbers, booleans, null, nested maps and
/// nested sequences.
pub type AttributeMap = serde_json::Map<String, serde_json::Value>;

/// Named base that backends embed in their entry types.
///
/// The name is fixed at construction; there is no setter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryBase {
    name: String,
}

impl EntryBase {
    /// Create a base with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The entry's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The capability set an entry exposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Capabilities {
    /// Entry can list children.
    pub group: bool,
    /// Entry can open a byte stream.
    pub readable: bool,
}

/// Split a slash-separated path into segments.
///
/// Empty components (leading, trailing or doubled slashes) are skipped, so
/// `"/docker//containers/"` yields `["docker", "containers"]` and `"/"` yields
/// no segments at all. No `.`/`..` handling is done; those are ordinary names.
///
/// # Example
///
/// ```rust
/// use restree::split_path;
///
/// assert_eq!(split_path("/docker/containers/web"), vec!["docker", "containers", "web"]);
/// assert!(split_path("/").is_empty());
/// ```
pub fn split_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join segments back into an absolute slash-separated path.
pub fn join_path<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::new();
    for segment in segments {
        out.push('/');
        out.push_str(segment.as_ref());
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}
