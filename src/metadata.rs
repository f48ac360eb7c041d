//! # Metadata Normalization
//!
//! Converts backend-specific metadata into an [`AttributeMap`].
//!
//! | Input | Function | Failure |
//! |-------|----------|---------|
//! | Any `Serialize` value | [`normalize`] | [`TreeError::UnsupportedMetadataShape`] |
//! | Pre-serialized JSON bytes | [`normalize_bytes`] | [`TreeError::MalformedMetadata`] |
//!
//! Structured values take a round trip through JSON, so the result only holds
//! JSON-compatible values. Anything the encoding cannot represent is lost:
//! `#[serde(skip)]` fields disappear, and non-finite floats become `null`.

use serde::Serialize;
use serde_json::Value;

use crate::{AttributeMap, TreeError};

/// Normalize a structured value into an attribute map.
///
/// # Errors
///
/// [`TreeError::UnsupportedMetadataShape`] if the value fails to serialize
/// (for example a map with non-string keys) or does not serialize to an
/// object (a scalar, sequence or null at the top level).
///
/// # Example
///
/// ```rust
/// use restree::normalize;
///
/// #[derive(serde::Serialize)]
/// struct Container {
///     id: String,
///     running: bool,
/// }
///
/// let attrs = normalize(&Container { id: "c0ffee".into(), running: true }).unwrap();
/// assert_eq!(attrs["id"], "c0ffee");
/// assert_eq!(attrs["running"], true);
/// ```
pub fn normalize<T>(value: &T) -> Result<AttributeMap, TreeError>
where
    T: Serialize + ?Sized,
{
    let encoded = serde_json::to_value(value).map_err(|e| TreeError::UnsupportedMetadataShape {
        reason: e.to_string(),
    })?;

    match encoded {
        Value::Object(map) => Ok(map),
        other => Err(TreeError::UnsupportedMetadataShape {
            reason: format!("expected an object, found {}", shape_name(&other)),
        }),
    }
}

/// Normalize pre-serialized JSON bytes into an attribute map.
///
/// # Errors
///
/// [`TreeError::MalformedMetadata`] if `bytes` is not a well-formed JSON object.
///
/// # Example
///
/// ```rust
/// use restree::normalize_bytes;
///
/// let attrs = normalize_bytes(br#"{"a":1,"b":"x"}"#).unwrap();
/// assert_eq!(attrs["a"], 1);
/// assert_eq!(attrs["b"], "x");
/// ```
pub fn normalize_bytes(bytes: &[u8]) -> Result<AttributeMap, TreeError> {
    serde_json::from_slice(bytes).map_err(|source| TreeError::MalformedMetadata { source })
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
