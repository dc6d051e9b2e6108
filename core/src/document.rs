//! Field access on decoded documents
//!
//! A [`Document`] is one decoded YAML mapping with its key order preserved.
//! The core only ever reads two fields from it, and never fails: a missing or
//! non-string field reads as `""`.

use serde_yaml::Value;

/// One decoded document: an insertion-ordered mapping.
pub type Document = serde_yaml::Mapping;

/// Top-level key holding the resource kind.
pub const KIND_KEY: &str = "kind";

/// Top-level key holding the metadata mapping.
pub const METADATA_KEY: &str = "metadata";

/// Key inside `metadata` holding the resource name.
pub const NAME_KEY: &str = "name";

/// The string at top-level `kind`, or `""`.
///
/// # Example
///
/// ```
/// use res::{get_kind, Document};
///
/// let doc: Document = serde_yaml::from_str("kind: Pod").unwrap();
/// assert_eq!(get_kind(&doc), "Pod");
/// assert_eq!(get_kind(&Document::new()), "");
/// ```
#[must_use]
pub fn get_kind(doc: &Document) -> &str {
    doc.get(KIND_KEY).and_then(Value::as_str).unwrap_or("")
}

/// The string at `metadata.name`, or `""`.
///
/// Reads `""` when `metadata` is missing or not a mapping, or when `name` is
/// missing or not a string.
#[must_use]
pub fn get_name(doc: &Document) -> &str {
    doc.get(METADATA_KEY)
        .and_then(Value::as_mapping)
        .and_then(|metadata| metadata.get(NAME_KEY))
        .and_then(Value::as_str)
        .unwrap_or("")
}
