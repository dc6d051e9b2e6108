//! `DataInput`: Field extraction from a document
//!
//! A `DataInput` picks one string field out of a [`Document`] so that an
//! [`InputMatcher`](crate::InputMatcher) can evaluate it. Extraction never
//! fails; an absent field is `""`.

use crate::{get_kind, get_name, Document};
use std::fmt::Debug;

/// Extracts one string field from a [`Document`].
///
/// # Example
///
/// ```
/// use res::{DataInput, Document, KindInput, NameInput};
///
/// let doc: Document = serde_yaml::from_str("kind: Pod\nmetadata:\n  name: web\n").unwrap();
/// assert_eq!(KindInput.get(&doc), "Pod");
/// assert_eq!(NameInput.get(&doc), "web");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `DataInput`",
    label = "this type cannot extract a field from a document",
    note = "use `KindInput` or `NameInput`, or implement `get` for your own field"
)]
pub trait DataInput: Send + Sync + Debug {
    /// The field value, or `""` if it is absent or not a string.
    fn get<'d>(&self, doc: &'d Document) -> &'d str;
}

// Blanket implementation for boxed DataInputs
#[diagnostic::do_not_recommend]
impl DataInput for Box<dyn DataInput> {
    fn get<'d>(&self, doc: &'d Document) -> &'d str {
        (**self).get(doc)
    }
}

/// Top-level `kind`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindInput;

impl DataInput for KindInput {
    fn get<'d>(&self, doc: &'d Document) -> &'d str {
        get_kind(doc)
    }
}

/// `metadata.name`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameInput;

impl DataInput for NameInput {
    fn get<'d>(&self, doc: &'d Document) -> &'d str {
        get_name(doc)
    }
}
