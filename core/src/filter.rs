//! `ResourceFilter`: one pattern compiled against both axes
//!
//! A filter ANDs its kind matcher with its name matcher. An axis whose
//! pattern is empty always passes, so `Pod` ignores names and `web`
//! ignores kinds.

use crate::{
    split_pattern, DataInput, Document, Highlight, InputMatcher, KindInput, NameInput,
    StringMatcher, PATTERN_SEPARATOR,
};
use std::convert::Infallible;
use std::str::FromStr;

/// A compiled `KIND/NAME` pattern.
///
/// Immutable after construction and `Send + Sync`.
///
/// # Example
///
/// ```
/// use res::{Document, ResourceFilter};
///
/// let filter = ResourceFilter::new("^Deploy/api");
/// let doc: Document = serde_yaml::from_str(
///     "kind: Deployment\nmetadata:\n  name: public-api\n",
/// ).unwrap();
///
/// assert!(filter.matches(&doc));
/// assert_eq!(filter.highlight_name("public-api").rank(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFilter {
    pattern: String,
    kind: StringMatcher,
    name: StringMatcher,
}

impl ResourceFilter {
    /// Compile a raw pattern. Any string is accepted.
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let (kind, name) = split_pattern(&pattern, PATTERN_SEPARATOR);
        let kind = StringMatcher::compile(kind);
        let name = StringMatcher::compile(name);

        tracing::debug!(
            pattern = %pattern,
            kind = %kind.to_spec(),
            name = %name.to_spec(),
            "compiled resource filter"
        );

        Self {
            pattern,
            kind,
            name,
        }
    }

    /// The raw pattern this filter was compiled from.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The kind-axis matcher.
    #[must_use]
    pub fn kind(&self) -> &StringMatcher {
        &self.kind
    }

    /// The name-axis matcher.
    #[must_use]
    pub fn name(&self) -> &StringMatcher {
        &self.name
    }

    /// Both axes match the document's `kind` and `metadata.name`.
    #[must_use]
    pub fn matches(&self, doc: &Document) -> bool {
        self.matches_fields(KindInput.get(doc), NameInput.get(doc))
    }

    /// Both axes match the given, already extracted, field values.
    #[must_use]
    pub fn matches_fields(&self, kind: &str, name: &str) -> bool {
        self.kind.matches(kind) && self.name.matches(name)
    }

    /// Highlight `kind` with this filter's kind axis.
    #[must_use]
    pub fn highlight_kind<'a>(&self, kind: &'a str) -> Highlight<'a> {
        self.kind.highlight(kind)
    }

    /// Highlight `name` with this filter's name axis.
    #[must_use]
    pub fn highlight_name<'a>(&self, name: &'a str) -> Highlight<'a> {
        self.name.highlight(name)
    }
}

impl FromStr for ResourceFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
