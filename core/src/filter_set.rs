//! `FilterSet`: OR across every filter given on the command line
//!
//! # Semantics
//!
//! - An empty set matches every document.
//! - Otherwise a document matches if any single filter matches it. Order
//!   never changes the boolean result.
//! - Order does decide highlight ties: for each field the highest-ranked
//!   highlight wins, and among equal ranks the earliest filter wins.

use crate::{Document, Highlight, InputMatcher, ResourceFilter};

/// An ordered collection of [`ResourceFilter`]s.
///
/// # Example
///
/// ```
/// use res::{Document, FilterSet};
///
/// let filters = FilterSet::from_patterns(["Pod/", "/svc"]);
/// let doc: Document = serde_yaml::from_str("kind: Job\nmetadata:\n  name: svc-migrate\n").unwrap();
/// assert!(filters.matches_any(&doc));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    filters: Vec<ResourceFilter>,
}

impl FilterSet {
    /// Create a set from already compiled filters.
    #[must_use]
    pub fn new(filters: Vec<ResourceFilter>) -> Self {
        Self { filters }
    }

    /// Compile each pattern into a filter, keeping their order.
    #[must_use]
    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        patterns.into_iter().map(ResourceFilter::new).collect()
    }

    /// Returns `true` if there are no filters (everything matches).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Number of filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Iterate the filters in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResourceFilter> {
        self.filters.iter()
    }

    /// The filters as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ResourceFilter] {
        &self.filters
    }

    /// See [`matches_any`].
    #[must_use]
    pub fn matches_any(&self, doc: &Document) -> bool {
        matches_any(&self.filters, doc)
    }

    /// Best kind highlight across all filters.
    #[must_use]
    pub fn highlight_kind<'a>(&self, kind: &'a str) -> Highlight<'a> {
        best_highlight(self.filters.iter().map(ResourceFilter::kind), kind)
    }

    /// Best name highlight across all filters.
    #[must_use]
    pub fn highlight_name<'a>(&self, name: &'a str) -> Highlight<'a> {
        best_highlight(self.filters.iter().map(ResourceFilter::name), name)
    }
}

impl FromIterator<ResourceFilter> for FilterSet {
    fn from_iter<T: IntoIterator<Item = ResourceFilter>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = &'a ResourceFilter;
    type IntoIter = std::slice::Iter<'a, ResourceFilter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}

/// `true` if `filters` is empty or at least one filter matches `doc`.
#[must_use]
pub fn matches_any(filters: &[ResourceFilter], doc: &Document) -> bool {
    if filters.is_empty() {
        return true;
    }

    let matched = filters.iter().find(|filter| filter.matches(doc));
    tracing::trace!(
        matched = ?matched.map(ResourceFilter::pattern),
        "evaluated filter set"
    );
    matched.is_some()
}

/// Run every matcher's highlighter over `value` and keep the highest rank.
///
/// Ties keep the earlier matcher. When nothing highlights, `value` comes
/// back unchanged with rank 0.
#[must_use]
pub fn best_highlight<'m, 'a, M, I>(matchers: I, value: &'a str) -> Highlight<'a>
where
    M: InputMatcher + 'm,
    I: IntoIterator<Item = &'m M>,
{
    let mut best = Highlight::unchanged(value);
    for matcher in matchers {
        let candidate = matcher.highlight(value);
        if candidate.rank() > best.rank() {
            best = candidate;
        }
    }
    best
}
