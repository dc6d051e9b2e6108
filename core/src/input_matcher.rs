//! `InputMatcher`: Case-insensitive matching and highlighting of field values
//!
//! The `InputMatcher` trait works on plain `&str` field values. It is
//! intentionally **domain-agnostic**: the same matcher evaluates a `kind`,
//! a `metadata.name`, or any other string a caller extracts.
//!
//! # Available Matchers
//!
//! - [`StringMatcher::Exact`]: `^needle$`
//! - [`StringMatcher::Prefix`]: `^needle`
//! - [`StringMatcher::Suffix`]: `needle$`
//! - [`StringMatcher::Contains`]: `needle`

use crate::{Highlight, PatternSpec};
use std::fmt::Debug;

/// Matches and highlights string values.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` so compiled filters can be
/// evaluated against independent documents on separate workers.
///
/// # Example
///
/// ```
/// use res::{InputMatcher, StringMatcher};
///
/// let matcher = StringMatcher::compile("^conf");
/// assert!(matcher.matches("ConfigMap"));
/// assert!(!matcher.matches("kubeconfig"));
/// assert_eq!(matcher.highlight("ConfigMap").rank(), 4);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `InputMatcher`",
    label = "this type cannot match field values",
    note = "use `StringMatcher::compile(pattern)` or implement `matches` and `highlight`"
)]
pub trait InputMatcher: Send + Sync + Debug {
    /// Check if the given value matches.
    fn matches(&self, value: &str) -> bool;

    /// Mark the first qualifying occurrence in `value`.
    ///
    /// Returns [`Highlight::unchanged`] when nothing qualifies.
    fn highlight<'a>(&self, value: &'a str) -> Highlight<'a>;
}

// Blanket implementation for boxed InputMatchers
#[diagnostic::do_not_recommend]
impl InputMatcher for Box<dyn InputMatcher> {
    fn matches(&self, value: &str) -> bool {
        (**self).matches(value)
    }

    fn highlight<'a>(&self, value: &'a str) -> Highlight<'a> {
        (**self).highlight(value)
    }
}

/// Case-insensitive string matcher, one variant per anchor combination.
///
/// The needle is always stored lowercased. An empty needle matches every
/// value (whatever the anchors) and never highlights anything.
///
/// # Example
///
/// ```
/// use res::{InputMatcher, StringMatcher};
///
/// let matcher = StringMatcher::suffix("-SVC");
/// assert!(matcher.matches("web-svc"));
/// assert!(!matcher.matches("web-svc-2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringMatcher {
    /// Whole value equals the needle.
    Exact(String),
    /// Value starts with the needle.
    Prefix(String),
    /// Value ends with the needle.
    Suffix(String),
    /// Value contains the needle anywhere.
    Contains(String),
}

impl StringMatcher {
    /// Compile an axis pattern such as `^pod$`, `^pod`, `pod$` or `pod`.
    #[must_use]
    pub fn compile(pattern: &str) -> Self {
        PatternSpec::parse(pattern).to_matcher()
    }

    /// Create an exact match. The value is lowercased.
    #[must_use]
    pub fn exact(value: impl AsRef<str>) -> Self {
        Self::Exact(value.as_ref().to_lowercase())
    }

    /// Create a prefix match. The value is lowercased.
    #[must_use]
    pub fn prefix(value: impl AsRef<str>) -> Self {
        Self::Prefix(value.as_ref().to_lowercase())
    }

    /// Create a suffix match. The value is lowercased.
    #[must_use]
    pub fn suffix(value: impl AsRef<str>) -> Self {
        Self::Suffix(value.as_ref().to_lowercase())
    }

    /// Create a contains match. The value is lowercased.
    #[must_use]
    pub fn contains(value: impl AsRef<str>) -> Self {
        Self::Contains(value.as_ref().to_lowercase())
    }

    /// The lowercased needle.
    #[must_use]
    pub fn needle(&self) -> &str {
        match self {
            Self::Exact(n) | Self::Prefix(n) | Self::Suffix(n) | Self::Contains(n) => n,
        }
    }

    /// Returns `true` if matches must begin at the start of the value.
    #[must_use]
    pub fn is_anchored_start(&self) -> bool {
        matches!(self, Self::Exact(_) | Self::Prefix(_))
    }

    /// Returns `true` if matches must finish at the end of the value.
    #[must_use]
    pub fn is_anchored_end(&self) -> bool {
        matches!(self, Self::Exact(_) | Self::Suffix(_))
    }

    /// Returns `true` if this matcher accepts every value.
    #[must_use]
    pub fn is_catch_all(&self) -> bool {
        self.needle().is_empty()
    }

    /// Back to the parsed form.
    #[must_use]
    pub fn to_spec(&self) -> PatternSpec {
        PatternSpec {
            needle: self.needle().to_owned(),
            anchored_start: self.is_anchored_start(),
            anchored_end: self.is_anchored_end(),
        }
    }
}

impl InputMatcher for StringMatcher {
    fn matches(&self, value: &str) -> bool {
        if self.is_catch_all() {
            return true;
        }

        let value = value.to_lowercase();
        match self {
            Self::Exact(needle) => value == *needle,
            Self::Prefix(needle) => value.starts_with(needle.as_str()),
            Self::Suffix(needle) => value.ends_with(needle.as_str()),
            Self::Contains(needle) => value.contains(needle.as_str()),
        }
    }

    fn highlight<'a>(&self, value: &'a str) -> Highlight<'a> {
        let needle = self.needle();
        if needle.is_empty() {
            return Highlight::unchanged(value);
        }

        let anchored_start = self.is_anchored_start();
        let anchored_end = self.is_anchored_end();

        // A rejected occurrence resumes the scan one character later, so
        // overlapping candidates (e.g. "aa$" in "aaa") are still found.
        for (start, _) in value.char_indices() {
            let Some(len) = folded_prefix_len(&value[start..], needle) else {
                continue;
            };
            let end = start + len;
            if (anchored_start && start != 0) || (anchored_end && end != value.len()) {
                continue;
            }
            return Highlight::marked(value, start, end);
        }

        Highlight::unchanged(value)
    }
}

/// If `haystack` starts with `needle` after lowercasing, return how many
/// bytes of `haystack` that prefix spans.
///
/// Walks the original characters so the returned length always lands on a
/// char boundary of `haystack`, even when lowercasing changes byte widths.
fn folded_prefix_len(haystack: &str, needle: &str) -> Option<usize> {
    let mut expected = needle.chars().peekable();

    for (offset, ch) in haystack.char_indices() {
        if expected.peek().is_none() {
            return Some(offset);
        }
        for folded in ch.to_lowercase() {
            if expected.next() != Some(folded) {
                return None;
            }
        }
    }

    expected.peek().is_none().then_some(haystack.len())
}
