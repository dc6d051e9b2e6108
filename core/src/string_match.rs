//! `PatternSpec`: Parsed form of one axis pattern
//!
//! This type represents what the user *wrote* for one axis (e.g. `^pod$`):
//! the anchor flags and the case-folded needle. It compiles to the runtime
//! [`StringMatcher`] via [`to_matcher()`](PatternSpec::to_matcher).
//!
//! # Naming: Spec vs Matcher
//!
//! - [`PatternSpec`] = parsed intent (anchors + needle)
//! - [`StringMatcher`] = runtime engine (what evaluates per document)

use crate::StringMatcher;
use std::fmt;
use std::str::FromStr;

/// Leading anchor: the needle must match at the start of the value.
pub const ANCHOR_START: char = '^';

/// Trailing anchor: the needle must match at the end of the value.
pub const ANCHOR_END: char = '$';

/// One axis pattern with its anchors stripped and its text folded to lowercase.
///
/// Parsing is total: every string, including `""`, `"^"`, `"$"` and `"^$"`,
/// yields a spec. An empty needle matches everything.
///
/// # Example
///
/// ```
/// use res::PatternSpec;
///
/// let spec = PatternSpec::parse("^Deploy");
/// assert!(spec.anchored_start);
/// assert!(!spec.anchored_end);
/// assert_eq!(spec.needle, "deploy");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSpec {
    /// Anchor-stripped, lowercased literal text.
    pub needle: String,
    /// Pattern started with `^`.
    pub anchored_start: bool,
    /// Pattern ended with `$`.
    pub anchored_end: bool,
}

impl PatternSpec {
    /// Parse one axis pattern.
    ///
    /// The leading `^` is stripped before the trailing `$`, so `"^"` is a
    /// start-anchored empty needle, not an end anchor.
    #[must_use]
    pub fn parse(pattern: &str) -> Self {
        let (rest, anchored_start) = match pattern.strip_prefix(ANCHOR_START) {
            Some(rest) => (rest, true),
            None => (pattern, false),
        };
        let (body, anchored_end) = match rest.strip_suffix(ANCHOR_END) {
            Some(body) => (body, true),
            None => (rest, false),
        };

        Self {
            needle: body.to_lowercase(),
            anchored_start,
            anchored_end,
        }
    }

    /// Returns `true` if the needle is empty (matches any value).
    #[must_use]
    pub fn is_catch_all(&self) -> bool {
        self.needle.is_empty()
    }

    /// Compile into the runtime matcher.
    #[must_use]
    pub fn to_matcher(&self) -> StringMatcher {
        let needle = self.needle.clone();
        match (self.anchored_start, self.anchored_end) {
            (true, true) => StringMatcher::Exact(needle),
            (true, false) => StringMatcher::Prefix(needle),
            (false, true) => StringMatcher::Suffix(needle),
            (false, false) => StringMatcher::Contains(needle),
        }
    }
}

impl FromStr for PatternSpec {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for PatternSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.anchored_start {
            write!(f, "{ANCHOR_START}")?;
        }
        f.write_str(&self.needle)?;
        if self.anchored_end {
            write!(f, "{ANCHOR_END}")?;
        }
        Ok(())
    }
}
