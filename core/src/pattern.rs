//! Pattern splitting: which axis does a raw pattern address?
//!
//! A raw command-line pattern is either `KIND/NAME` (split on the first
//! separator) or a single axis, classified by its first significant letter:
//! uppercase means kind (`Pod`, `^Deploy`), anything else means name.
//!
//! There is no escape for a lowercase kind without a separator; write
//! `pod/` to target the kind axis explicitly.

/// Separator between the kind and name halves of a pattern.
pub const PATTERN_SEPARATOR: char = '/';

/// Split `pattern` into `(kind_pattern, name_pattern)`.
///
/// Either half may be empty; an empty half matches every value. This
/// function is total over all inputs.
///
/// # Example
///
/// ```
/// use res::{split_pattern, PATTERN_SEPARATOR};
///
/// assert_eq!(split_pattern("Class/name", PATTERN_SEPARATOR), ("Class", "name"));
/// assert_eq!(split_pattern("Pod", PATTERN_SEPARATOR), ("Pod", ""));
/// assert_eq!(split_pattern("myname", PATTERN_SEPARATOR), ("", "myname"));
/// ```
#[must_use]
pub fn split_pattern(pattern: &str, separator: char) -> (&str, &str) {
    if let Some(halves) = pattern.split_once(separator) {
        return halves;
    }

    if targets_kind(pattern) {
        (pattern, "")
    } else {
        ("", pattern)
    }
}

/// First letter after an optional `^` is an uppercase ASCII letter.
fn targets_kind(pattern: &str) -> bool {
    pattern
        .strip_prefix(crate::ANCHOR_START)
        .unwrap_or(pattern)
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_uppercase())
}
