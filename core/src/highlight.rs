//! `Highlight`: The result of marking a match inside a field value
//!
//! A highlighter never fails: when nothing qualifies it hands the input back
//! untouched with a rank of zero. A positive rank is the byte length of the
//! substring that was wrapped in [`HIGHLIGHT_BEGIN`] / [`HIGHLIGHT_END`].

use std::borrow::Cow;
use std::fmt;

/// Terminal escape that turns on bold + underline.
pub const HIGHLIGHT_BEGIN: &str = "\x1b[1;4m";

/// Terminal escape that turns off bold + underline, leaving colors intact.
pub const HIGHLIGHT_END: &str = "\x1b[22;24m";

/// A possibly marked-up copy of a field value.
///
/// Borrows the input when there is no match, so misses never allocate.
///
/// # Example
///
/// ```
/// use res::{Highlight, HIGHLIGHT_BEGIN, HIGHLIGHT_END};
///
/// let miss = Highlight::unchanged("web");
/// assert!(!miss.is_match());
/// assert_eq!(miss.text(), "web");
///
/// let hit = Highlight::marked("podxyz", 1, 3);
/// assert_eq!(hit.rank(), 2);
/// assert_eq!(hit.text(), format!("p{HIGHLIGHT_BEGIN}od{HIGHLIGHT_END}xyz"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight<'a> {
    text: Cow<'a, str>,
    rank: usize,
}

impl<'a> Highlight<'a> {
    /// The value as-is, rank 0.
    #[must_use]
    pub fn unchanged(value: &'a str) -> Self {
        Self {
            text: Cow::Borrowed(value),
            rank: 0,
        }
    }

    /// Wrap `value[start..end]` in the highlight markers.
    ///
    /// # Panics
    ///
    /// Panics if `start..end` is not a valid char-boundary range of `value`.
    #[must_use]
    pub fn marked(value: &'a str, start: usize, end: usize) -> Self {
        let (head, rest) = value.split_at(start);
        let (hit, tail) = rest.split_at(end - start);

        let mut text =
            String::with_capacity(value.len() + HIGHLIGHT_BEGIN.len() + HIGHLIGHT_END.len());
        text.push_str(head);
        text.push_str(HIGHLIGHT_BEGIN);
        text.push_str(hit);
        text.push_str(HIGHLIGHT_END);
        text.push_str(tail);

        Self {
            text: Cow::Owned(text),
            rank: hit.len(),
        }
    }

    /// The (possibly marked-up) text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the highlighted substring; 0 when nothing was highlighted.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Returns `true` if a substring was highlighted.
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.rank > 0
    }

    /// Consume the highlight, returning its text.
    #[must_use]
    pub fn into_text(self) -> Cow<'a, str> {
        self.text
    }
}

impl fmt::Display for Highlight<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
