//! res - select resources from multi-document YAML streams by kind and name
//!
//! The matching core behind the `res` command. Every pattern compiles into a
//! case-insensitive kind matcher and name matcher; a set of patterns is ORed.
//!
//! # Architecture
//!
//! ```text
//! "class$/^prefix-"        raw pattern
//!        ↓ split_pattern()
//! ("class$", "^prefix-")   one pattern per axis
//!        ↓ PatternSpec::parse()
//! anchors + folded needle
//!        ↓ to_matcher()
//! StringMatcher            matches() + highlight()
//!        ↓
//! ResourceFilter           kind AND name
//!        ↓
//! FilterSet                OR across filters, best highlight per field
//! ```
//!
//! # Pattern language
//!
//! - `KIND/NAME` targets both axes; either half may be empty.
//! - Without `/`, a pattern starting with an uppercase letter (after an
//!   optional `^`) targets the kind, anything else targets the name.
//! - `^` anchors at the start of the value, `$` at the end.
//! - Comparison is always case-insensitive. An empty axis matches anything.
//!
//! # Key Design Insights
//!
//! 1. **Total functions**: no pattern is invalid and no document is
//!    malformed. Missing fields read as `""`.
//!
//! 2. **Immutable once compiled**: filters hold no state and no resources, so
//!    they are `Send + Sync` and can be shared freely across workers.
//!
//! 3. **No ambient toggles**: the core always emits highlight markup; whether
//!    it reaches a terminal is the caller's decision.
//!
//! # Example
//!
//! ```
//! use res::prelude::*;
//!
//! let filters = FilterSet::from_patterns(["Deploy/", "/^web"]);
//!
//! let doc: Document = serde_yaml::from_str(
//!     "apiVersion: v1\nkind: Service\nmetadata:\n  name: web-frontend\n",
//! ).unwrap();
//!
//! assert!(filters.matches_any(&doc));
//! assert_eq!(filters.highlight_name(get_name(&doc)).rank(), 3);
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod data_input;
mod document;
mod filter;
mod filter_set;
mod highlight;
mod input_matcher;
mod pattern;
mod string_match;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

// Field access
pub use data_input::{DataInput, KindInput, NameInput};
pub use document::{get_kind, get_name, Document, KIND_KEY, METADATA_KEY, NAME_KEY};

// Pattern parsing
pub use pattern::{split_pattern, PATTERN_SEPARATOR};
pub use string_match::{PatternSpec, ANCHOR_END, ANCHOR_START};

// Matching and highlighting
pub use highlight::{Highlight, HIGHLIGHT_BEGIN, HIGHLIGHT_END};
pub use input_matcher::{InputMatcher, StringMatcher};

// Filters
pub use filter::ResourceFilter;
pub use filter_set::{best_highlight, matches_any, FilterSet};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use res::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        get_kind, get_name, split_pattern, DataInput, Document, FilterSet, Highlight, InputMatcher,
        KindInput, NameInput, PatternSpec, ResourceFilter, StringMatcher, PATTERN_SEPARATOR,
    };
}
