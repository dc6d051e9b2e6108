//! Resolved run configuration.
//!
//! [`Args`] is what the user typed; [`Options`] is what the run does with it
//! once inputs are discovered and the terminal is known.

use crate::args::Args;
use crate::error::Result;
use crate::inputs::{self, Source};
use res::FilterSet;

/// What gets written per matching document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The whole document as YAML, `---` separated.
    Full,
    /// One `KIND/NAME` line.
    List,
}

#[derive(Debug)]
pub struct Options {
    pub mode: Mode,
    pub color: bool,
    pub show_file_ref: bool,
    pub sources: Vec<Source>,
    pub filters: FilterSet,
}

impl Options {
    /// Resolve `args` against the filesystem.
    ///
    /// Color needs a terminal on stdout. File references are only shown when
    /// there is more than one input to tell apart.
    pub fn resolve(args: Args, stdout_is_terminal: bool) -> Result<Self> {
        let sources = inputs::discover(&args.inputs)?;
        let filters = FilterSet::from_patterns(args.patterns);

        Ok(Self {
            mode: if args.list { Mode::List } else { Mode::Full },
            color: !args.no_color && stdout_is_terminal,
            show_file_ref: !args.no_file_ref && sources.len() > 1,
            sources,
            filters,
        })
    }
}
