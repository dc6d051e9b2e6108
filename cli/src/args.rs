//! Command-line arguments.
//!
//! Options may appear anywhere before `--`, and anything that is not a
//! recognised option is a pattern, even when it starts with `-` (`-suffix$`).
//! clap wants the opposite, so [`normalize`] moves every pattern behind a
//! `--` before clap sees the arguments.

use clap::{CommandFactory, Parser};
use std::path::PathBuf;

const PATTERN_HELP: &str = "\
PATTERN:
  * All patterns compare case-insensitively. A pattern without \"/\" matches
    the kind if it starts with a capital letter, otherwise the name.
  * Prefix \"^\" says the pattern must match from the beginning,
  * suffix \"$\" says the pattern must match to the end.

Examples:
  Class class/           match if kind contains \"class\"
  name /Name             match if name contains \"name\"
  class/name Class/Name  match if kind contains \"class\" and name contains \"name\"
  ^Pod$ ^pod$/           match if kind equals \"pod\"
  ^name$                 match if name equals \"name\"
  ^Pod ^pod/             match if kind starts with \"pod\"
  -suffix$               match if name ends with \"-suffix\"
  class$/^prefix-        match if kind ends with \"class\" and name starts with \"prefix-\"
  /                      match all resources (same as empty pattern \"\")";

#[derive(Parser, Debug)]
#[command(name = "res")]
#[command(version, about = "Select resources from multi-document YAML streams by kind and name")]
#[command(after_help = PATTERN_HELP)]
pub struct Args {
    /// List matching resources as KIND/NAME instead of printing YAML (same as a bare `-`)
    #[arg(short, long)]
    pub list: bool,

    /// Suppress comments referencing source files
    #[arg(short = 'n')]
    pub no_file_ref: bool,

    /// Suppress colors in output
    #[arg(short = 'c')]
    pub no_color: bool,

    /// Input file or directory, instead of stdin (repeatable)
    #[arg(short = 'i', value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Log debug information to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// KIND/NAME patterns; a resource is printed if it matches any of them
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,
}

impl Args {
    /// Parse `std::env::args()` after [`normalize`].
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize(std::env::args()))
    }
}

/// Reorder raw arguments so that options come first and patterns follow a
/// single `--`.
///
/// Before the first `--`:
/// - a bare `-` becomes `--list`;
/// - an exact option token (`-c`, `--verbose`, `-i FILE`, `-i=FILE`, ...) is
///   kept as an option, with its value attached (`-i=FILE`) if it takes one;
/// - anything else is a pattern.
///
/// Everything after the first `--` is a pattern.
pub fn normalize<I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let cmd = Args::command();
    let mut raw = raw.into_iter();
    let mut options: Vec<String> = raw.next().into_iter().collect();
    let mut patterns = Vec::new();

    while let Some(arg) = raw.next() {
        if arg == "--" {
            patterns.extend(raw.by_ref());
            break;
        }
        if arg == "-" {
            options.push("--list".to_owned());
            continue;
        }
        match option_token(&cmd, &arg) {
            Some(OptionToken::Flag) => options.push(arg),
            // Attach the value so clap never mistakes `-i -x.yaml` for two flags.
            Some(OptionToken::Value) => match raw.next() {
                Some(value) => options.push(format!("{arg}={value}")),
                None => options.push(arg),
            },
            Some(OptionToken::ValueAttached) => options.push(arg),
            None => patterns.push(arg),
        }
    }

    if !patterns.is_empty() {
        options.push("--".to_owned());
        options.extend(patterns);
    }
    options
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionToken {
    /// `-c`, `--verbose`
    Flag,
    /// `-i`, the value is the next argument
    Value,
    /// `-i=FILE`
    ValueAttached,
}

fn option_token(cmd: &clap::Command, arg: &str) -> Option<OptionToken> {
    if matches!(arg, "-h" | "--help" | "-V" | "--version") {
        return Some(OptionToken::Flag);
    }

    for opt in cmd.get_arguments() {
        let takes_value = opt.get_action().takes_values();

        let spellings = opt
            .get_short()
            .map(|c| format!("-{c}"))
            .into_iter()
            .chain(opt.get_long().map(|l| format!("--{l}")));

        for spelling in spellings {
            if arg == spelling {
                return Some(if takes_value {
                    OptionToken::Value
                } else {
                    OptionToken::Flag
                });
            }
            if takes_value
                && arg
                    .strip_prefix(spelling.as_str())
                    .is_some_and(|rest| rest.starts_with('=') && rest.len() > 1)
            {
                return Some(OptionToken::ValueAttached);
            }
        }
    }

    None
}
