//! res: print the resources of multi-document YAML streams whose kind and
//! name match any of the given patterns.
//!
//! ```text
//! res [-l|-] [-n] [-c] [-v] [-i FILE ...] [--] [PATTERN ...]
//! ```

mod args;
mod decode;
mod error;
mod inputs;
mod options;
mod output;

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::args::Args;
use crate::decode::Documents;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::output::Printer;

/// Env var overriding the log filter (`RES_LOG=res=trace`).
const LOG_ENV: &str = "RES_LOG";

fn main() -> ExitCode {
    let args = Args::parse_normalized();
    init_logging(args.verbose);

    let result = Options::resolve(args, io::stdout().is_terminal())
        .and_then(|opts| run(&opts, io::stdout().lock()));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "res=debug" } else { "res=warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Run
// ═══════════════════════════════════════════════════════════════════════════════

/// Counters for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Summary {
    documents: usize,
    matched: usize,
}

/// Stream every source through the filters into `out`, in input order.
fn run<W: Write>(opts: &Options, out: W) -> Result<Summary> {
    let mut printer = Printer::new(out, opts.mode, opts.color, opts.show_file_ref, &opts.filters);
    let mut summary = Summary::default();

    for source in &opts.sources {
        debug!(%source, "reading input");
        for doc in Documents::from_reader(source.open()?) {
            let doc = doc.map_err(|source_err| Error::Decode {
                input: source.to_string(),
                source: source_err,
            })?;
            summary.documents += 1;
            if opts.filters.matches_any(&doc) {
                summary.matched += 1;
                printer.print(&doc, source)?;
            }
        }
    }
    printer.flush()?;

    info!(
        inputs = opts.sources.len(),
        documents = summary.documents,
        matched = summary.matched,
        "done"
    );
    Ok(summary)
}
