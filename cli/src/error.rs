//! Errors surfaced by the `res` command.
//!
//! The matching core never fails; everything here is I/O around it.

use std::io;
use std::path::PathBuf;

/// Why a single YAML document could not be turned into a [`res::Document`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error("expected a mapping, found {0}")]
    NotAMapping(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}: no such file or directory", .0.display())]
    NotFound(PathBuf),

    #[error("no yaml files found in directory {}", .0.display())]
    NoYamlFiles(PathBuf),

    #[error("{}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("document decode failed in {input}: {source}")]
    Decode { input: String, source: DecodeError },

    #[error("document encode failed: {0}")]
    Encode(#[source] serde_yaml::Error),

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

impl Error {
    /// The reader of our stdout went away (e.g. `res | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Write(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
