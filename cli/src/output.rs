//! Rendering of matching documents.

use crate::error::{Error, Result};
use crate::inputs::Source;
use crate::options::Mode;
use res::{get_kind, get_name, Document, FilterSet};
use std::io::Write;

const KIND_COLOR: &str = "\x1b[0;35m";
const SLASH_COLOR: &str = "\x1b[0;2m";
const NAME_COLOR: &str = "\x1b[0;33m";
const FILE_REF_COLOR: &str = "\x1b[0;2;3;32m";
const RESET: &str = "\x1b[0m";

/// Writes matching documents in the configured [`Mode`].
pub struct Printer<'f, W> {
    out: W,
    mode: Mode,
    color: bool,
    show_file_ref: bool,
    filters: &'f FilterSet,
}

impl<'f, W: Write> Printer<'f, W> {
    pub fn new(out: W, mode: Mode, color: bool, show_file_ref: bool, filters: &'f FilterSet) -> Self {
        Self {
            out,
            mode,
            color,
            show_file_ref,
            filters,
        }
    }

    /// Write one matching document that came from `source`.
    pub fn print(&mut self, doc: &Document, source: &Source) -> Result<()> {
        match self.mode {
            Mode::Full => self.print_full(doc, source),
            Mode::List => self.print_line(doc, source),
        }
    }

    pub fn flush(&mut self) -> Result<()> {
        Ok(self.out.flush()?)
    }

    fn print_full(&mut self, doc: &Document, source: &Source) -> Result<()> {
        let yaml = serde_yaml::to_string(doc).map_err(Error::Encode)?;
        writeln!(self.out, "---")?;
        if self.show_file_ref {
            writeln!(self.out, "# file: {source}")?;
        }
        self.out.write_all(yaml.as_bytes())?;
        Ok(())
    }

    fn print_line(&mut self, doc: &Document, source: &Source) -> Result<()> {
        let kind = get_kind(doc);
        let name = get_name(doc);

        if self.color {
            let kind = self.filters.highlight_kind(kind);
            let name = self.filters.highlight_name(name);
            write!(self.out, "{KIND_COLOR}{kind}{SLASH_COLOR}/{NAME_COLOR}{name}")?;
            if self.show_file_ref {
                write!(self.out, "\t{FILE_REF_COLOR}# {source}")?;
            }
            writeln!(self.out, "{RESET}")?;
        } else {
            write!(self.out, "{kind}/{name}")?;
            if self.show_file_ref {
                write!(self.out, "\t# {source}")?;
            }
            writeln!(self.out)?;
        }
        Ok(())
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}
