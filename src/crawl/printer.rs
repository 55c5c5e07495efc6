// src/crawl/printer.rs
// =============================================================================
// Writes discovered links to the output, one line per link.
//
// Text format:  <tabs><text> (<depth>) - <url>
// JSON format:  {"url":"...","text":"...","depth":N}
// =============================================================================

use crate::config::OutputFormat;
use crate::link::Link;
use std::io::{self, Write};

pub struct LinkPrinter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> LinkPrinter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        LinkPrinter { out, format }
    }

    pub fn print(&mut self, link: &Link) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", link),
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, link)?;
                writeln!(self.out)
            }
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
