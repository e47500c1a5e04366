//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use kowake_core::{Chunk, Metadata};
use std::io::{self, Write};

/// Plain text formatter - outputs one chunk per line
pub struct TextFormatter<W: Write> {
    writer: W,
    any_source: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            any_source: false,
        }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn begin_source(&mut self, _name: &str, _metadata: &Metadata) -> Result<()> {
        // Blank line between documents
        if self.any_source {
            writeln!(self.writer)?;
        }
        self.any_source = true;
        Ok(())
    }

    fn format_chunk(&mut self, chunk: &Chunk) -> Result<()> {
        writeln!(self.writer, "{}", chunk.text.trim())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
