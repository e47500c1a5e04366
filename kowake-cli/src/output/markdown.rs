//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use kowake_core::Chunk;
use std::io::Write;

/// Markdown formatter - outputs chunks as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    chunk_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunk_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_chunk(&mut self, chunk: &Chunk) -> Result<()> {
        self.chunk_count += 1;
        writeln!(self.writer, "{}. {}", self.chunk_count, chunk.text.trim())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total chunks: {}*", self.chunk_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kowake_core::ChunkKind;

    #[test]
    fn test_numbered_list_with_summary() {
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            for text in ["One.", " Two."] {
                formatter
                    .format_chunk(&Chunk {
                        text: text.to_string(),
                        byte_offset: 0,
                        char_count: text.chars().count(),
                        kind: ChunkKind::Packed,
                    })
                    .unwrap();
            }
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("1. One."));
        assert!(output.contains("2. Two."));
        assert!(output.contains("*Total chunks: 2*"));
    }
}
