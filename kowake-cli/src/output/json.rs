//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use kowake_core::{Chunk, Metadata};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs chunks as a JSON array
///
/// With `include_metadata` the output becomes an array of per-source
/// objects, each carrying the source name, its chunks, and the run
/// statistics; otherwise the chunks of all sources are emitted as one flat
/// array.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    include_metadata: bool,
    sources: Vec<SourceData>,
}

/// Data structure for per-source JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SourceData {
    /// Source name (file path or `<stdin>`)
    pub source: String,
    /// Chunks produced for this source
    pub chunks: Vec<Chunk>,
    /// Run statistics for this source
    pub metadata: Metadata,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool, include_metadata: bool) -> Self {
        Self {
            writer,
            pretty,
            include_metadata,
            sources: Vec::new(),
        }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_source(&mut self, name: &str, metadata: &Metadata) -> Result<()> {
        self.sources.push(SourceData {
            source: name.to_string(),
            chunks: Vec::new(),
            metadata: metadata.clone(),
        });
        Ok(())
    }

    fn format_chunk(&mut self, chunk: &Chunk) -> Result<()> {
        match self.sources.last_mut() {
            Some(source) => source.chunks.push(chunk.clone()),
            None => anyhow::bail!("format_chunk called before begin_source"),
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.include_metadata {
            let sources = std::mem::take(&mut self.sources);
            self.write_value(&sources)?;
        } else {
            let chunks: Vec<Chunk> = self
                .sources
                .drain(..)
                .flat_map(|source| source.chunks)
                .collect();
            self.write_value(&chunks)?;
        }

        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kowake_core::ChunkKind;

    fn chunk(text: &str, byte_offset: usize) -> Chunk {
        Chunk {
            text: text.to_string(),
            byte_offset,
            char_count: text.chars().count(),
            kind: ChunkKind::Packed,
        }
    }

    fn metadata() -> Metadata {
        Metadata {
            total_bytes: 10,
            total_chars: 10,
            sentence_count: 2,
            chunk_count: 2,
            oversized_splits: 0,
            processing_time_ms: 0,
        }
    }

    #[test]
    fn test_flat_array_without_metadata() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, false, false);
            formatter.begin_source("a.txt", &metadata()).unwrap();
            formatter.format_chunk(&chunk("One.", 0)).unwrap();
            formatter.format_chunk(&chunk(" Two.", 4)).unwrap();
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        let parsed: Vec<Chunk> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].text, "One.");
        assert_eq!(parsed[1].byte_offset, 4);
    }

    #[test]
    fn test_per_source_objects_with_metadata() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, true, true);
            formatter.begin_source("a.txt", &metadata()).unwrap();
            formatter.format_chunk(&chunk("One.", 0)).unwrap();
            formatter.begin_source("b.txt", &metadata()).unwrap();
            formatter.format_chunk(&chunk("Two.", 0)).unwrap();
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        let parsed: Vec<SourceData> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].source, "a.txt");
        assert_eq!(parsed[1].chunks[0].text, "Two.");
        assert_eq!(parsed[0].metadata.sentence_count, 2);
    }

    #[test]
    fn test_chunk_before_source_is_an_error() {
        let mut buffer = Vec::new();
        let mut formatter = JsonFormatter::new(&mut buffer, false, false);
        assert!(formatter.format_chunk(&chunk("One.", 0)).is_err());
    }
}
