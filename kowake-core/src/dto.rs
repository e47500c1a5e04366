//! Data transfer objects for the chunking API

use crate::error::{ChunkError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for chunking
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ChunkError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ChunkError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ChunkError::Io)?;
                Ok(buffer)
            }
        }
    }
}

/// How a chunk was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkKind {
    /// One or more whole sentences packed under the budget
    Packed,
    /// Fixed-width slice of a sentence that exceeded the budget on its own
    Slice,
}

/// A bounded-length piece of the input text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// The chunk text
    pub text: String,
    /// Byte offset in the original text
    pub byte_offset: usize,
    /// Length in characters
    pub char_count: usize,
    /// How this chunk was produced
    pub kind: ChunkKind,
}

/// Processing metadata with runtime statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Total bytes processed
    pub total_bytes: usize,
    /// Total characters processed
    pub total_chars: usize,
    /// Number of sentences detected
    pub sentence_count: usize,
    /// Number of chunks produced
    pub chunk_count: usize,
    /// Number of sentences that exceeded the budget and were sliced
    pub oversized_splits: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Result of a chunking run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    /// Ordered chunks covering the processed text
    pub chunks: Vec<Chunk>,
    /// Runtime statistics
    pub metadata: Metadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_text_reads_back() {
        let input = Input::from_text("Hello world.");
        assert_eq!(input.read_text().unwrap(), "Hello world.");
    }

    #[test]
    fn input_bytes_rejects_invalid_utf8() {
        let input = Input::from_bytes(vec![0xff, 0xfe]);
        assert!(matches!(input.read_text(), Err(ChunkError::Utf8(_))));
    }

    #[test]
    fn input_reader_reads_to_end() {
        let input = Input::from_reader(std::io::Cursor::new("from a reader"));
        assert_eq!(input.read_text().unwrap(), "from a reader");
    }

    #[test]
    fn chunk_serializes_kind_as_snake_case() {
        let chunk = Chunk {
            text: "abc".to_string(),
            byte_offset: 0,
            char_count: 3,
            kind: ChunkKind::Slice,
        };

        let json = serde_json::to_string(&chunk).unwrap();
        assert!(json.contains("\"slice\""));

        let back: Chunk = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chunk);
    }
}
