//! Sentence-aware text chunking for length-limited speech synthesis
//!
//! Speech APIs accept a bounded amount of text per request. This crate
//! splits arbitrary text at sentence boundaries (English and Japanese by
//! default), greedily packs whole sentences into chunks under a character
//! budget, and slices sentences that exceed the budget on their own into
//! fixed-width pieces. Concatenating the chunks always reproduces the
//! input, so audio synthesized chunk by chunk plays back as the full text.
//!
//! ```
//! use kowake_core::chunk_with_limit;
//!
//! let chunks = chunk_with_limit("短い文。もう一つの文です。", 10).unwrap();
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[0].text, "短い文。");
//! ```
//!
//! An optional cleaning pass strips Markdown markup and decorative symbols
//! before segmentation, for text coming straight from an LLM reply.

#![warn(missing_docs)]

pub mod cleaner;
pub mod config;
pub mod dto;
pub mod error;
pub mod segmenter;

mod chunker;

use std::time::Instant;

// Re-export key types
pub use cleaner::{CleanConfig, TextCleaner, DEFAULT_REMOVE, DEFAULT_TO_SPACE};
pub use config::{ChunkConfig, ChunkConfigBuilder, DEFAULT_MAX_CHARS};
pub use dto::{Chunk, ChunkKind, Input, Metadata, Output};
pub use error::{ChunkError, Result};
pub use segmenter::{Sentence, SentenceSplitter, DEFAULT_TERMINATORS};

/// Main entry point for text chunking
///
/// Holds a validated configuration and the derived splitter and cleaner, so
/// one instance can chunk any number of inputs. The chunker touches no
/// shared state and may be used from multiple threads.
pub struct TextChunker {
    config: ChunkConfig,
    splitter: SentenceSplitter,
    cleaner: Option<TextCleaner>,
}

impl TextChunker {
    /// Create a chunker with the default configuration (200-character
    /// budget, English and Japanese terminators, no cleaning)
    pub fn new() -> Self {
        Self::with_config(ChunkConfig::default())
    }

    /// Create a chunker with a specific character budget
    pub fn with_max_chars(max_chars: usize) -> Result<Self> {
        let config = ChunkConfig::builder().max_chars(max_chars).build()?;
        Ok(Self::with_config(config))
    }

    /// Create a chunker with a custom configuration
    pub fn with_config(config: ChunkConfig) -> Self {
        let splitter = SentenceSplitter::new(config.terminators());
        let cleaner = config.clean().cloned().map(TextCleaner::with_config);
        Self {
            config,
            splitter,
            cleaner,
        }
    }

    /// Chunk an input source and return chunks with runtime statistics
    ///
    /// When the configuration enables cleaning, the text is normalized
    /// first; chunks then cover the cleaned text rather than the raw input.
    pub fn chunk(&self, input: Input) -> Result<Output> {
        let start = Instant::now();

        let text = input.read_text()?;
        let text = match &self.cleaner {
            Some(cleaner) => cleaner.clean(&text),
            None => text,
        };

        let sentences = self.splitter.split(&text);
        let packed = chunker::pack(&text, &sentences, self.config.max_chars());
        let elapsed = start.elapsed();

        let metadata = Metadata {
            total_bytes: text.len(),
            total_chars: text.chars().count(),
            sentence_count: sentences.len(),
            chunk_count: packed.chunks.len(),
            oversized_splits: packed.oversized_splits,
            processing_time_ms: elapsed.as_millis() as u64,
        };

        Ok(Output {
            chunks: packed.chunks,
            metadata,
        })
    }

    /// Chunk a text string directly (convenience method)
    pub fn chunk_text(&self, text: &str) -> Result<Vec<Chunk>> {
        Ok(self.chunk(Input::from_text(text))?.chunks)
    }

    /// Get the current configuration
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }
}

impl Default for TextChunker {
    fn default() -> Self {
        Self::new()
    }
}

// Convenience functions

/// Chunk text with the default configuration
pub fn chunk_text(text: &str) -> Result<Vec<Chunk>> {
    TextChunker::new().chunk_text(text)
}

/// Chunk text with a specific character budget
pub fn chunk_with_limit(text: &str, max_chars: usize) -> Result<Vec<Chunk>> {
    TextChunker::with_max_chars(max_chars)?.chunk_text(text)
}
