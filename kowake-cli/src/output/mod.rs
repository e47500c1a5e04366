//! Output formatting module

use anyhow::Result;
use kowake_core::{Chunk, Metadata};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Begin a new source document
    fn begin_source(&mut self, _name: &str, _metadata: &Metadata) -> Result<()> {
        Ok(())
    }

    /// Format and output a single chunk
    fn format_chunk(&mut self, chunk: &Chunk) -> Result<()>;

    /// Finalize output (e.g., close the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
