//! Configuration module
//!
//! One TOML file drives both the chunking pipeline and the output defaults.
//! The `[chunking]` and `[cleaning]` sections mirror the core profile
//! format, so the same file also loads through
//! `kowake_core::ChunkConfig::from_toml_file`.

use anyhow::{Context, Result};
use kowake_core::{ChunkConfig, CleanConfig, DEFAULT_MAX_CHARS, DEFAULT_TERMINATORS};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Chunking configuration
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Cleaning configuration
    #[serde(default)]
    pub cleaning: CleaningConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Chunking-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Maximum chunk length in characters
    pub max_chars: usize,

    /// Sentence terminator characters (one character per entry)
    pub terminators: Vec<String>,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            terminators: DEFAULT_TERMINATORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Cleaning-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct CleaningConfig {
    /// Clean text before chunking
    pub enabled: bool,

    /// Characters to drop (defaults to the built-in set)
    pub remove: Option<Vec<char>>,

    /// Characters to replace with a space (defaults to the built-in set)
    pub to_space: Option<Vec<char>>,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            remove: None,
            to_space: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Include per-file metadata in JSON output
    pub include_metadata: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            include_metadata: false,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Build a core chunking configuration from this file plus CLI overrides
    pub fn chunk_config(&self, max_chars: Option<usize>, raw: bool) -> Result<ChunkConfig> {
        let mut terminators = Vec::with_capacity(self.chunking.terminators.len());
        for entry in &self.chunking.terminators {
            let mut chars = entry.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => terminators.push(ch),
                _ => anyhow::bail!("terminator must be a single character: {entry:?}"),
            }
        }

        let mut builder = ChunkConfig::builder()
            .max_chars(max_chars.unwrap_or(self.chunking.max_chars))
            .terminators(terminators);

        if self.cleaning.enabled && !raw {
            let defaults = CleanConfig::default();
            builder = builder.clean(CleanConfig {
                remove: self.cleaning.remove.clone().unwrap_or(defaults.remove),
                to_space: self.cleaning.to_space.clone().unwrap_or(defaults.to_space),
            });
        }

        builder.build().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.chunking.max_chars, 200);
        assert_eq!(config.chunking.terminators.len(), 6);
        assert!(config.cleaning.enabled);
        assert_eq!(config.output.default_format, "text");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_chunk_config_with_override() {
        let config = CliConfig::default();
        let chunk_config = config.chunk_config(Some(80), false).unwrap();

        assert_eq!(chunk_config.max_chars(), 80);
        assert!(chunk_config.clean().is_some());
    }

    #[test]
    fn test_raw_disables_cleaning() {
        let config = CliConfig::default();
        let chunk_config = config.chunk_config(None, true).unwrap();

        assert!(chunk_config.clean().is_none());
    }

    #[test]
    fn test_parse_partial_file() {
        let parsed: CliConfig = toml::from_str(
            r#"
[chunking]
max_chars = 120

[output]
default_format = "json"
"#,
        )
        .unwrap();

        assert_eq!(parsed.chunking.max_chars, 120);
        assert_eq!(parsed.chunking.terminators.len(), 6);
        assert_eq!(parsed.output.default_format, "json");
    }

    #[test]
    fn test_zero_budget_rejected() {
        let parsed: CliConfig = toml::from_str("[chunking]\nmax_chars = 0").unwrap();
        assert!(parsed.chunk_config(None, false).is_err());
    }

    #[test]
    fn test_multi_char_terminator_rejected() {
        let parsed: CliConfig = toml::from_str(r#"[chunking]
terminators = ["?!"]
"#)
        .unwrap();
        assert!(parsed.chunk_config(None, false).is_err());
    }
}
