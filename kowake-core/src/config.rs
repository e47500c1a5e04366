//! Chunking configuration
//!
//! `ChunkConfig` is constructed through its builder (or loaded from a TOML
//! profile) so an unusable budget is rejected before any chunking runs.

use crate::cleaner::CleanConfig;
use crate::error::{ChunkError, Result};
use crate::segmenter::DEFAULT_TERMINATORS;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default chunk budget in characters
pub const DEFAULT_MAX_CHARS: usize = 200;

/// Validated configuration for the chunking pipeline
#[derive(Debug, Clone)]
pub struct ChunkConfig {
    max_chars: usize,
    terminators: Vec<char>,
    clean: Option<CleanConfig>,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            terminators: DEFAULT_TERMINATORS.to_vec(),
            clean: None,
        }
    }
}

impl ChunkConfig {
    /// Create a builder
    pub fn builder() -> ChunkConfigBuilder {
        ChunkConfigBuilder::default()
    }

    /// Maximum chunk length in characters
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Sentence terminator characters
    pub fn terminators(&self) -> &[char] {
        &self.terminators
    }

    /// Cleaning configuration, if cleaning is enabled
    pub fn clean(&self) -> Option<&CleanConfig> {
        self.clean.as_ref()
    }

    /// Load a profile from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let profile: Profile = toml::from_str(content)
            .map_err(|e| ChunkError::Config(format!("failed to parse profile: {e}")))?;
        profile.into_config()
    }

    /// Load a profile from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// Builder for [`ChunkConfig`]
#[derive(Debug, Default)]
pub struct ChunkConfigBuilder {
    max_chars: Option<usize>,
    terminators: Option<Vec<char>>,
    clean: Option<CleanConfig>,
}

impl ChunkConfigBuilder {
    /// Set the chunk budget in characters
    pub fn max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = Some(max_chars);
        self
    }

    /// Set the sentence terminator characters
    pub fn terminators(mut self, terminators: impl Into<Vec<char>>) -> Self {
        self.terminators = Some(terminators.into());
        self
    }

    /// Enable cleaning with the given character sets
    pub fn clean(mut self, clean: CleanConfig) -> Self {
        self.clean = Some(clean);
        self
    }

    /// Build the configuration, validating the budget
    pub fn build(self) -> Result<ChunkConfig> {
        let max_chars = self.max_chars.unwrap_or(DEFAULT_MAX_CHARS);
        if max_chars == 0 {
            return Err(ChunkError::InvalidMaxChars { value: max_chars });
        }

        Ok(ChunkConfig {
            max_chars,
            terminators: self
                .terminators
                .unwrap_or_else(|| DEFAULT_TERMINATORS.to_vec()),
            clean: self.clean,
        })
    }
}

/// On-disk profile format
#[derive(Debug, Default, Deserialize, Serialize)]
struct Profile {
    #[serde(default)]
    chunking: ChunkingSection,
    #[serde(default)]
    cleaning: CleaningSection,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
struct ChunkingSection {
    max_chars: usize,
    terminators: Vec<String>,
}

impl Default for ChunkingSection {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            terminators: DEFAULT_TERMINATORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct CleaningSection {
    #[serde(default)]
    enabled: bool,
    remove: Option<Vec<char>>,
    to_space: Option<Vec<char>>,
}

impl Profile {
    fn into_config(self) -> Result<ChunkConfig> {
        let mut terminators = Vec::with_capacity(self.chunking.terminators.len());
        for entry in &self.chunking.terminators {
            let mut chars = entry.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => terminators.push(ch),
                _ => {
                    return Err(ChunkError::Config(format!(
                        "terminator must be a single character: {entry:?}"
                    )))
                }
            }
        }

        let mut builder = ChunkConfig::builder()
            .max_chars(self.chunking.max_chars)
            .terminators(terminators);

        if self.cleaning.enabled {
            let defaults = CleanConfig::default();
            builder = builder.clean(CleanConfig {
                remove: self.cleaning.remove.unwrap_or(defaults.remove),
                to_space: self.cleaning.to_space.unwrap_or(defaults.to_space),
            });
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ChunkConfig::default();
        assert_eq!(config.max_chars(), 200);
        assert_eq!(config.terminators(), &['.', '!', '?', '。', '！', '？']);
        assert!(config.clean().is_none());
    }

    #[test]
    fn builder_rejects_zero_budget() {
        let result = ChunkConfig::builder().max_chars(0).build();
        assert!(matches!(
            result,
            Err(ChunkError::InvalidMaxChars { value: 0 })
        ));
    }

    #[test]
    fn builder_sets_all_fields() {
        let config = ChunkConfig::builder()
            .max_chars(80)
            .terminators(vec!['。'])
            .clean(CleanConfig::default())
            .build()
            .unwrap();

        assert_eq!(config.max_chars(), 80);
        assert_eq!(config.terminators(), &['。']);
        assert!(config.clean().is_some());
    }

    #[test]
    fn profile_roundtrip() {
        let toml_content = r#"
[chunking]
max_chars = 120
terminators = [".", "。"]

[cleaning]
enabled = true
"#;

        let config = ChunkConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.max_chars(), 120);
        assert_eq!(config.terminators(), &['.', '。']);
        assert!(config.clean().is_some());
    }

    #[test]
    fn profile_defaults_apply_when_sections_missing() {
        let config = ChunkConfig::from_toml_str("").unwrap();
        assert_eq!(config.max_chars(), DEFAULT_MAX_CHARS);
        assert!(config.clean().is_none());
    }

    #[test]
    fn profile_rejects_zero_budget() {
        let toml_content = r#"
[chunking]
max_chars = 0
terminators = ["."]
"#;

        let result = ChunkConfig::from_toml_str(toml_content);
        assert!(matches!(
            result,
            Err(ChunkError::InvalidMaxChars { value: 0 })
        ));
    }

    #[test]
    fn profile_rejects_multi_char_terminator() {
        let toml_content = r#"
[chunking]
max_chars = 100
terminators = ["?!"]
"#;

        let result = ChunkConfig::from_toml_str(toml_content);
        assert!(matches!(result, Err(ChunkError::Config(_))));
    }

    #[test]
    fn profile_rejects_malformed_toml() {
        let result = ChunkConfig::from_toml_str("[chunking\nmax_chars = 5");
        assert!(matches!(result, Err(ChunkError::Config(_))));
    }
}
