//! Text normalization ahead of speech synthesis
//!
//! LLM replies arrive decorated with Markdown markup and ornamental symbols
//! that a speech engine would read aloud. The cleaner unwraps Markdown
//! spans, drops decorative characters, and collapses whitespace. Sentence
//! terminators are kept so the cleaned text still segments.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Characters dropped from the text before synthesis
pub const DEFAULT_REMOVE: &[char] = &[
    // Japanese brackets
    '（', '）', '「', '」', '『', '』', '【', '】',
    // Ornaments
    '♪', '♥', '♡', '❤', '★', '☆', '✨', '♦', '♠', '♣',
    // Wave dashes
    '〜', '～',
    // Markdown and other markup punctuation
    '*', '#', '`', '_', '-', '+', '=', '|', '\\', '/', '>', '<', '[', ']', '{', '}', '(', ')',
    ':', ';', '@', '$', '%', '^', '&',
];

/// Characters replaced with a space
pub const DEFAULT_TO_SPACE: &[char] = &['・', '…', '⋯', '―', '－', '—'];

/// Character sets used by the cleaner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanConfig {
    /// Characters dropped entirely
    pub remove: Vec<char>,
    /// Characters replaced with a space
    pub to_space: Vec<char>,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            remove: DEFAULT_REMOVE.to_vec(),
            to_space: DEFAULT_TO_SPACE.to_vec(),
        }
    }
}

/// Normalizes text for speech synthesis
#[derive(Debug, Clone)]
pub struct TextCleaner {
    config: CleanConfig,
}

impl TextCleaner {
    /// Create a cleaner with the default character sets
    pub fn new() -> Self {
        Self::with_config(CleanConfig::default())
    }

    /// Create a cleaner with custom character sets
    pub fn with_config(config: CleanConfig) -> Self {
        Self { config }
    }

    /// The character sets in use
    pub fn config(&self) -> &CleanConfig {
        &self.config
    }

    /// Normalize text: unwrap Markdown spans, apply the character sets,
    /// collapse whitespace runs to a single space, and trim.
    pub fn clean(&self, text: &str) -> String {
        // Markdown spans are unwrapped before character removal; stripping
        // '*' or '[' first would leave the span delimiters unmatched.
        let text = bold_re().replace_all(text, "$1");
        let text = italic_re().replace_all(&text, "$1");
        let text = code_re().replace_all(&text, "$1");
        let text = link_re().replace_all(&text, "$1");

        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            if self.config.remove.contains(&ch) {
                continue;
            }
            if self.config.to_space.contains(&ch) {
                out.push(' ');
            } else {
                out.push(ch);
            }
        }

        out.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}

// Patterns are fixed literals, compiled once per process.

fn bold_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("fixed pattern"))
}

fn italic_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*(.+?)\*").expect("fixed pattern"))
}

fn code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"`(.+?)`").expect("fixed pattern"))
}

fn link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[(.+?)\]\(.+?\)").expect("fixed pattern"))
}
