//! Sentence segmentation over a fixed terminator set
//!
//! A sentence runs from just after the previous terminator (or the start of
//! the text) through and including the next terminator character. Trailing
//! text without a terminator forms one final fragment. The scan is a single
//! linear pass over code points; no patterns are compiled.

use smallvec::SmallVec;

/// Default terminator characters: English and Japanese sentence endings
pub const DEFAULT_TERMINATORS: [char; 6] = ['.', '!', '?', '。', '！', '？'];

/// A contiguous sentence span of the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// The sentence text, including its terminator
    pub text: &'a str,
    /// Byte offset in the original text
    pub byte_offset: usize,
    /// Length in characters
    pub char_count: usize,
}

/// Splits text into sentences at terminator characters
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    terminators: SmallVec<[char; 8]>,
}

impl SentenceSplitter {
    /// Create a splitter for the given terminator set
    pub fn new(terminators: &[char]) -> Self {
        Self {
            terminators: SmallVec::from_slice(terminators),
        }
    }

    /// Check whether a character ends a sentence
    #[inline]
    pub fn is_terminator(&self, ch: char) -> bool {
        self.terminators.contains(&ch)
    }

    /// The terminator set in use
    pub fn terminators(&self) -> &[char] {
        &self.terminators
    }

    /// Split text into sentences covering it exactly, in order
    pub fn split<'a>(&self, text: &'a str) -> Vec<Sentence<'a>> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut char_count = 0;

        for (pos, ch) in text.char_indices() {
            char_count += 1;
            if self.is_terminator(ch) {
                let end = pos + ch.len_utf8();
                sentences.push(Sentence {
                    text: &text[start..end],
                    byte_offset: start,
                    char_count,
                });
                start = end;
                char_count = 0;
            }
        }

        // Trailing fragment without a terminator
        if start < text.len() {
            sentences.push(Sentence {
                text: &text[start..],
                byte_offset: start,
                char_count,
            });
        }

        sentences
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new(&DEFAULT_TERMINATORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(sentences: &[Sentence<'a>]) -> Vec<&'a str> {
        sentences.iter().map(|s| s.text).collect()
    }

    #[test]
    fn splits_at_ascii_terminators() {
        let splitter = SentenceSplitter::default();
        let sentences = splitter.split("First. Second! Third?");
        assert_eq!(texts(&sentences), vec!["First.", " Second!", " Third?"]);
    }

    #[test]
    fn splits_at_japanese_terminators() {
        let splitter = SentenceSplitter::default();
        let sentences = splitter.split("これは文です。質問ですか？");
        assert_eq!(texts(&sentences), vec!["これは文です。", "質問ですか？"]);
        assert_eq!(sentences[0].char_count, 7);
        assert_eq!(sentences[1].char_count, 6);
    }

    #[test]
    fn trailing_fragment_without_terminator() {
        let splitter = SentenceSplitter::default();
        let sentences = splitter.split("Done. and then some");
        assert_eq!(texts(&sentences), vec!["Done.", " and then some"]);
    }

    #[test]
    fn no_terminators_yields_single_fragment() {
        let splitter = SentenceSplitter::default();
        let sentences = splitter.split("no punctuation here");
        assert_eq!(texts(&sentences), vec!["no punctuation here"]);
        assert_eq!(sentences[0].byte_offset, 0);
    }

    #[test]
    fn only_terminators_yield_single_char_sentences() {
        let splitter = SentenceSplitter::default();
        let sentences = splitter.split("...");
        assert_eq!(texts(&sentences), vec![".", ".", "."]);
    }

    #[test]
    fn empty_input_yields_no_sentences() {
        let splitter = SentenceSplitter::default();
        assert!(splitter.split("").is_empty());
    }

    #[test]
    fn sentences_cover_text_exactly() {
        let splitter = SentenceSplitter::default();
        let text = "Mixed 文章。With English. そして日本語！tail";
        let sentences = splitter.split(text);

        let rebuilt: String = sentences.iter().map(|s| s.text).collect();
        assert_eq!(rebuilt, text);

        let mut expected_offset = 0;
        for sentence in &sentences {
            assert_eq!(sentence.byte_offset, expected_offset);
            assert_eq!(sentence.char_count, sentence.text.chars().count());
            expected_offset += sentence.text.len();
        }
        assert_eq!(expected_offset, text.len());
    }

    #[test]
    fn custom_terminator_set() {
        let splitter = SentenceSplitter::new(&['\n']);
        let sentences = splitter.split("line one\nline two");
        assert_eq!(texts(&sentences), vec!["line one\n", "line two"]);
    }

    #[test]
    fn empty_terminator_set_keeps_text_whole() {
        let splitter = SentenceSplitter::new(&[]);
        let sentences = splitter.split("Anything. Goes! Here?");
        assert_eq!(texts(&sentences), vec!["Anything. Goes! Here?"]);
    }
}
