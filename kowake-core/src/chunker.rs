//! Greedy packing of sentences into bounded chunks
//!
//! Sentences are contiguous spans of the input, so the accumulator is a byte
//! range plus a character count; chunk texts are slices of the input and the
//! chunk sequence covers it exactly.

use crate::dto::{Chunk, ChunkKind};
use crate::segmenter::Sentence;

/// Packing result with slice statistics
pub(crate) struct Packed {
    pub chunks: Vec<Chunk>,
    pub oversized_splits: usize,
}

/// Pack sentences into chunks of at most `max_chars` characters.
///
/// A sentence that exceeds the budget on its own is emitted immediately as
/// consecutive fixed-width slices of exactly `max_chars` characters (the
/// last slice may be shorter); the accumulator is not carried across such a
/// sentence. If no chunks were produced the original text is returned as a
/// single chunk, so callers always receive at least one unit.
pub(crate) fn pack(text: &str, sentences: &[Sentence<'_>], max_chars: usize) -> Packed {
    debug_assert!(max_chars > 0, "budget validated at configuration time");

    let mut chunks = Vec::new();
    let mut oversized_splits = 0;
    // (byte start, byte end, char count) of the sentences accumulated so far
    let mut acc: Option<(usize, usize, usize)> = None;

    for sentence in sentences {
        if let Some((start, end, chars)) = acc {
            if chars + sentence.char_count <= max_chars {
                acc = Some((
                    start,
                    end + sentence.text.len(),
                    chars + sentence.char_count,
                ));
                continue;
            }
            chunks.push(packed_chunk(text, start, end, chars));
            acc = None;
        }

        if sentence.char_count > max_chars {
            slice_oversized(sentence, max_chars, &mut chunks);
            oversized_splits += 1;
        } else {
            acc = Some((
                sentence.byte_offset,
                sentence.byte_offset + sentence.text.len(),
                sentence.char_count,
            ));
        }
    }

    if let Some((start, end, chars)) = acc {
        chunks.push(packed_chunk(text, start, end, chars));
    }

    // Empty input still yields one (empty) chunk for downstream submission
    if chunks.is_empty() {
        chunks.push(Chunk {
            text: text.to_string(),
            byte_offset: 0,
            char_count: text.chars().count(),
            kind: ChunkKind::Packed,
        });
    }

    Packed {
        chunks,
        oversized_splits,
    }
}

fn packed_chunk(text: &str, start: usize, end: usize, char_count: usize) -> Chunk {
    Chunk {
        text: text[start..end].to_string(),
        byte_offset: start,
        char_count,
        kind: ChunkKind::Packed,
    }
}

/// Emit an oversized sentence as fixed-width slices of `max_chars` characters
fn slice_oversized(sentence: &Sentence<'_>, max_chars: usize, chunks: &mut Vec<Chunk>) {
    let mut slice_start = 0;
    let mut chars_in_slice = 0;

    for (pos, _) in sentence.text.char_indices() {
        if chars_in_slice == max_chars {
            chunks.push(Chunk {
                text: sentence.text[slice_start..pos].to_string(),
                byte_offset: sentence.byte_offset + slice_start,
                char_count: chars_in_slice,
                kind: ChunkKind::Slice,
            });
            slice_start = pos;
            chars_in_slice = 0;
        }
        chars_in_slice += 1;
    }

    if chars_in_slice > 0 {
        chunks.push(Chunk {
            text: sentence.text[slice_start..].to_string(),
            byte_offset: sentence.byte_offset + slice_start,
            char_count: chars_in_slice,
            kind: ChunkKind::Slice,
        });
    }
}
