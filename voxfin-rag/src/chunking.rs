//! Fixed-size document chunking.
//!
//! The [`Chunker`] trait is the seam between the ingestor and the splitting
//! strategy; [`FixedSizeChunker`] is the one strategy shipped here: character
//! windows of a fixed size with a fixed overlap between neighbors.

use crate::document::{Chunk, Document};
use crate::error::{RagError, Result};

/// A strategy for splitting documents into chunks.
///
/// Implementations are pure: same document in, same chunks out, no side
/// effects.
pub trait Chunker: Send + Sync {
    /// Split a document into ordered chunks.
    ///
    /// Returns an empty `Vec` if the document has empty text.
    fn chunk(&self, document: &Document) -> Vec<Chunk>;
}

/// Splits text into windows of `chunk_size` characters, each window starting
/// `chunk_size - chunk_overlap` characters after the previous one.
///
/// The final chunk may be shorter than `chunk_size`. Windows are measured in
/// characters, not bytes, so multi-byte text never splits a code point.
#[derive(Debug, Clone)]
pub struct FixedSizeChunker {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl FixedSizeChunker {
    /// Create a new `FixedSizeChunker`.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::InvalidConfig`] if `chunk_size` is zero or
    /// `chunk_overlap >= chunk_size`. This is a startup failure, never a
    /// per-request one.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(RagError::InvalidConfig("chunk_size must be greater than zero".to_string()));
        }
        if chunk_overlap >= chunk_size {
            return Err(RagError::InvalidConfig(format!(
                "chunk_overlap ({chunk_overlap}) must be less than chunk_size ({chunk_size})"
            )));
        }
        Ok(Self { chunk_size, chunk_overlap })
    }
}

impl Chunker for FixedSizeChunker {
    fn chunk(&self, document: &Document) -> Vec<Chunk> {
        if document.text.is_empty() {
            return Vec::new();
        }

        // Byte offset of every character, so windows can be cut at character
        // boundaries with plain slicing.
        let byte_of: Vec<usize> = document.text.char_indices().map(|(i, _)| i).collect();
        let total_chars = byte_of.len();
        let step = self.chunk_size - self.chunk_overlap;

        let mut chunks = Vec::new();
        let mut start = 0;
        let mut index = 0;

        while start < total_chars {
            let end = (start + self.chunk_size).min(total_chars);
            let byte_start = byte_of[start];
            let byte_end = if end == total_chars { document.text.len() } else { byte_of[end] };

            chunks.push(Chunk {
                index,
                text: document.text[byte_start..byte_end].to_string(),
                page_number: document.page_at(start),
            });

            index += 1;
            start += step;
        }

        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_size() {
        assert!(matches!(FixedSizeChunker::new(0, 0), Err(RagError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_overlap_not_smaller_than_size() {
        assert!(matches!(FixedSizeChunker::new(10, 10), Err(RagError::InvalidConfig(_))));
        assert!(matches!(FixedSizeChunker::new(10, 15), Err(RagError::InvalidConfig(_))));
    }

    #[test]
    fn empty_document_yields_no_chunks() {
        let chunker = FixedSizeChunker::new(10, 2).unwrap();
        assert!(chunker.chunk(&Document::new("empty.txt", "")).is_empty());
    }

    #[test]
    fn consecutive_chunks_overlap_exactly() {
        let chunker = FixedSizeChunker::new(10, 4).unwrap();
        let doc = Document::new("t.txt", "abcdefghijklmnopqrstuvwxyz");
        let chunks = chunker.chunk(&doc);

        for pair in chunks.windows(2) {
            let prev: Vec<char> = pair[0].text.chars().collect();
            let next: Vec<char> = pair[1].text.chars().collect();
            if prev.len() == 10 {
                assert_eq!(&prev[prev.len() - 4..], &next[..4.min(next.len())]);
            }
        }
    }

    #[test]
    fn multibyte_text_never_splits_a_code_point() {
        let chunker = FixedSizeChunker::new(3, 1).unwrap();
        let doc = Document::new("t.txt", "€…ß€…ß€…ß");
        let chunks = chunker.chunk(&doc);
        assert!(!chunks.is_empty());
        for chunk in &chunks {
            assert!(chunk.text.chars().count() <= 3);
        }
    }

    #[test]
    fn page_number_follows_window_start() {
        let chunker = FixedSizeChunker::new(5, 0).unwrap();
        // Pages: [0, 7) and [7, ...).
        let doc = Document::with_pages("t.txt", "aaaaaaabbbbbbb", vec![7]);
        let chunks = chunker.chunk(&doc);
        assert_eq!(chunks[0].page_number, Some(1)); // starts at 0
        assert_eq!(chunks[1].page_number, Some(1)); // starts at 5
        assert_eq!(chunks[2].page_number, Some(2)); // starts at 10
    }
}
