//! Data types for documents, chunks, and indexed records.

use serde::{Deserialize, Serialize};

/// A source document with extracted text and optional page boundaries.
///
/// Documents are immutable once chunked; re-ingesting the same source
/// produces records with the same deterministic ids and overwrites the
/// previous set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Display name of the source file, used to derive record ids.
    pub source: String,
    /// The extracted text content.
    pub text: String,
    /// Character offsets where pages 2..n begin. Empty for unpaginated text.
    pub page_offsets: Vec<usize>,
}

impl Document {
    /// Create an unpaginated document.
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self { source: source.into(), text: text.into(), page_offsets: Vec::new() }
    }

    /// Create a document with known page boundaries.
    pub fn with_pages(
        source: impl Into<String>,
        text: impl Into<String>,
        page_offsets: Vec<usize>,
    ) -> Self {
        Self { source: source.into(), text: text.into(), page_offsets }
    }

    /// The 1-based page number containing the given character offset, or
    /// `None` if the document is unpaginated.
    pub fn page_at(&self, char_offset: usize) -> Option<u32> {
        if self.page_offsets.is_empty() {
            return None;
        }
        let page = self.page_offsets.partition_point(|&start| start <= char_offset);
        Some(page as u32 + 1)
    }
}

/// A segment of a [`Document`] produced by the chunker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chunk {
    /// 0-based position within the document, unique per document.
    pub index: usize,
    /// The chunk's text span.
    pub text: String,
    /// 1-based page the chunk starts on, if the document is paginated.
    pub page_number: Option<u32>,
}

/// Metadata stored alongside each vector in the index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordMetadata {
    /// The chunk text, returned verbatim by queries.
    pub text: String,
    /// The source document's display name.
    pub source: String,
    /// 1-based source page, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
}

/// A record as stored in the vector index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexedRecord {
    /// Deterministic id derived from `(source, chunk index)`.
    pub id: String,
    /// The chunk's embedding vector.
    pub embedding: Vec<f32>,
    /// Text and provenance metadata.
    pub metadata: RecordMetadata,
}

impl IndexedRecord {
    /// Derive the deterministic record id for a chunk.
    ///
    /// Re-ingesting an unchanged document yields the same ids, so index
    /// backends that treat the id as a primary key overwrite rather than
    /// duplicate.
    pub fn record_id(source: &str, chunk_index: usize) -> String {
        format!("{source}_{chunk_index}")
    }
}

/// A match returned from a vector index query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// The matched record's id.
    pub id: String,
    /// The matched chunk text.
    pub text: String,
    /// Similarity score (higher is more relevant).
    pub score: f32,
}
