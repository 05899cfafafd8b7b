//! Document ingestion: extract → chunk → embed → index.
//!
//! The [`Ingestor`] turns one uploaded document into indexed, retrievable
//! knowledge. Embedding is all-or-nothing so the index never holds a
//! document with partial chunk coverage; the batched index write is the one
//! place where partial state is accepted, because committed batches are
//! already visible to retrieval.

use std::sync::Arc;

use tracing::{error, info};

use crate::chunking::Chunker;
use crate::document::{Document, IndexedRecord, RecordMetadata};
use crate::embedding::EmbeddingProvider;
use crate::error::{RagError, Result};
use crate::index::VectorIndex;
use crate::loader::DocumentLoader;

/// Number of records sent to the index per upsert call.
///
/// A throughput tunable, not a correctness parameter.
pub const UPSERT_BATCH_SIZE: usize = 64;

/// Turns uploaded documents into indexed chunks.
///
/// Construct one via [`Ingestor::builder()`]. Holds no per-document state;
/// its only side effect is advancing the vector index.
pub struct Ingestor {
    loader: Arc<dyn DocumentLoader>,
    chunker: Arc<dyn Chunker>,
    embedder: Arc<dyn EmbeddingProvider>,
    index: Arc<dyn VectorIndex>,
}

impl std::fmt::Debug for Ingestor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ingestor").finish_non_exhaustive()
    }
}

impl Ingestor {
    /// Create a new [`IngestorBuilder`].
    pub fn builder() -> IngestorBuilder {
        IngestorBuilder::default()
    }

    /// Ingest one document, returning the number of chunks indexed.
    ///
    /// # Errors
    ///
    /// - [`RagError::DocumentUnreadable`] if extraction yields no content;
    ///   nothing is written.
    /// - [`RagError::EmbeddingFailure`] if any chunk fails to embed; nothing
    ///   is written.
    /// - [`RagError::IndexWriteFailure`] if an upsert batch fails; batches
    ///   written before the failure remain committed and the error carries
    ///   their count.
    pub async fn ingest(&self, raw: &[u8], source: &str) -> Result<usize> {
        let extracted = self.loader.extract(raw).await.inspect_err(|e| {
            error!(source, error = %e, "text extraction failed");
        })?;
        if extracted.text.trim().is_empty() {
            error!(source, "extraction yielded no content");
            return Err(RagError::DocumentUnreadable(format!(
                "document '{source}' yielded no text"
            )));
        }

        let document = Document::with_pages(source, extracted.text, extracted.page_offsets);
        let chunks = self.chunker.chunk(&document);
        if chunks.is_empty() {
            info!(source, chunk_count = 0, "ingested document (no chunks)");
            return Ok(0);
        }

        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        let embeddings = self.embedder.embed_batch(&texts).await.inspect_err(|e| {
            error!(source, error = %e, "embedding failed; aborting ingestion with nothing indexed");
        })?;
        if embeddings.len() != chunks.len() {
            return Err(RagError::EmbeddingFailure {
                provider: "embed_batch".to_string(),
                message: format!(
                    "expected {} embeddings, provider returned {}",
                    chunks.len(),
                    embeddings.len()
                ),
            });
        }

        let records: Vec<IndexedRecord> = chunks
            .iter()
            .zip(embeddings)
            .map(|(chunk, embedding)| IndexedRecord {
                id: IndexedRecord::record_id(&document.source, chunk.index),
                embedding,
                metadata: RecordMetadata {
                    text: chunk.text.clone(),
                    source: document.source.clone(),
                    page_number: chunk.page_number,
                },
            })
            .collect();

        let mut batches_written = 0usize;
        for batch in records.chunks(UPSERT_BATCH_SIZE) {
            self.index.upsert(batch).await.map_err(|e| {
                error!(source, batches_written, error = %e, "index upsert failed mid-ingestion");
                RagError::IndexWriteFailure { batches_written, message: e.to_string() }
            })?;
            batches_written += 1;
        }

        info!(source, chunk_count = records.len(), "ingested document");
        Ok(records.len())
    }
}

/// Builder for constructing an [`Ingestor`].
///
/// All collaborators are required. [`build()`](IngestorBuilder::build)
/// additionally checks that the embedding provider and the vector index
/// agree on dimensionality.
#[derive(Default)]
pub struct IngestorBuilder {
    loader: Option<Arc<dyn DocumentLoader>>,
    chunker: Option<Arc<dyn Chunker>>,
    embedder: Option<Arc<dyn EmbeddingProvider>>,
    index: Option<Arc<dyn VectorIndex>>,
}

impl IngestorBuilder {
    /// Set the document loader.
    pub fn loader(mut self, loader: Arc<dyn DocumentLoader>) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Set the chunking strategy.
    pub fn chunker(mut self, chunker: Arc<dyn Chunker>) -> Self {
        self.chunker = Some(chunker);
        self
    }

    /// Set the embedding provider.
    pub fn embedder(mut self, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    /// Set the vector index backend.
    pub fn index(mut self, index: Arc<dyn VectorIndex>) -> Self {
        self.index = Some(index);
        self
    }

    /// Build the [`Ingestor`], validating that all collaborators are set and
    /// dimensionally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::InvalidConfig`] if a collaborator is missing or
    /// the provider and index disagree on embedding dimension.
    pub fn build(self) -> Result<Ingestor> {
        let loader =
            self.loader.ok_or_else(|| RagError::InvalidConfig("loader is required".to_string()))?;
        let chunker = self
            .chunker
            .ok_or_else(|| RagError::InvalidConfig("chunker is required".to_string()))?;
        let embedder = self
            .embedder
            .ok_or_else(|| RagError::InvalidConfig("embedder is required".to_string()))?;
        let index =
            self.index.ok_or_else(|| RagError::InvalidConfig("index is required".to_string()))?;

        if embedder.dimensions() != index.dimensions() {
            return Err(RagError::InvalidConfig(format!(
                "embedding provider produces {}-dimensional vectors, index expects {}",
                embedder.dimensions(),
                index.dimensions()
            )));
        }

        Ok(Ingestor { loader, chunker, embedder, index })
    }
}
