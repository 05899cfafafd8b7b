//! Vector index trait for storing and searching embeddings.

use async_trait::async_trait;

use crate::document::{IndexedRecord, SearchHit};
use crate::error::Result;

/// A storage backend for embedding vectors with similarity search.
///
/// Records are keyed by their deterministic id, so backends that treat the
/// id as a primary key make repeated ingestion idempotent at the record
/// level. The index is the only state shared between concurrent requests;
/// backends provide their own consistency guarantees.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Insert or overwrite records by id.
    async fn upsert(&self, records: &[IndexedRecord]) -> Result<()>;

    /// Return the `top_k` records most similar to `embedding`, ordered by
    /// descending score. May return fewer than `top_k`, or none.
    async fn query(&self, embedding: &[f32], top_k: usize) -> Result<Vec<SearchHit>>;

    /// Dimensionality this index accepts.
    fn dimensions(&self) -> usize;
}
