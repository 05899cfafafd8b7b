//! In-memory vector index using cosine similarity.
//!
//! [`InMemoryVectorIndex`] keeps records in a `HashMap` behind a
//! `tokio::sync::RwLock`. It is suitable for development, tests, and small
//! knowledge bases that fit in memory.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::document::{IndexedRecord, SearchHit};
use crate::error::{RagError, Result};
use crate::index::VectorIndex;

/// An in-memory [`VectorIndex`] using cosine similarity for search.
///
/// The index is created with a fixed dimension and rejects records whose
/// embedding does not match it, since a dimension mismatch is a
/// configuration error rather than a transient one.
#[derive(Debug)]
pub struct InMemoryVectorIndex {
    dimensions: usize,
    records: RwLock<HashMap<String, IndexedRecord>>,
}

impl InMemoryVectorIndex {
    /// Create an empty index accepting embeddings of the given dimension.
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions, records: RwLock::new(HashMap::new()) }
    }

    /// Number of records currently stored.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the index holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

/// Cosine similarity between two vectors; 0.0 if either has zero magnitude.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[async_trait]
impl VectorIndex for InMemoryVectorIndex {
    async fn upsert(&self, records: &[IndexedRecord]) -> Result<()> {
        for record in records {
            if record.embedding.len() != self.dimensions {
                return Err(RagError::InvalidConfig(format!(
                    "record '{}' has dimension {}, index expects {}",
                    record.id,
                    record.embedding.len(),
                    self.dimensions
                )));
            }
        }

        let mut store = self.records.write().await;
        for record in records {
            store.insert(record.id.clone(), record.clone());
        }
        Ok(())
    }

    async fn query(&self, embedding: &[f32], top_k: usize) -> Result<Vec<SearchHit>> {
        if embedding.len() != self.dimensions {
            return Err(RagError::InvalidConfig(format!(
                "query embedding has dimension {}, index expects {}",
                embedding.len(),
                self.dimensions
            )));
        }

        let store = self.records.read().await;
        let mut hits: Vec<SearchHit> = store
            .values()
            .map(|record| SearchHit {
                id: record.id.clone(),
                text: record.metadata.text.clone(),
                score: cosine_similarity(&record.embedding, embedding),
            })
            .collect();

        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        hits.truncate(top_k);
        Ok(hits)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RecordMetadata;

    fn record(id: &str, embedding: Vec<f32>) -> IndexedRecord {
        IndexedRecord {
            id: id.to_string(),
            embedding,
            metadata: RecordMetadata {
                text: format!("text for {id}"),
                source: "report.txt".to_string(),
                page_number: None,
            },
        }
    }

    #[tokio::test]
    async fn upsert_overwrites_by_id() {
        let index = InMemoryVectorIndex::new(2);
        index.upsert(&[record("a", vec![1.0, 0.0])]).await.unwrap();
        index.upsert(&[record("a", vec![0.0, 1.0])]).await.unwrap();
        assert_eq!(index.len().await, 1);
    }

    #[tokio::test]
    async fn dimension_mismatch_is_invalid_config() {
        let index = InMemoryVectorIndex::new(3);
        let err = index.upsert(&[record("a", vec![1.0, 0.0])]).await.unwrap_err();
        assert!(matches!(err, RagError::InvalidConfig(_)));

        let err = index.query(&[1.0, 0.0], 3).await.unwrap_err();
        assert!(matches!(err, RagError::InvalidConfig(_)));
    }

    #[tokio::test]
    async fn query_orders_by_similarity() {
        let index = InMemoryVectorIndex::new(2);
        index
            .upsert(&[
                record("east", vec![1.0, 0.0]),
                record("north", vec![0.0, 1.0]),
                record("northeast", vec![1.0, 1.0]),
            ])
            .await
            .unwrap();

        let hits = index.query(&[1.0, 0.1], 2).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "east");
        assert_eq!(hits[1].id, "northeast");
    }
}
