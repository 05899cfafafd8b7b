//! Hand-rolled fakes shared by the integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use voxfin_rag::document::{IndexedRecord, SearchHit};
use voxfin_rag::embedding::EmbeddingProvider;
use voxfin_rag::error::{RagError, Result};
use voxfin_rag::index::VectorIndex;
use voxfin_rag::inmemory::InMemoryVectorIndex;

/// Deterministic embedder: counts of the letters a, b, c, d.
///
/// Lets tests steer similarity by composing text with a known letter mix.
pub struct LetterCountEmbedder;

#[async_trait]
impl EmbeddingProvider for LetterCountEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut counts = [0f32; 4];
        for c in text.chars() {
            match c {
                'a' => counts[0] += 1.0,
                'b' => counts[1] += 1.0,
                'c' => counts[2] += 1.0,
                'd' => counts[3] += 1.0,
                _ => {}
            }
        }
        Ok(counts.to_vec())
    }

    fn dimensions(&self) -> usize {
        4
    }
}

/// Embedder that always fails.
pub struct FailingEmbedder;

#[async_trait]
impl EmbeddingProvider for FailingEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Err(RagError::EmbeddingFailure {
            provider: "fake".to_string(),
            message: "backend offline".to_string(),
        })
    }

    fn dimensions(&self) -> usize {
        4
    }
}

/// Index wrapper that starts failing upserts after a set number of calls.
pub struct FlakyIndex {
    pub inner: Arc<InMemoryVectorIndex>,
    pub fail_after_upserts: usize,
    upsert_calls: AtomicUsize,
}

impl FlakyIndex {
    pub fn new(inner: Arc<InMemoryVectorIndex>, fail_after_upserts: usize) -> Self {
        Self { inner, fail_after_upserts, upsert_calls: AtomicUsize::new(0) }
    }
}

#[async_trait]
impl VectorIndex for FlakyIndex {
    async fn upsert(&self, records: &[IndexedRecord]) -> Result<()> {
        let call = self.upsert_calls.fetch_add(1, Ordering::SeqCst);
        if call >= self.fail_after_upserts {
            return Err(RagError::IndexError {
                backend: "flaky".to_string(),
                message: "write refused".to_string(),
            });
        }
        self.inner.upsert(records).await
    }

    async fn query(&self, embedding: &[f32], top_k: usize) -> Result<Vec<SearchHit>> {
        self.inner.query(embedding, top_k).await
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }
}

/// Index whose queries always fail.
pub struct BrokenIndex;

#[async_trait]
impl VectorIndex for BrokenIndex {
    async fn upsert(&self, _records: &[IndexedRecord]) -> Result<()> {
        Ok(())
    }

    async fn query(&self, _embedding: &[f32], _top_k: usize) -> Result<Vec<SearchHit>> {
        Err(RagError::IndexError {
            backend: "broken".to_string(),
            message: "index unreachable".to_string(),
        })
    }

    fn dimensions(&self) -> usize {
        4
    }
}
