//! Knowledge-base side of the Voxfin voice Q&A engine.
//!
//! This crate turns reference documents into retrievable context for
//! grounded question answering:
//!
//! - [`FixedSizeChunker`] splits extracted text into overlapping windows.
//! - [`EmbeddingProvider`] and [`VectorIndex`] are the capability seams to
//!   external embedding and similarity-search backends;
//!   [`InMemoryVectorIndex`] is a cosine-similarity reference backend.
//! - [`Ingestor`] composes loader, chunker, embedder, and index to ingest
//!   one document (extract → chunk → embed → batched upsert).
//! - [`Retriever`] embeds a query, fetches the top-K nearest chunks, and
//!   assembles them into a [`QueryContext`], degrading to explicit marker
//!   text instead of failing.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use voxfin_rag::{
//!     FixedSizeChunker, InMemoryVectorIndex, Ingestor, PlainTextLoader, RagConfig, Retriever,
//! };
//!
//! let config = RagConfig::default();
//! let index = Arc::new(InMemoryVectorIndex::new(embedder.dimensions()));
//!
//! let ingestor = Ingestor::builder()
//!     .loader(Arc::new(PlainTextLoader))
//!     .chunker(Arc::new(FixedSizeChunker::new(config.chunk_size, config.chunk_overlap)?))
//!     .embedder(embedder.clone())
//!     .index(index.clone())
//!     .build()?;
//!
//! let indexed = ingestor.ingest(&bytes, "q3-report.txt").await?;
//! let retriever = Retriever::new(embedder, index, config.top_k)?;
//! let context = retriever.retrieve("how did Q3 revenue compare to Q2?").await;
//! ```

pub mod chunking;
pub mod config;
pub mod document;
pub mod embedding;
pub mod error;
pub mod index;
pub mod ingest;
pub mod inmemory;
pub mod loader;
pub mod retrieve;

#[cfg(feature = "openai")]
pub mod openai;

pub use chunking::{Chunker, FixedSizeChunker};
pub use config::{RagConfig, RagConfigBuilder};
pub use document::{Chunk, Document, IndexedRecord, RecordMetadata, SearchHit};
pub use embedding::EmbeddingProvider;
pub use error::{RagError, Result};
pub use index::VectorIndex;
pub use ingest::{Ingestor, IngestorBuilder, UPSERT_BATCH_SIZE};
pub use inmemory::InMemoryVectorIndex;
pub use loader::{DocumentLoader, ExtractedText, PlainTextLoader};
pub use retrieve::{
    CONTEXT_SEPARATOR, CONTEXT_UNAVAILABLE, ContextStatus, NO_RELEVANT_CONTEXT, QueryContext,
    Retriever,
};

#[cfg(feature = "openai")]
pub use openai::OpenAiEmbedder;
