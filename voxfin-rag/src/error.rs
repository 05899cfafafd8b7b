//! Error types for the `voxfin-rag` crate.

use thiserror::Error;

/// Errors that can occur while building or operating the knowledge base.
#[derive(Debug, Error)]
pub enum RagError {
    /// Invalid chunking, retrieval, or dimension configuration.
    ///
    /// Raised at construction time, never per-request.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Text extraction produced no usable content for a document.
    ///
    /// Ingestion aborts with no partial state written.
    #[error("document unreadable: {0}")]
    DocumentUnreadable(String),

    /// An embedding call failed.
    #[error("embedding failed ({provider}): {message}")]
    EmbeddingFailure {
        /// The embedding backend that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// An error in the vector index backend.
    #[error("vector index error ({backend}): {message}")]
    IndexError {
        /// The index backend that produced the error.
        backend: String,
        /// A description of the failure.
        message: String,
    },

    /// An index upsert failed partway through a batched write.
    ///
    /// Batches already committed are visible to retrieval; the count lets
    /// the caller decide between retrying and treating the document as
    /// partially indexed.
    #[error("index write failed after {batches_written} committed batches: {message}")]
    IndexWriteFailure {
        /// Number of batches successfully written before the failure.
        batches_written: usize,
        /// A description of the failure.
        message: String,
    },
}

/// A convenience result type for knowledge-base operations.
pub type Result<T> = std::result::Result<T, RagError>;
