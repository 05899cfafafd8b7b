//! Query-time retrieval and context assembly.
//!
//! Retrieval is best-effort enrichment: an answer without context is still
//! better than no answer, so every failure here degrades the context rather
//! than failing the request.

use std::sync::Arc;

use tracing::{info, warn};

use crate::embedding::EmbeddingProvider;
use crate::error::{RagError, Result};
use crate::index::VectorIndex;

/// Separator between retrieved texts inside the assembled context.
pub const CONTEXT_SEPARATOR: &str = "\n\n---\n\n";

/// Marker used when embedding or the index query failed.
pub const CONTEXT_UNAVAILABLE: &str = "[context unavailable]";

/// Marker used when the query matched nothing.
pub const NO_RELEVANT_CONTEXT: &str = "[no relevant context found]";

/// How a [`QueryContext`] was produced.
///
/// `NoMatches` and `Unavailable` both degrade the prompt to zero context;
/// they are distinguished for observability, not behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextStatus {
    /// Retrieval succeeded with this many matches.
    Found(usize),
    /// Retrieval succeeded but nothing matched.
    NoMatches,
    /// Embedding or the index query failed.
    Unavailable,
}

/// Retrieved context ready to be injected into a prompt.
///
/// Built fresh per request and discarded after the generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryContext {
    /// Joined matched texts, or one of the marker strings.
    pub text: String,
    /// How the context was produced.
    pub status: ContextStatus,
}

impl QueryContext {
    /// Context standing in for a failed retrieval.
    pub fn unavailable() -> Self {
        Self { text: CONTEXT_UNAVAILABLE.to_string(), status: ContextStatus::Unavailable }
    }

    /// Whether the prompt will effectively run without grounding context.
    pub fn is_degraded(&self) -> bool {
        !matches!(self.status, ContextStatus::Found(_))
    }
}

/// Embeds a query and assembles the nearest chunks into a context block.
pub struct Retriever {
    embedder: Arc<dyn EmbeddingProvider>,
    index: Arc<dyn VectorIndex>,
    top_k: usize,
}

impl std::fmt::Debug for Retriever {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Retriever")
            .field("top_k", &self.top_k)
            .finish_non_exhaustive()
    }
}

impl Retriever {
    /// Create a retriever fetching `top_k` nearest neighbors per query.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::InvalidConfig`] if `top_k` is zero.
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        index: Arc<dyn VectorIndex>,
        top_k: usize,
    ) -> Result<Self> {
        if top_k == 0 {
            return Err(RagError::InvalidConfig("top_k must be greater than zero".to_string()));
        }
        Ok(Self { embedder, index, top_k })
    }

    /// Retrieve context for a query. Never fails: embedding or index errors
    /// degrade to [`CONTEXT_UNAVAILABLE`], an empty result set to
    /// [`NO_RELEVANT_CONTEXT`].
    pub async fn retrieve(&self, query: &str) -> QueryContext {
        let embedding = match self.embedder.embed(query).await {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "query embedding failed; continuing without context");
                return QueryContext::unavailable();
            }
        };

        let hits = match self.index.query(&embedding, self.top_k).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!(error = %e, "vector index query failed; continuing without context");
                return QueryContext::unavailable();
            }
        };

        if hits.is_empty() {
            info!("query matched no indexed chunks");
            return QueryContext {
                text: NO_RELEVANT_CONTEXT.to_string(),
                status: ContextStatus::NoMatches,
            };
        }

        // Hits arrive ordered by descending score; join them verbatim.
        let text =
            hits.iter().map(|h| h.text.as_str()).collect::<Vec<_>>().join(CONTEXT_SEPARATOR);
        info!(hit_count = hits.len(), "retrieved context");

        QueryContext { text, status: ContextStatus::Found(hits.len()) }
    }
}
