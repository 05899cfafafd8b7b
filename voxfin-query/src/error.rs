//! Error types for the `voxfin-query` crate.

use thiserror::Error;

/// Errors surfaced by the query pipeline.
///
/// Transcription and generation failures are fatal to a request; a
/// synthesis failure accompanies an otherwise complete textual result.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Invalid pipeline configuration; raised at construction, never
    /// per-request.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The audio input could not be turned into a question.
    #[error("transcription failed: {0}")]
    TranscriptionFailure(String),

    /// The generative model call failed. No retry, no fallback answer.
    #[error("generation failed: {0}")]
    GenerationFailure(String),

    /// The answer could not be spoken; the textual result still stands.
    #[error("speech synthesis failed: {0}")]
    SynthesisFailure(String),
}

/// A convenience result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
