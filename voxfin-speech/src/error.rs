//! Error types for the `voxfin-speech` crate.

use thiserror::Error;

/// Errors from the speech capability backends.
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Audio-to-text conversion failed.
    #[error("transcription failed ({provider}): {message}")]
    TranscriptionFailure {
        /// The transcription backend that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// Text-to-audio conversion failed.
    #[error("speech synthesis failed ({provider}): {message}")]
    SynthesisFailure {
        /// The synthesis backend that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },
}

/// A convenience result type for speech operations.
pub type Result<T> = std::result::Result<T, SpeechError>;
