//! Transcription capability trait.

use async_trait::async_trait;

use crate::audio::AudioChunk;
use crate::error::Result;

/// Converts spoken audio into text.
///
/// Implementations wrap a speech-to-text backend behind a unified async
/// interface; the query pipeline treats a failure here as fatal, since
/// without a transcript there is nothing to answer.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe an audio buffer into text.
    async fn transcribe(&self, audio: &AudioChunk) -> Result<String>;
}
