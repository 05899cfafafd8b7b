//! Speech synthesis capability trait.

use async_trait::async_trait;

use crate::audio::AudioChunk;
use crate::error::Result;

/// Converts answer text into spoken audio.
///
/// A failure here is non-fatal to the textual result; the query pipeline
/// returns the answer without audio and surfaces the error.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize speech for the given text.
    async fn synthesize(&self, text: &str) -> Result<AudioChunk>;
}
