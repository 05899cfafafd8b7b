//! Generator capability trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::prompt::Prompt;

/// A generative language model behind a unified async interface.
///
/// The pipeline calls it exactly once per request; retry policy, if any,
/// belongs to the implementation.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate a raw text completion for the composed prompt.
    async fn generate(&self, prompt: &Prompt) -> Result<String>;
}
