//! Document loaders: uploaded bytes → extracted text with page boundaries.

use async_trait::async_trait;

use crate::error::{RagError, Result};

/// Text extracted from an uploaded file.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedText {
    /// The full extracted text.
    pub text: String,
    /// Character offsets where pages 2..n begin. Empty for unpaginated input.
    pub page_offsets: Vec<usize>,
}

/// Extracts text content from a raw uploaded file.
///
/// Implementations wrap format-specific extractors (plain text, PDF, OCR)
/// behind a unified async interface.
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    /// Extract the text content of an uploaded file.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::DocumentUnreadable`] if the bytes cannot be
    /// decoded into text.
    async fn extract(&self, raw: &[u8]) -> Result<ExtractedText>;
}

/// Loader for plain UTF-8 text files.
///
/// Form feed characters (`\u{0C}`) are treated as page breaks: they are
/// removed from the output and recorded as page boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextLoader;

#[async_trait]
impl DocumentLoader for PlainTextLoader {
    async fn extract(&self, raw: &[u8]) -> Result<ExtractedText> {
        let decoded = std::str::from_utf8(raw)
            .map_err(|e| RagError::DocumentUnreadable(format!("not valid UTF-8: {e}")))?;

        let mut text = String::with_capacity(decoded.len());
        let mut page_offsets = Vec::new();
        let mut chars = 0usize;

        for c in decoded.chars() {
            if c == '\u{0C}' {
                page_offsets.push(chars);
            } else {
                text.push(c);
                chars += 1;
            }
        }

        Ok(ExtractedText { text, page_offsets })
    }
}
