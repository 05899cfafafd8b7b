//! Prompt composition.
//!
//! The instruction below fixes the model's role and, more importantly, its
//! output contract: reasoning inside a `<scratchpad>` block, then the
//! answer marker, then the final answer. Every downstream stage depends on
//! the model honoring that contract, and [`parse`](crate::parse::parse)
//! tolerates it not doing so.

use serde::{Deserialize, Serialize};

/// Opening delimiter of the reasoning block.
pub const SCRATCHPAD_OPEN: &str = "<scratchpad>";

/// Closing delimiter of the reasoning block.
pub const SCRATCHPAD_CLOSE: &str = "</scratchpad>";

/// Marker separating the reasoning block from the final answer.
pub const ANSWER_MARKER: &str = "###";

const INSTRUCTION: &str = "You are a financial analyst assistant. Answer the user's question \
using only the reference context provided. First, reason through the question inside a single \
<scratchpad>...</scratchpad> block. Then write ### followed by your final answer. Keep the final \
answer short and suitable for being read aloud. If the context does not contain what you need, \
say so in the final answer.";

/// The instruction/context/question payload sent to the generative model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prompt {
    /// Fixed role and output-contract instruction.
    pub instruction: String,
    /// Retrieved context block (possibly a degradation marker).
    pub context: String,
    /// The user's question.
    pub question: String,
}

/// Compose the generation payload for a question and its retrieved context.
pub fn compose(context: &str, question: &str) -> Prompt {
    Prompt {
        instruction: INSTRUCTION.to_string(),
        context: context.to_string(),
        question: question.to_string(),
    }
}
