//! Query pipeline of the Voxfin voice Q&A engine.
//!
//! Ties the speech seams and the knowledge base together into one staged
//! request flow:
//!
//! ```text
//! audio/text ─→ transcribe ─→ retrieve ─→ generate ─→ parse ─→ synthesize
//!                 (fatal)     (degrades)   (fatal)   (never    (non-fatal)
//!                                                     fails)
//! ```
//!
//! - [`prompt::compose`] builds the instruction/context/question payload
//!   and pins the model's output contract.
//! - [`parse::parse`] splits raw model output into a scratchpad and a
//!   final answer, tolerating contract violations.
//! - [`QueryOrchestrator`] sequences the stages, applies per-stage
//!   timeouts, and preserves partial results on fatal failure.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use voxfin_query::{QueryConfig, QueryInput, QueryOrchestrator};
//!
//! let orchestrator = QueryOrchestrator::builder()
//!     .config(QueryConfig::default())
//!     .transcriber(transcriber)
//!     .retriever(retriever)
//!     .generator(generator)
//!     .synthesizer(synthesizer)
//!     .build()?;
//!
//! let response = orchestrator.answer(QueryInput::Audio(recording)).await;
//! if let Some(answer) = &response.answer {
//!     println!("{answer}");
//! }
//! ```

pub mod config;
pub mod error;
pub mod generate;
pub mod orchestrator;
pub mod parse;
pub mod prompt;
pub mod stage;

#[cfg(feature = "openai")]
pub mod openai;

pub use config::{QueryConfig, QueryConfigBuilder};
pub use error::{QueryError, Result};
pub use generate::Generator;
pub use orchestrator::{
    QueryInput, QueryOrchestrator, QueryOrchestratorBuilder, QueryResponse, QueryState,
};
pub use parse::{NO_REASONING_PLACEHOLDER, ParsedResponse, parse};
pub use prompt::{ANSWER_MARKER, Prompt, SCRATCHPAD_CLOSE, SCRATCHPAD_OPEN, compose};
pub use stage::StageOutcome;

#[cfg(feature = "openai")]
pub use openai::OpenAiGenerator;
