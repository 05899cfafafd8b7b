//! Speech seams of the Voxfin voice Q&A engine.
//!
//! Defines the audio value types and the two capability traits the query
//! pipeline consumes: [`Transcriber`] (audio → text) and
//! [`SpeechSynthesizer`] (text → audio). Concrete backends live behind
//! feature flags; tests substitute fakes.

pub mod audio;
pub mod error;
pub mod synthesize;
pub mod transcribe;

#[cfg(feature = "openai")]
pub mod openai;

pub use audio::{AudioChunk, AudioEncoding, AudioFormat};
pub use error::{Result, SpeechError};
pub use synthesize::SpeechSynthesizer;
pub use transcribe::Transcriber;

#[cfg(feature = "openai")]
pub use openai::{OpenAiSynthesizer, OpenAiTranscriber};
