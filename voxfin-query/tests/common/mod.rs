//! Hand-rolled fakes shared by the integration tests.
#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use voxfin_query::error::{QueryError, Result as QueryResult};
use voxfin_query::generate::Generator;
use voxfin_query::prompt::Prompt;
use voxfin_rag::embedding::EmbeddingProvider;
use voxfin_rag::error::Result as RagResult;
use voxfin_speech::audio::{AudioChunk, AudioFormat};
use voxfin_speech::error::{Result as SpeechResult, SpeechError};
use voxfin_speech::synthesize::SpeechSynthesizer;
use voxfin_speech::transcribe::Transcriber;

/// Deterministic embedder: counts of the letters a, b, c, d.
pub struct LetterCountEmbedder;

#[async_trait]
impl EmbeddingProvider for LetterCountEmbedder {
    async fn embed(&self, text: &str) -> RagResult<Vec<f32>> {
        let mut counts = [0f32; 4];
        for c in text.chars() {
            match c {
                'a' => counts[0] += 1.0,
                'b' => counts[1] += 1.0,
                'c' => counts[2] += 1.0,
                'd' => counts[3] += 1.0,
                _ => {}
            }
        }
        Ok(counts.to_vec())
    }

    fn dimensions(&self) -> usize {
        4
    }
}

/// Transcriber that decodes the audio bytes as UTF-8 text.
pub struct EchoTranscriber;

#[async_trait]
impl Transcriber for EchoTranscriber {
    async fn transcribe(&self, audio: &AudioChunk) -> SpeechResult<String> {
        Ok(String::from_utf8_lossy(&audio.data).into_owned())
    }
}

/// Transcriber that always fails.
pub struct DeafTranscriber;

#[async_trait]
impl Transcriber for DeafTranscriber {
    async fn transcribe(&self, _audio: &AudioChunk) -> SpeechResult<String> {
        Err(SpeechError::TranscriptionFailure {
            provider: "fake".to_string(),
            message: "no speech model loaded".to_string(),
        })
    }
}

/// Generator returning a fixed response and recording the prompts it saw.
pub struct ScriptedGenerator {
    pub response: String,
    pub seen: Mutex<Vec<Prompt>>,
}

impl ScriptedGenerator {
    pub fn replying(response: impl Into<String>) -> Self {
        Self { response: response.into(), seen: Mutex::new(Vec::new()) }
    }
}

#[async_trait]
impl Generator for ScriptedGenerator {
    async fn generate(&self, prompt: &Prompt) -> QueryResult<String> {
        self.seen.lock().unwrap().push(prompt.clone());
        Ok(self.response.clone())
    }
}

/// Generator that always fails.
pub struct BrokenGenerator;

#[async_trait]
impl Generator for BrokenGenerator {
    async fn generate(&self, _prompt: &Prompt) -> QueryResult<String> {
        Err(QueryError::GenerationFailure("model endpoint unreachable".to_string()))
    }
}

/// Synthesizer returning the answer bytes back as PCM audio.
pub struct EchoSynthesizer;

#[async_trait]
impl SpeechSynthesizer for EchoSynthesizer {
    async fn synthesize(&self, text: &str) -> SpeechResult<AudioChunk> {
        Ok(AudioChunk::new(text.as_bytes().to_vec(), AudioFormat::pcm16_16khz()))
    }
}

/// Synthesizer that always fails.
pub struct MuteSynthesizer;

#[async_trait]
impl SpeechSynthesizer for MuteSynthesizer {
    async fn synthesize(&self, _text: &str) -> SpeechResult<AudioChunk> {
        Err(SpeechError::SynthesisFailure {
            provider: "fake".to_string(),
            message: "no voice available".to_string(),
        })
    }
}

/// An audio chunk whose bytes are the given text, for [`EchoTranscriber`].
pub fn spoken(text: &str) -> AudioChunk {
    AudioChunk::new(text.as_bytes().to_vec(), AudioFormat::pcm16_16khz())
}
