//! OpenAI speech backends: Whisper transcription and TTS synthesis.
//!
//! Only available with the `openai` feature. These plug real backends into
//! the [`Transcriber`] and [`SpeechSynthesizer`] seams; the core never
//! depends on them.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, error};

use crate::audio::{AudioChunk, AudioFormat};
use crate::error::{Result, SpeechError};
use crate::synthesize::SpeechSynthesizer;
use crate::transcribe::Transcriber;

const TRANSCRIPTIONS_URL: &str = "https://api.openai.com/v1/audio/transcriptions";
const SPEECH_URL: &str = "https://api.openai.com/v1/audio/speech";
const DEFAULT_STT_MODEL: &str = "whisper-1";
const DEFAULT_TTS_MODEL: &str = "tts-1";
const DEFAULT_VOICE: &str = "alloy";

fn transcription_error(message: impl Into<String>) -> SpeechError {
    SpeechError::TranscriptionFailure { provider: "OpenAI".to_string(), message: message.into() }
}

fn synthesis_error(message: impl Into<String>) -> SpeechError {
    SpeechError::SynthesisFailure { provider: "OpenAI".to_string(), message: message.into() }
}

/// A [`Transcriber`] backed by the OpenAI audio transcription API.
pub struct OpenAiTranscriber {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl OpenAiTranscriber {
    /// Create a transcriber with the given API key and the default model.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(transcription_error("API key must not be empty"));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            model: DEFAULT_STT_MODEL.to_string(),
        })
    }

    /// Override the transcription model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl Transcriber for OpenAiTranscriber {
    async fn transcribe(&self, audio: &AudioChunk) -> Result<String> {
        debug!(model = %self.model, bytes = audio.data.len(), "transcribing audio");

        let file_name = format!("audio.{}", audio.format.encoding);
        let part = reqwest::multipart::Part::bytes(audio.data.clone()).file_name(file_name);
        let form = reqwest::multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "text")
            .part("file", part);

        let response = self
            .client
            .post(TRANSCRIPTIONS_URL)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "transcription request failed");
                transcription_error(format!("request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(%status, "transcription API error");
            return Err(transcription_error(format!("API returned {status}: {body}")));
        }

        let text = response
            .text()
            .await
            .map_err(|e| transcription_error(format!("failed to read response: {e}")))?;
        Ok(text.trim().to_string())
    }
}

#[derive(Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
}

/// A [`SpeechSynthesizer`] backed by the OpenAI text-to-speech API.
///
/// Produces MP3 audio.
pub struct OpenAiSynthesizer {
    client: reqwest::Client,
    api_key: String,
    model: String,
    voice: String,
}

impl OpenAiSynthesizer {
    /// Create a synthesizer with the given API key and default model/voice.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(synthesis_error("API key must not be empty"));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            model: DEFAULT_TTS_MODEL.to_string(),
            voice: DEFAULT_VOICE.to_string(),
        })
    }

    /// Override the synthesis voice.
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }
}

#[async_trait]
impl SpeechSynthesizer for OpenAiSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<AudioChunk> {
        debug!(model = %self.model, voice = %self.voice, chars = text.len(), "synthesizing speech");

        let response = self
            .client
            .post(SPEECH_URL)
            .bearer_auth(&self.api_key)
            .json(&SpeechRequest { model: &self.model, voice: &self.voice, input: text })
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "synthesis request failed");
                synthesis_error(format!("request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(%status, "synthesis API error");
            return Err(synthesis_error(format!("API returned {status}: {body}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| synthesis_error(format!("failed to read audio body: {e}")))?;
        Ok(AudioChunk::new(bytes.to_vec(), AudioFormat::mp3_24khz()))
    }
}
