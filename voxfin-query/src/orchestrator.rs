//! The staged query pipeline.
//!
//! One request runs the chain transcribe → retrieve → generate → parse →
//! synthesize sequentially. Transcription and generation failures are
//! fatal; retrieval and parsing never fail; a synthesis failure costs only
//! the audio. Whatever was produced before a fatal failure is returned
//! alongside the error, never dropped.

use std::sync::Arc;

use tokio::time::timeout;
use tracing::{error, info, warn};
use voxfin_rag::retrieve::{QueryContext, Retriever};
use voxfin_speech::audio::AudioChunk;
use voxfin_speech::synthesize::SpeechSynthesizer;
use voxfin_speech::transcribe::Transcriber;

use crate::config::QueryConfig;
use crate::error::QueryError;
use crate::generate::Generator;
use crate::parse::parse;
use crate::prompt::compose;
use crate::stage::StageOutcome;

/// A question, spoken or typed.
#[derive(Debug, Clone)]
pub enum QueryInput {
    /// Raw audio to be transcribed first.
    Audio(AudioChunk),
    /// A plain-text question; transcription is skipped.
    Text(String),
}

/// Progress of a request through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryState {
    /// Input accepted, nothing run yet.
    Received,
    /// A question text exists (transcribed or supplied directly).
    Transcribed,
    /// Context retrieval finished (possibly degraded).
    Retrieved,
    /// The model produced raw output.
    Generated,
    /// Scratchpad and answer extracted.
    Parsed,
    /// Spoken audio produced.
    Synthesized,
    /// A fatal stage failure short-circuited the rest.
    Failed,
}

/// Everything a request produced, including partial fields on failure.
#[derive(Debug)]
pub struct QueryResponse {
    /// The furthest state the request reached.
    pub state: QueryState,
    /// The question text, once known.
    pub transcription: Option<String>,
    /// The final answer, once parsed.
    pub answer: Option<String>,
    /// The model's reasoning trace, once parsed.
    pub scratchpad: Option<String>,
    /// Spoken answer audio, when synthesis succeeded.
    pub audio: Option<AudioChunk>,
    /// The fatal error, or the non-fatal synthesis error.
    pub error: Option<QueryError>,
}

impl QueryResponse {
    fn received() -> Self {
        Self {
            state: QueryState::Received,
            transcription: None,
            answer: None,
            scratchpad: None,
            audio: None,
            error: None,
        }
    }

    fn failed(mut self, error: QueryError) -> Self {
        error!(error = %error, "query failed");
        self.state = QueryState::Failed;
        self.error = Some(error);
        self
    }
}

/// Sequences the pipeline stages and applies the degradation policy.
///
/// Construct one via [`QueryOrchestrator::builder()`]. All collaborators
/// are injected; nothing is looked up from global state.
pub struct QueryOrchestrator {
    config: QueryConfig,
    transcriber: Arc<dyn Transcriber>,
    retriever: Arc<Retriever>,
    generator: Arc<dyn Generator>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl std::fmt::Debug for QueryOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryOrchestrator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl QueryOrchestrator {
    /// Create a new [`QueryOrchestratorBuilder`].
    pub fn builder() -> QueryOrchestratorBuilder {
        QueryOrchestratorBuilder::default()
    }

    /// Answer one question, spoken or typed.
    ///
    /// Never returns `Err`: fatal failures come back as a [`QueryResponse`]
    /// in the `Failed` state carrying the error plus every field produced
    /// before it.
    pub async fn answer(&self, input: QueryInput) -> QueryResponse {
        let mut response = QueryResponse::received();

        // RECEIVED → TRANSCRIBED. Fatal on failure: without a question
        // there is nothing to answer.
        let question = match self.transcribe_stage(input).await {
            StageOutcome::Ok(q) | StageOutcome::Degraded(q, _) => q,
            StageOutcome::Failed(e) => return response.failed(e),
        };
        response.transcription = Some(question.clone());
        response.state = QueryState::Transcribed;

        // TRANSCRIBED → RETRIEVED. Never fatal; failures degrade the
        // context to a marker.
        let context = self.retrieve_stage(&question).await;
        if context.is_degraded() {
            warn!(status = ?context.status, "answering with degraded context");
        }
        response.state = QueryState::Retrieved;

        // RETRIEVED → GENERATED. Fatal on failure; one attempt, no
        // fallback answer.
        let raw = match self.generate_stage(&context, &question).await {
            StageOutcome::Ok(raw) | StageOutcome::Degraded(raw, _) => raw,
            StageOutcome::Failed(e) => return response.failed(e),
        };
        response.state = QueryState::Generated;

        // GENERATED → PARSED. Never fails; degrades field by field.
        let parsed = parse(&raw);
        response.scratchpad = Some(parsed.scratchpad);
        response.answer = Some(parsed.answer.clone());
        response.state = QueryState::Parsed;

        // PARSED → SYNTHESIZED. A failure here is non-fatal: the textual
        // result stands, the caller decides whether text-only is enough.
        match self.synthesize_stage(&parsed.answer).await {
            StageOutcome::Ok(audio) | StageOutcome::Degraded(audio, _) => {
                response.audio = Some(audio);
                response.state = QueryState::Synthesized;
            }
            StageOutcome::Failed(e) => {
                warn!(error = %e, "synthesis failed; returning text-only result");
                response.error = Some(e);
            }
        }

        info!(state = ?response.state, "query completed");
        response
    }

    async fn transcribe_stage(&self, input: QueryInput) -> StageOutcome<String> {
        let audio = match input {
            QueryInput::Text(question) => return StageOutcome::Ok(question),
            QueryInput::Audio(audio) => audio,
        };

        match timeout(self.config.stage_timeout, self.transcriber.transcribe(&audio)).await {
            Ok(Ok(text)) => StageOutcome::Ok(text),
            Ok(Err(e)) => StageOutcome::Failed(QueryError::TranscriptionFailure(e.to_string())),
            Err(_) => StageOutcome::Failed(QueryError::TranscriptionFailure(format!(
                "timed out after {:?}",
                self.config.stage_timeout
            ))),
        }
    }

    async fn retrieve_stage(&self, question: &str) -> QueryContext {
        match timeout(self.config.stage_timeout, self.retriever.retrieve(question)).await {
            Ok(context) => context,
            Err(_) => {
                warn!(stage_timeout = ?self.config.stage_timeout, "retrieval timed out; continuing without context");
                QueryContext::unavailable()
            }
        }
    }

    async fn generate_stage(&self, context: &QueryContext, question: &str) -> StageOutcome<String> {
        let prompt = compose(&context.text, question);
        match timeout(self.config.stage_timeout, self.generator.generate(&prompt)).await {
            Ok(Ok(raw)) => StageOutcome::Ok(raw),
            Ok(Err(e)) => StageOutcome::Failed(QueryError::GenerationFailure(e.to_string())),
            Err(_) => StageOutcome::Failed(QueryError::GenerationFailure(format!(
                "timed out after {:?}",
                self.config.stage_timeout
            ))),
        }
    }

    async fn synthesize_stage(&self, answer: &str) -> StageOutcome<AudioChunk> {
        match timeout(self.config.stage_timeout, self.synthesizer.synthesize(answer)).await {
            Ok(Ok(audio)) => StageOutcome::Ok(audio),
            Ok(Err(e)) => StageOutcome::Failed(QueryError::SynthesisFailure(e.to_string())),
            Err(_) => StageOutcome::Failed(QueryError::SynthesisFailure(format!(
                "timed out after {:?}",
                self.config.stage_timeout
            ))),
        }
    }
}

/// Builder for constructing a [`QueryOrchestrator`].
///
/// All collaborators are required; the config defaults when unset.
#[derive(Default)]
pub struct QueryOrchestratorBuilder {
    config: Option<QueryConfig>,
    transcriber: Option<Arc<dyn Transcriber>>,
    retriever: Option<Arc<Retriever>>,
    generator: Option<Arc<dyn Generator>>,
    synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
}

impl QueryOrchestratorBuilder {
    /// Set the pipeline configuration.
    pub fn config(mut self, config: QueryConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the transcription backend.
    pub fn transcriber(mut self, transcriber: Arc<dyn Transcriber>) -> Self {
        self.transcriber = Some(transcriber);
        self
    }

    /// Set the retriever.
    pub fn retriever(mut self, retriever: Arc<Retriever>) -> Self {
        self.retriever = Some(retriever);
        self
    }

    /// Set the generative model backend.
    pub fn generator(mut self, generator: Arc<dyn Generator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Set the speech synthesis backend.
    pub fn synthesizer(mut self, synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        self.synthesizer = Some(synthesizer);
        self
    }

    /// Build the [`QueryOrchestrator`], validating that all collaborators
    /// are set.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidConfig`] if any collaborator is missing.
    pub fn build(self) -> crate::error::Result<QueryOrchestrator> {
        let transcriber = self
            .transcriber
            .ok_or_else(|| QueryError::InvalidConfig("transcriber is required".to_string()))?;
        let retriever = self
            .retriever
            .ok_or_else(|| QueryError::InvalidConfig("retriever is required".to_string()))?;
        let generator = self
            .generator
            .ok_or_else(|| QueryError::InvalidConfig("generator is required".to_string()))?;
        let synthesizer = self
            .synthesizer
            .ok_or_else(|| QueryError::InvalidConfig("synthesizer is required".to_string()))?;

        Ok(QueryOrchestrator {
            config: self.config.unwrap_or_default(),
            transcriber,
            retriever,
            generator,
            synthesizer,
        })
    }
}
