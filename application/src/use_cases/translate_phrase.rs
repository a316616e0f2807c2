//! Translate Phrase use case.
//!
//! The decode adapter: validates the phrase, builds the instruction, prompt
//! and response schema, sends exactly one request through the
//! [`TranslationGateway`], and parses the structured answer.
//!
//! Every failure is terminal for the call. Nothing is retried and no
//! partial result is ever returned.

use crate::config::TranslatorParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger, TRANSLATION_FAILED,
    TRANSLATION_REQUEST, TRANSLATION_RESPONSE,
};
use crate::ports::translation_gateway::{GatewayError, GenerationRequest, TranslationGateway};
use nededi_domain::util::preview;
use nededi_domain::{
    DecoderPromptTemplate, DisplayLanguage, DomainError, Phrase, ResponseParseError,
    TranslationMode, TranslationResult, parse_translation_result,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while decoding a phrase.
#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("Invalid input: {0}")]
    Validation(#[from] DomainError),

    #[error("Transport error: {0}")]
    Transport(#[from] GatewayError),

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Malformed response: {source}")]
    MalformedResponse {
        source: ResponseParseError,
        raw: String,
    },
}

impl TranslationError {
    /// Short machine-readable kind, used in transcripts
    pub fn kind(&self) -> &'static str {
        match self {
            TranslationError::Validation(_) => "validation",
            TranslationError::Transport(_) => "transport",
            TranslationError::EmptyResponse => "empty_response",
            TranslationError::MalformedResponse { .. } => "malformed_response",
        }
    }
}

/// Input for the [`TranslatePhraseUseCase`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatePhraseInput {
    /// Raw user text; validated by the use case.
    pub text: String,
    pub mode: TranslationMode,
    pub language: DisplayLanguage,
}

impl TranslatePhraseInput {
    pub fn new(text: impl Into<String>, mode: TranslationMode, language: DisplayLanguage) -> Self {
        Self {
            text: text.into(),
            mode,
            language,
        }
    }
}

/// Use case for decoding a single phrase.
///
/// Holds no mutable state, so a single instance can be shared between
/// sessions behind an `Arc` or cloned freely.
#[derive(Clone)]
pub struct TranslatePhraseUseCase {
    gateway: Arc<dyn TranslationGateway>,
    params: TranslatorParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl TranslatePhraseUseCase {
    pub fn new(gateway: Arc<dyn TranslationGateway>, params: TranslatorParams) -> Self {
        Self {
            gateway,
            params,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn params(&self) -> &TranslatorParams {
        &self.params
    }

    /// Decode `text` in the given direction, answering in `language`.
    pub async fn translate(
        &self,
        text: &str,
        mode: TranslationMode,
        language: DisplayLanguage,
    ) -> Result<TranslationResult, TranslationError> {
        self.execute(TranslatePhraseInput::new(text, mode, language))
            .await
    }

    /// Execute the use case.
    pub async fn execute(
        &self,
        input: TranslatePhraseInput,
    ) -> Result<TranslationResult, TranslationError> {
        let phrase = Phrase::with_max_chars(input.text, self.params.max_phrase_chars)?;
        let request = self.build_request(&phrase, input.mode, input.language);

        info!(
            "Decoding phrase ({}, {}): {}",
            input.mode,
            input.language,
            preview(phrase.text(), 60)
        );
        self.conversation_logger.log(ConversationEvent::new(
            TRANSLATION_REQUEST,
            json!({
                "model": request.model,
                "mode": input.mode,
                "language": input.language,
                "text": phrase.text(),
                "prompt": request.prompt,
            }),
        ));

        let outcome = self.send(&request).await;
        match &outcome {
            Ok(result) => {
                debug!("Decoded vibe: {}", result.vibe);
                self.conversation_logger.log(ConversationEvent::new(
                    TRANSLATION_RESPONSE,
                    json!({ "model": request.model, "result": result }),
                ));
            }
            Err(e) => {
                warn!("Decode failed: {}", e);
                let raw = match e {
                    TranslationError::MalformedResponse { raw, .. } => Some(raw.as_str()),
                    _ => None,
                };
                self.conversation_logger.log(ConversationEvent::new(
                    TRANSLATION_FAILED,
                    json!({
                        "model": request.model,
                        "kind": e.kind(),
                        "error": e.to_string(),
                        "raw": raw,
                    }),
                ));
            }
        }
        outcome
    }

    fn build_request(
        &self,
        phrase: &Phrase,
        mode: TranslationMode,
        language: DisplayLanguage,
    ) -> GenerationRequest {
        GenerationRequest {
            model: self.params.model.clone(),
            system_instruction: DecoderPromptTemplate::system_instruction(language),
            prompt: DecoderPromptTemplate::user_prompt(phrase.text(), mode, language),
            response_schema: DecoderPromptTemplate::response_schema(language),
        }
    }

    async fn send(&self, request: &GenerationRequest) -> Result<TranslationResult, TranslationError> {
        let text = match self.gateway.generate(request).await? {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Err(TranslationError::EmptyResponse),
        };

        parse_translation_result(&text)
            .map_err(|source| TranslationError::MalformedResponse { source, raw: text })
    }
}
