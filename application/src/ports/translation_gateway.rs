//! Translation Gateway port
//!
//! Defines the interface for sending one structured generation request to a
//! hosted language model.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while talking to the model provider
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// HTTP status of a rejected request, if there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A single structured generation request
///
/// Carries everything the provider needs: the model id (configuration, not
/// user input), the system instruction, the user prompt, and the JSON schema
/// the response must follow.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub system_instruction: String,
    pub prompt: String,
    pub response_schema: Value,
}

/// Gateway for structured LLM generation
///
/// This port defines how the application layer reaches the model provider.
/// Implementations (adapters) live in the infrastructure layer and must be
/// stateless with respect to callers, so one instance can serve many
/// sessions concurrently.
#[async_trait]
pub trait TranslationGateway: Send + Sync {
    /// Send the request and return the primary text payload.
    ///
    /// `Ok(None)` means the provider answered but carried no text.
    async fn generate(&self, request: &GenerationRequest) -> Result<Option<String>, GatewayError>;
}
