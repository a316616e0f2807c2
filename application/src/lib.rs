//! Application layer for ne-dedi
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_MODEL, TranslatorParams};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    progress::{DecodeProgressNotifier, NoProgress},
    translation_gateway::{GatewayError, GenerationRequest, TranslationGateway},
};
pub use use_cases::decoder_session::{DecoderSession, SessionError};
pub use use_cases::history_store::HistoryStore;
pub use use_cases::translate_phrase::{
    TranslatePhraseInput, TranslatePhraseUseCase, TranslationError,
};
