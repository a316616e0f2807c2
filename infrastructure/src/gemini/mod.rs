//! Gemini adapter
//!
//! - [`gateway::GeminiGateway`]: [`TranslationGateway`](nededi_application::TranslationGateway) over HTTPS
//! - [`types`]: `generateContent` request and response bodies

pub mod gateway;
pub mod types;

pub use gateway::GeminiGateway;
