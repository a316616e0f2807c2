//! Port for structured transcript logging.
//!
//! Defines the [`ConversationLogger`] trait for recording what was sent to
//! and received from the model in a machine-readable form.
//!
//! This is separate from `tracing`-based diagnostics: tracing carries
//! human-readable messages, this port captures the full request/response
//! transcript (typically as JSONL).

use serde_json::Value;

/// Event type for an outgoing decode request
pub const TRANSLATION_REQUEST: &str = "translation_request";
/// Event type for a parsed decode response
pub const TRANSLATION_RESPONSE: &str = "translation_response";
/// Event type for a failed decode
pub const TRANSLATION_FAILED: &str = "translation_failed";

/// A structured conversation event.
///
/// The logger adds the timestamp when the event is written.
#[derive(Debug, Clone)]
pub struct ConversationEvent {
    /// Event type identifier, one of the constants in this module.
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging conversation events.
///
/// `log` is synchronous and infallible; write failures are the
/// implementation's problem and never reach the decode flow.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
