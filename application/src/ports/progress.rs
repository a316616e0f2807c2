//! Progress notification port
//!
//! Lets the front end show something while a decode request is in flight.

use nededi_domain::{DisplayLanguage, TranslationMode};

/// Callback for the lifetime of a single decode request
///
/// Implementations live in the presentation layer (spinner, status line, ...).
pub trait DecodeProgressNotifier: Send + Sync {
    /// Called right before the request leaves
    fn on_request_start(&self, mode: TranslationMode, language: DisplayLanguage);

    /// Called once the request finished, successfully or not
    fn on_request_end(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl DecodeProgressNotifier for NoProgress {
    fn on_request_start(&self, _mode: TranslationMode, _language: DisplayLanguage) {}
    fn on_request_end(&self, _success: bool) {}
}
