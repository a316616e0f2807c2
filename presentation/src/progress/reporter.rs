//! Progress reporting while a phrase is being decoded

use crate::output::labels::UiText;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use nededi_application::DecodeProgressNotifier;
use nededi_domain::{DisplayLanguage, TranslationMode};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Spinner shown while a request is in flight
pub struct WaitingIndicator {
    spinner: Mutex<Option<ProgressBar>>,
}

impl WaitingIndicator {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.magenta} {prefix:.bold} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for WaitingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl DecodeProgressNotifier for WaitingIndicator {
    fn on_request_start(&self, mode: TranslationMode, language: DisplayLanguage) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(UiText::for_language(language).direction(mode));
        pb.set_message("decoding...");
        pb.enable_steady_tick(Duration::from_millis(100));

        *self.spinner.lock().unwrap_or_else(PoisonError::into_inner) = Some(pb);
    }

    fn on_request_end(&self, success: bool) {
        if let Some(pb) = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            if success {
                pb.finish_and_clear();
            } else {
                pb.abandon_with_message(format!("{}", "x".red()));
            }
        }
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl DecodeProgressNotifier for SimpleProgress {
    fn on_request_start(&self, mode: TranslationMode, language: DisplayLanguage) {
        eprintln!(
            "{} {}",
            "->".cyan(),
            UiText::for_language(language).direction(mode).bold()
        );
    }

    fn on_request_end(&self, _success: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let indicator = WaitingIndicator::new();
        indicator.on_request_start(TranslationMode::MenToWomen, DisplayLanguage::En);
        assert!(indicator.spinner.lock().unwrap().is_some());
        indicator.on_request_end(true);
        assert!(indicator.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_end_without_start_is_harmless() {
        let indicator = WaitingIndicator::default();
        indicator.on_request_end(false);
        assert!(indicator.spinner.lock().unwrap().is_none());
    }
}
