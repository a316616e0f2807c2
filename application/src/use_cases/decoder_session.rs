//! Decoder session.
//!
//! Caller-side coordinator for one user session: it owns the history and
//! an in-flight flag that allows at most one outstanding request. The
//! decode adapter itself stays stateless.

use crate::ports::progress::{DecodeProgressNotifier, NoProgress};
use crate::use_cases::history_store::HistoryStore;
use crate::use_cases::translate_phrase::{TranslatePhraseUseCase, TranslationError};
use nededi_domain::{DisplayLanguage, HistoryItem, TranslationMode};
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by [`DecoderSession::submit`].
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("A request is already in flight")]
    Busy,

    #[error(transparent)]
    Translation(#[from] TranslationError),
}

/// Releases the in-flight flag on every exit path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// One user's decoding session
pub struct DecoderSession {
    translator: TranslatePhraseUseCase,
    history: HistoryStore,
    in_flight: AtomicBool,
}

impl DecoderSession {
    pub fn new(translator: TranslatePhraseUseCase) -> Self {
        Self {
            translator,
            history: HistoryStore::new(),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Decode a phrase and record it on success.
    pub async fn submit(
        &self,
        text: &str,
        mode: TranslationMode,
        language: DisplayLanguage,
    ) -> Result<HistoryItem, SessionError> {
        self.submit_with_progress(text, mode, language, &NoProgress)
            .await
    }

    /// Decode a phrase with progress callbacks.
    ///
    /// Fails with [`SessionError::Busy`] while another submission is
    /// outstanding. History is only touched on success.
    pub async fn submit_with_progress(
        &self,
        text: &str,
        mode: TranslationMode,
        language: DisplayLanguage,
        progress: &dyn DecodeProgressNotifier,
    ) -> Result<HistoryItem, SessionError> {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            debug!("Rejected submission: request already in flight");
            return Err(SessionError::Busy);
        };

        progress.on_request_start(mode, language);
        let outcome = self.translator.translate(text, mode, language).await;
        progress.on_request_end(outcome.is_ok());

        let result = outcome?;
        Ok(self.history.record_success(result, mode, language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranslatorParams;
    use crate::ports::translation_gateway::{GatewayError, GenerationRequest, TranslationGateway};
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    const BODY: &str = r#"{"literalText":"I'm fine.","decodedMeaning":"Not fine.","relationshipTip":"Listen.","vibe":"Frosty"}"#;

    struct FixedGateway {
        fail: bool,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TranslationGateway for FixedGateway {
        async fn generate(
            &self,
            _request: &GenerationRequest,
        ) -> Result<Option<String>, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(GatewayError::ConnectionError("network unreachable".to_string()))
            } else {
                Ok(Some(BODY.to_string()))
            }
        }
    }

    /// Gateway that blocks until released, to hold a request in flight.
    struct GatedGateway {
        entered: Notify,
        release: Notify,
    }

    #[async_trait]
    impl TranslationGateway for GatedGateway {
        async fn generate(
            &self,
            _request: &GenerationRequest,
        ) -> Result<Option<String>, GatewayError> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok(Some(BODY.to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl DecodeProgressNotifier for RecordingProgress {
        fn on_request_start(&self, mode: TranslationMode, language: DisplayLanguage) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start {mode} {language}"));
        }

        fn on_request_end(&self, success: bool) {
            self.events.lock().unwrap().push(format!("end {success}"));
        }
    }

    fn session(gateway: Arc<dyn TranslationGateway>) -> DecoderSession {
        DecoderSession::new(TranslatePhraseUseCase::new(
            gateway,
            TranslatorParams::default(),
        ))
    }

    #[tokio::test]
    async fn test_success_is_recorded() {
        let s = session(Arc::new(FixedGateway {
            fail: false,
            calls: AtomicUsize::new(0),
        }));
        let item = s
            .submit("I'm fine.", TranslationMode::WomenToMen, DisplayLanguage::En)
            .await
            .unwrap();

        assert_eq!(item.result.literal_text, "I'm fine.");
        assert_eq!(item.mode, TranslationMode::WomenToMen);
        assert_eq!(item.language, DisplayLanguage::En);
        assert_eq!(s.history().list(), vec![item]);
        assert!(!s.is_in_flight());
    }

    #[tokio::test]
    async fn test_transport_failure_leaves_history_untouched() {
        let s = session(Arc::new(FixedGateway {
            fail: true,
            calls: AtomicUsize::new(0),
        }));
        s.history().record_success(
            nededi_domain::TranslationResult::new("I'm fine.", "Not fine.", "Listen.", "Frosty"),
            TranslationMode::WomenToMen,
            DisplayLanguage::En,
        );
        let before = s.history().list();

        let err = s
            .submit("I forgot.", TranslationMode::MenToWomen, DisplayLanguage::En)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SessionError::Translation(TranslationError::Transport(_))
        ));
        assert_eq!(s.history().list(), before);
        assert!(!s.is_in_flight());
    }

    #[tokio::test]
    async fn test_validation_failure_releases_flag() {
        let gateway = Arc::new(FixedGateway {
            fail: false,
            calls: AtomicUsize::new(0),
        });
        let s = session(gateway.clone());
        let err = s
            .submit("  ", TranslationMode::WomenToMen, DisplayLanguage::En)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SessionError::Translation(TranslationError::Validation(_))
        ));
        assert!(!s.is_in_flight());
        assert!(s.history().is_empty());
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_second_submission_while_in_flight_is_busy() {
        let gateway = Arc::new(GatedGateway {
            entered: Notify::new(),
            release: Notify::new(),
        });
        let s = Arc::new(session(gateway.clone()));

        let first = {
            let s = s.clone();
            tokio::spawn(async move {
                s.submit("I'm fine.", TranslationMode::WomenToMen, DisplayLanguage::En)
                    .await
            })
        };
        gateway.entered.notified().await;
        assert!(s.is_in_flight());

        let second = s
            .submit("We need to talk.", TranslationMode::WomenToMen, DisplayLanguage::En)
            .await;
        assert!(matches!(second, Err(SessionError::Busy)));

        gateway.release.notify_one();
        let first = first.await.unwrap();
        assert!(first.is_ok());
        assert!(!s.is_in_flight());
        assert_eq!(s.history().len(), 1);
    }

    #[tokio::test]
    async fn test_progress_callbacks() {
        let s = session(Arc::new(FixedGateway {
            fail: true,
            calls: AtomicUsize::new(0),
        }));
        let progress = RecordingProgress::default();
        let _ = s
            .submit_with_progress(
                "I'm fine.",
                TranslationMode::WomenToMen,
                DisplayLanguage::Kk,
                &progress,
            )
            .await;

        assert_eq!(
            *progress.events.lock().unwrap(),
            vec!["start women-to-men kk".to_string(), "end false".to_string()]
        );
    }
}
