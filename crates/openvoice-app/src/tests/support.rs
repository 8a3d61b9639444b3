//! Fake capabilities shared across the app tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use openvoice_speech::{CaptureSession, ScriptedRecognizer, SpeechSynthesizer, UtteranceQueue};
use openvoice_translator::{
    ProviderMetadata, TranslateError, Translation, TranslationInvoker, TranslationRequest,
    Translator,
};

use crate::workflow::Workflow;

/// Wraps the input in angle brackets so tests can tell translated text
/// from input text. Optional per-text delay simulates a slow provider.
pub struct EchoProvider {
    pub calls: AtomicUsize,
    delays: Vec<(String, Duration)>,
}

impl EchoProvider {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            delays: Vec::new(),
        }
    }

    pub fn with_delay(mut self, text: &str, delay: Duration) -> Self {
        self.delays.push((text.to_string(), delay));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Translator for EchoProvider {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<Translation, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some((_, delay)) = self.delays.iter().find(|(t, _)| *t == request.text) {
            tokio::time::sleep(*delay).await;
        }

        Ok(Translation {
            text: format!("<{}>", request.text),
            pair: request.pair.clone(),
            provider: "echo".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "echo".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

pub enum Failure {
    NoTranslation,
    Unavailable,
}

pub struct FailingProvider(pub Failure);

#[async_trait::async_trait]
impl Translator for FailingProvider {
    async fn translate(
        &self,
        _request: &TranslationRequest,
    ) -> Result<Translation, TranslateError> {
        Err(match self.0 {
            Failure::NoTranslation => TranslateError::NoTranslation,
            Failure::Unavailable => {
                TranslateError::ProviderUnavailable("connection refused".to_string())
            }
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "failing".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

/// Workflow over a scripted recognizer and an inspectable playback
/// queue.
pub fn test_workflow(
    provider: Arc<dyn Translator>,
    chunks: &[&str],
) -> (Workflow, Arc<UtteranceQueue>) {
    let queue = Arc::new(UtteranceQueue::new());
    let session = CaptureSession::new(Arc::new(ScriptedRecognizer::new(chunks.iter().copied())));
    let workflow = Workflow::new(
        TranslationInvoker::new(provider),
        session,
        Arc::clone(&queue) as Arc<dyn SpeechSynthesizer>,
        true,
    );
    (workflow, queue)
}
