use std::sync::Mutex;

/// A unit of synthesized speech on the playback queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,
    pub language: String,
}

/// Speech-synthesis capability. Failure is silent at this layer: a
/// platform without synthesis turns every call into a no-op rather
/// than an error into the workflow.
pub trait SpeechSynthesizer: Send + Sync {
    /// Enqueue an utterance; multiple calls queue sequentially rather
    /// than interrupting each other.
    fn speak(&self, text: &str, language: &str);

    /// Drop everything pending or playing.
    fn cancel_all(&self);
}

/// In-memory sequential playback queue. Stands in for a platform
/// queue and doubles as the test binding.
#[derive(Default)]
pub struct UtteranceQueue {
    queue: Mutex<Vec<Utterance>>,
}

impl UtteranceQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Vec<Utterance> {
        self.queue.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl SpeechSynthesizer for UtteranceQueue {
    fn speak(&self, text: &str, language: &str) {
        tracing::debug!(language, chars = text.len(), "utterance enqueued");
        self.queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Utterance {
                text: text.to_string(),
                language: language.to_string(),
            });
    }

    fn cancel_all(&self) {
        self.queue.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

/// Binding for platforms without synthesis support.
pub struct NullSynthesizer;

impl SpeechSynthesizer for NullSynthesizer {
    fn speak(&self, _text: &str, language: &str) {
        tracing::debug!(language, "synthesis unavailable, utterance dropped");
    }

    fn cancel_all(&self) {}
}
