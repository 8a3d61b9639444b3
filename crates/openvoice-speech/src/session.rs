use std::sync::{Arc, Mutex};

use crate::recognizer::RecognizerBackend;
use crate::SpeechError;

#[derive(Default)]
struct SessionInner {
    listening: bool,
    transcript: String,
}

/// One listening session over a recognizer backend.
///
/// State machine: `Idle -> Listening -> Idle`. [`start`](Self::start)
/// moves to Listening, [`stop`](Self::stop) moves back to Idle and
/// returns everything accumulated since `start`. Chunks delivered
/// while not listening are discarded.
#[derive(Clone)]
pub struct CaptureSession {
    backend: Arc<dyn RecognizerBackend>,
    inner: Arc<Mutex<SessionInner>>,
}

impl CaptureSession {
    pub fn new(backend: Arc<dyn RecognizerBackend>) -> Self {
        Self {
            backend,
            inner: Arc::new(Mutex::new(SessionInner::default())),
        }
    }

    pub fn is_listening(&self) -> bool {
        self.lock().listening
    }

    pub fn transcript(&self) -> String {
        self.lock().transcript.clone()
    }

    /// Begin continuous listening. Idempotent while already listening.
    pub fn start(&self, language: &str) -> Result<(), SpeechError> {
        if language.trim().is_empty() {
            return Err(SpeechError::InvalidLanguage);
        }
        if !self.backend.is_available() {
            return Err(SpeechError::UnsupportedCapability);
        }

        {
            let mut inner = self.lock();
            if inner.listening {
                return Ok(());
            }
            inner.listening = true;
            inner.transcript.clear();
        }

        let sink_inner = Arc::clone(&self.inner);
        let result = self.backend.start(
            language,
            Box::new(move |chunk| {
                let mut inner = sink_inner.lock().unwrap_or_else(|e| e.into_inner());
                if !inner.listening {
                    return;
                }
                if !inner.transcript.is_empty() {
                    inner.transcript.push(' ');
                }
                inner.transcript.push_str(chunk.trim());
            }),
        );

        if result.is_err() {
            self.lock().listening = false;
        }
        result
    }

    /// End listening and return the accumulated transcript. Calling it
    /// while idle just returns whatever is accumulated.
    pub fn stop(&self) -> Result<String, SpeechError> {
        let was_listening = {
            let mut inner = self.lock();
            std::mem::replace(&mut inner.listening, false)
        };

        if was_listening {
            self.backend.stop()?;
        }

        Ok(self.lock().transcript.clone())
    }

    /// Clear the accumulated transcript without touching the listening
    /// state. Calling it twice equals calling it once.
    pub fn reset(&self) {
        self.lock().transcript.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}
