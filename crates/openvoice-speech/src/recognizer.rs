use std::sync::Mutex;

use crate::SpeechError;

/// Receives recognized text chunks as they arrive.
pub type TranscriptSink = Box<dyn FnMut(String) + Send>;

/// Continuous speech-recognition capability. Accumulation and the
/// listening state machine live in [`crate::CaptureSession`]; a backend
/// only has to stream recognized chunks into the sink.
pub trait RecognizerBackend: Send + Sync {
    fn is_available(&self) -> bool;

    /// Begin continuous recognition in `language`, delivering chunks to
    /// `on_text` until [`stop`](Self::stop).
    fn start(&self, language: &str, on_text: TranscriptSink) -> Result<(), SpeechError>;

    fn stop(&self) -> Result<(), SpeechError>;
}

/// Binding for platforms without recognition support.
pub struct NullRecognizer;

impl RecognizerBackend for NullRecognizer {
    fn is_available(&self) -> bool {
        false
    }

    fn start(&self, _language: &str, _on_text: TranscriptSink) -> Result<(), SpeechError> {
        Err(SpeechError::UnsupportedCapability)
    }

    fn stop(&self) -> Result<(), SpeechError> {
        Ok(())
    }
}

/// Delivers a fixed script of recognized chunks as soon as listening
/// begins. Test and demo binding.
pub struct ScriptedRecognizer {
    chunks: Mutex<Vec<String>>,
}

impl ScriptedRecognizer {
    pub fn new<I, S>(chunks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            chunks: Mutex::new(chunks.into_iter().map(Into::into).collect()),
        }
    }
}

impl RecognizerBackend for ScriptedRecognizer {
    fn is_available(&self) -> bool {
        true
    }

    fn start(&self, language: &str, mut on_text: TranscriptSink) -> Result<(), SpeechError> {
        tracing::debug!(language, "scripted recognizer started");
        let chunks = {
            let mut guard = self.chunks.lock().unwrap_or_else(|e| e.into_inner());
            std::mem::take(&mut *guard)
        };
        for chunk in chunks {
            on_text(chunk);
        }
        Ok(())
    }

    fn stop(&self) -> Result<(), SpeechError> {
        Ok(())
    }
}
