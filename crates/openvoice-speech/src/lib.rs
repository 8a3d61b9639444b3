pub mod recognizer;
pub mod session;
pub mod synthesizer;

pub use recognizer::{NullRecognizer, RecognizerBackend, ScriptedRecognizer, TranscriptSink};
pub use session::CaptureSession;
pub use synthesizer::{NullSynthesizer, SpeechSynthesizer, Utterance, UtteranceQueue};

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    /// Platform has no recognition capability
    #[error("speech recognition is not available")]
    UnsupportedCapability,

    /// Empty or unset recognition language
    #[error("no recognition language selected")]
    InvalidLanguage,

    #[error("recognizer failure: {0}")]
    Recognizer(String),
}
