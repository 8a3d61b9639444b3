use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Events crossing the view/engine boundary, both directions.
#[derive(Debug, Clone)]
pub enum AppEvent {
    // View -> engine triggers
    StartListening {
        language: String,
    },
    StopListening,
    Reset,
    TranslateText {
        text: String,
        source: String,
        target: String,
        origin: TextSource,
    },
    TranslateFile {
        path: PathBuf,
        source: String,
        target: String,
    },
    SpeakText {
        text: String,
        language: String,
    },
    StopSpeech,

    // Engine -> view outcomes
    ListeningChanged(bool),
    TranscriptUpdate(String),
    TranslationStarted,
    ShowTranslation(TranslationView),
    DetectionNotice {
        language: String,
        message: String,
    },
    ShowError {
        kind: String,
        message: String,
    },
    BackendReady,
}

/// Where a piece of input text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextSource {
    Microphone,
    File,
    Manual,
}

/// Displayed outcome of one translation workflow instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationView {
    pub input: String,
    pub origin: TextSource,
    pub translated: String,
    pub source: String,
    pub target: String,
    pub provider: String,
}
