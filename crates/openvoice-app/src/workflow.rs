use std::path::Path;
use std::sync::Arc;

use openvoice_core::language::UnknownLanguage;
use openvoice_core::preprocess::Preprocessor;
use openvoice_core::{DetectionRules, LanguageRegistry, TranscriptPreprocessor};
use openvoice_speech::{CaptureSession, SpeechError, SpeechSynthesizer};
use openvoice_translator::{
    LanguagePair, TranslateError, Translation, TranslationInvoker, TranslationRequest,
};

/// Everything that can go wrong inside one workflow instance. All of
/// it is caught at the event layer and shown to the user; nothing is
/// fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error(transparent)]
    Speech(#[from] SpeechError),

    #[error(transparent)]
    Language(#[from] UnknownLanguage),

    #[error("could not read file: {0}")]
    FileRead(String),

    #[error("file is not UTF-8 text: {0}")]
    NotText(String),
}

impl WorkflowError {
    /// Stable kind tag shown next to the message.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Translate(TranslateError::InvalidInput) => "InvalidInput",
            Self::Translate(TranslateError::NoTranslation) => "NoTranslation",
            Self::Translate(TranslateError::ProviderUnavailable(_)) => "ProviderUnavailable",
            Self::Speech(SpeechError::UnsupportedCapability) => "UnsupportedCapability",
            Self::Speech(SpeechError::Recognizer(_)) => "UnsupportedCapability",
            Self::Speech(SpeechError::InvalidLanguage) => "InvalidInput",
            Self::Language(_) | Self::FileRead(_) | Self::NotText(_) => "InvalidInput",
        }
    }
}

/// Extensions the file path is expected to carry. Advisory only, no
/// content-type validation.
const ADVISORY_EXTENSIONS: &[&str] = &["txt", "md", "text"];

/// One parameterized engine behind the speech-to-speech,
/// text-to-speech, and text-to-text surfaces.
///
/// Within one instance the sequence is strictly
/// `start -> stop -> translate -> speak`. Across instances there is no
/// ordering guarantee; the event layer lets the last-resolved response
/// own the display.
pub struct Workflow {
    registry: LanguageRegistry,
    rules: DetectionRules,
    preprocessor: TranscriptPreprocessor,
    invoker: TranslationInvoker,
    session: CaptureSession,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    synthesis_enabled: bool,
}

impl Workflow {
    pub fn new(
        invoker: TranslationInvoker,
        session: CaptureSession,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        synthesis_enabled: bool,
    ) -> Self {
        Self {
            registry: LanguageRegistry::new(),
            rules: DetectionRules::new(),
            preprocessor: TranscriptPreprocessor,
            invoker,
            session,
            synthesizer,
            synthesis_enabled,
        }
    }

    pub fn provider_name(&self) -> String {
        self.invoker.provider_name()
    }

    pub fn is_listening(&self) -> bool {
        self.session.is_listening()
    }

    pub fn transcript(&self) -> String {
        self.session.transcript()
    }

    /// Speech-to-speech, first half: begin a listening session.
    pub fn begin_capture(&self, language: &str) -> Result<(), WorkflowError> {
        let language = self.registry.resolve(language)?;
        self.session.start(language.code)?;
        Ok(())
    }

    /// Speech-to-speech, second half: end listening and hand back the
    /// transcript that drives the translation.
    pub fn end_capture(&self) -> Result<String, WorkflowError> {
        let transcript = self.session.stop()?;
        Ok(transcript)
    }

    /// End listening, translate the transcript, speak the result.
    pub async fn finish_capture(
        &self,
        source: &str,
        target: &str,
    ) -> Result<Translation, WorkflowError> {
        let transcript = self.end_capture()?;
        self.translate_and_speak(&transcript, source, target).await
    }

    /// Text-to-text: preprocess and translate.
    pub async fn translate_text(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<Translation, WorkflowError> {
        let pair = self.pair(source, target)?;
        let text = self.preprocessor.process(text);
        let translation = self
            .invoker
            .translate(TranslationRequest { text, pair })
            .await?;
        Ok(translation)
    }

    pub async fn translate_and_speak(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<Translation, WorkflowError> {
        let translation = self.translate_text(text, source, target).await?;

        if self.synthesis_enabled {
            let tag = self.registry.synthesis_tag(target);
            self.synthesizer.speak(&translation.text, &tag);
        }

        Ok(translation)
    }

    /// Text-to-speech. The language check is advisory: a mismatch is
    /// returned as a notice for the view to show, never a block.
    pub fn speak_text(&self, text: &str, language: &str) -> Result<Option<String>, WorkflowError> {
        if text.trim().is_empty() {
            return Err(TranslateError::InvalidInput.into());
        }

        let notice = if self.rules.matches(language, text) {
            None
        } else {
            tracing::warn!(language, "text does not look like the selected language");
            Some(format!(
                "text does not look like {}; speaking it anyway",
                self.registry
                    .get(language)
                    .map(|l| l.name)
                    .unwrap_or(language)
            ))
        };

        let tag = self.registry.synthesis_tag(language);
        self.synthesizer.speak(text, &tag);
        Ok(notice)
    }

    pub fn stop_speech(&self) {
        self.synthesizer.cancel_all();
    }

    /// Read a user-selected file as UTF-8 text.
    pub async fn ingest_file(&self, path: &Path) -> Result<String, WorkflowError> {
        let known_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ADVISORY_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
        if !known_extension {
            tracing::warn!(path = %path.display(), "unexpected file extension, reading anyway");
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| WorkflowError::FileRead(e.to_string()))?;

        String::from_utf8(bytes).map_err(|_| WorkflowError::NotText(path.display().to_string()))
    }

    /// Clears the transcript. In-flight translation requests are not
    /// cancelled; a late response still lands in the display slot.
    pub fn reset(&self) {
        self.session.reset();
    }

    fn pair(&self, source: &str, target: &str) -> Result<LanguagePair, WorkflowError> {
        let source = self.registry.resolve(source)?;
        let target = self.registry.resolve(target)?;
        Ok(LanguagePair::new(source.code, target.code))
    }
}
