use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use openvoice_config::Config;
use openvoice_speech::{
    CaptureSession, NullRecognizer, NullSynthesizer, SpeechSynthesizer, UtteranceQueue,
};
use openvoice_translator::{
    mymemory, rapid, MyMemoryProvider, RapidTranslateProvider, Translation, TranslationInvoker,
    Translator,
};
use openvoice_types::{AppEvent, TextSource, TranslationView};

use crate::state::AppState;
use crate::workflow::{Workflow, WorkflowError};

pub mod capture;
pub mod speak;
pub mod translate;

use capture::{handle_start_listening, handle_stop_listening};
use speak::handle_speak_text;
use translate::{handle_translate_file, handle_translate_text};

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    // Bind capabilities from config
    let workflow = {
        let config = state.config.read().await;
        Arc::new(build_workflow(&config))
    };

    tracing::info!(provider = %workflow.provider_name(), "workflow engine ready");
    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    loop {
        let event = ui_to_app_rx.recv().await?;
        handle_event(state.clone(), workflow.clone(), &app_to_ui_tx, event).await?;
    }
}

/// Production bindings: the configured HTTP provider, no platform
/// recognizer (listening degrades to `UnsupportedCapability`), and the
/// in-memory playback queue.
pub fn build_workflow(config: &Config) -> Workflow {
    let translator = &config.translator;
    let timeout = Duration::from_secs(config.request_timeout_secs);

    let provider: Arc<dyn Translator> = match translator.provider.as_str() {
        "rapid" => {
            let url = if translator.api_url.is_empty() {
                rapid::DEFAULT_API_URL.to_string()
            } else {
                translator.api_url.clone()
            };
            Arc::new(RapidTranslateProvider::new(
                url,
                translator.api_host.clone(),
                translator.api_key.clone(),
                timeout,
            ))
        }
        "mymemory" => {
            let url = if translator.api_url.is_empty() {
                mymemory::DEFAULT_API_URL.to_string()
            } else {
                translator.api_url.clone()
            };
            Arc::new(MyMemoryProvider::new(url, timeout))
        }
        other => {
            tracing::warn!(provider = other, "unknown provider, falling back to mymemory");
            Arc::new(MyMemoryProvider::new(
                mymemory::DEFAULT_API_URL.to_string(),
                timeout,
            ))
        }
    };

    let synthesizer: Arc<dyn SpeechSynthesizer> = if config.speech.synthesis_enabled {
        Arc::new(UtteranceQueue::new())
    } else {
        Arc::new(NullSynthesizer)
    };

    Workflow::new(
        TranslationInvoker::new(provider),
        CaptureSession::new(Arc::new(NullRecognizer)),
        synthesizer,
        config.speech.synthesis_enabled,
    )
}

pub(crate) async fn handle_event(
    state: Arc<AppState>,
    workflow: Arc<Workflow>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::StartListening { language } => {
            handle_start_listening(workflow, app_to_ui_tx, &language).await?;
        }
        AppEvent::StopListening => {
            handle_stop_listening(state, workflow, app_to_ui_tx).await?;
        }
        AppEvent::Reset => {
            workflow.reset();
            *state.view.write().await = None;
            app_to_ui_tx
                .send(AppEvent::TranscriptUpdate(String::new()))
                .await?;
        }
        AppEvent::TranslateText {
            text,
            source,
            target,
            origin,
        } => {
            handle_translate_text(state, workflow, app_to_ui_tx, text, source, target, origin)
                .await?;
        }
        AppEvent::TranslateFile {
            path,
            source,
            target,
        } => {
            handle_translate_file(state, workflow, app_to_ui_tx, path, source, target).await?;
        }
        AppEvent::SpeakText { text, language } => {
            handle_speak_text(workflow, app_to_ui_tx, &text, &language).await?;
        }
        AppEvent::StopSpeech => {
            workflow.stop_speech();
        }
        // Engine -> view events, nothing to do on this side
        AppEvent::ListeningChanged(_)
        | AppEvent::TranscriptUpdate(_)
        | AppEvent::TranslationStarted
        | AppEvent::ShowTranslation(_)
        | AppEvent::DetectionNotice { .. }
        | AppEvent::ShowError { .. }
        | AppEvent::BackendReady => {}
    }

    Ok(())
}

/// Write the outcome into the display slot and tell the view.
/// Whichever task gets here last wins the slot.
pub(crate) async fn publish_outcome(
    state: Arc<AppState>,
    tx: AsyncSender<AppEvent>,
    input: String,
    origin: TextSource,
    result: Result<Translation, WorkflowError>,
) {
    match result {
        Ok(translation) => {
            let view = TranslationView {
                input,
                origin,
                translated: translation.text,
                source: translation.pair.source,
                target: translation.pair.target,
                provider: translation.provider,
            };
            *state.view.write().await = Some(view.clone());
            if let Err(e) = tx.send(AppEvent::ShowTranslation(view)).await {
                tracing::error!("failed to publish translation: {e}");
            }
        }
        Err(e) => {
            tracing::warn!(kind = e.kind(), "workflow failed: {e}");
            let _ = tx
                .send(AppEvent::ShowError {
                    kind: e.kind().to_string(),
                    message: e.to_string(),
                })
                .await;
        }
    }
}
