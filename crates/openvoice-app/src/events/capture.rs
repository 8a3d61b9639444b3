use std::sync::Arc;

use kanal::AsyncSender;
use openvoice_types::{AppEvent, TextSource};

use crate::events::publish_outcome;
use crate::state::AppState;
use crate::workflow::Workflow;

pub async fn handle_start_listening(
    workflow: Arc<Workflow>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    language: &str,
) -> anyhow::Result<()> {
    match workflow.begin_capture(language) {
        Ok(()) => {
            tracing::info!(language, "listening started");
            app_to_ui_tx.send(AppEvent::ListeningChanged(true)).await?;
        }
        Err(e) => {
            app_to_ui_tx
                .send(AppEvent::ShowError {
                    kind: e.kind().to_string(),
                    message: e.to_string(),
                })
                .await?;
        }
    }

    Ok(())
}

/// Ends the session and drives the captured transcript through
/// translate-then-speak. The translation itself runs detached so a
/// slow provider never stalls the event loop.
pub async fn handle_stop_listening(
    state: Arc<AppState>,
    workflow: Arc<Workflow>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    app_to_ui_tx.send(AppEvent::ListeningChanged(false)).await?;

    let transcript = match workflow.end_capture() {
        Ok(t) => t,
        Err(e) => {
            app_to_ui_tx
                .send(AppEvent::ShowError {
                    kind: e.kind().to_string(),
                    message: e.to_string(),
                })
                .await?;
            return Ok(());
        }
    };

    tracing::debug!(
        origin = ?TextSource::Microphone,
        chars = transcript.len(),
        "transcript captured"
    );
    app_to_ui_tx
        .send(AppEvent::TranscriptUpdate(transcript.clone()))
        .await?;

    let (source, target) = {
        let config = state.config.read().await;
        (
            config.translator.source_lang.clone(),
            config.translator.target_lang.clone(),
        )
    };

    app_to_ui_tx.send(AppEvent::TranslationStarted).await?;

    let tx = app_to_ui_tx.clone();
    tokio::spawn(async move {
        let result = workflow
            .translate_and_speak(&transcript, &source, &target)
            .await;
        publish_outcome(state, tx, transcript, TextSource::Microphone, result).await;
    });

    Ok(())
}
