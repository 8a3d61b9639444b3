use std::path::PathBuf;
use std::sync::Arc;

use kanal::AsyncSender;
use openvoice_types::{AppEvent, TextSource};

use crate::events::publish_outcome;
use crate::state::AppState;
use crate::workflow::Workflow;

pub async fn handle_translate_text(
    state: Arc<AppState>,
    workflow: Arc<Workflow>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    text: String,
    source: String,
    target: String,
    origin: TextSource,
) -> anyhow::Result<()> {
    tracing::debug!(?origin, chars = text.len(), "translation requested");
    app_to_ui_tx.send(AppEvent::TranslationStarted).await?;

    let tx = app_to_ui_tx.clone();
    tokio::spawn(async move {
        let result = workflow.translate_text(&text, &source, &target).await;
        publish_outcome(state, tx, text, origin, result).await;
    });

    Ok(())
}

pub async fn handle_translate_file(
    state: Arc<AppState>,
    workflow: Arc<Workflow>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    path: PathBuf,
    source: String,
    target: String,
) -> anyhow::Result<()> {
    app_to_ui_tx.send(AppEvent::TranslationStarted).await?;

    let tx = app_to_ui_tx.clone();
    tokio::spawn(async move {
        let result = match workflow.ingest_file(&path).await {
            Ok(text) => {
                let result = workflow.translate_text(&text, &source, &target).await;
                publish_outcome(state, tx, text, TextSource::File, result).await;
                return;
            }
            Err(e) => Err(e),
        };
        publish_outcome(state, tx, path.display().to_string(), TextSource::File, result).await;
    });

    Ok(())
}
