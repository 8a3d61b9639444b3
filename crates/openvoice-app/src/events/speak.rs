use std::sync::Arc;

use kanal::AsyncSender;
use openvoice_types::AppEvent;

use crate::workflow::Workflow;

pub async fn handle_speak_text(
    workflow: Arc<Workflow>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    text: &str,
    language: &str,
) -> anyhow::Result<()> {
    match workflow.speak_text(text, language) {
        Ok(None) => {
            tracing::debug!(language, "utterance queued");
        }
        Ok(Some(notice)) => {
            // Advisory mismatch: the utterance is queued anyway
            app_to_ui_tx
                .send(AppEvent::DetectionNotice {
                    language: language.to_string(),
                    message: notice,
                })
                .await?;
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
