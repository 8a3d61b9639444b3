use std::path::PathBuf;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use openvoice_core::LanguageRegistry;
use openvoice_types::{AppEvent, TextSource};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Thin console surface over the engine: plain lines translate,
/// slash commands drive the speech paths.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    state: Arc<AppState>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            event = app_to_ui_rx.recv() => {
                render(event?);
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !dispatch(&line, &ui_to_app_tx, &state).await? {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn render(event: AppEvent) {
    match event {
        AppEvent::BackendReady => {
            println!(
                "ready. type text to translate; /listen /stop /reset /say /file /languages /hush /quit"
            );
        }
        AppEvent::ListeningChanged(true) => println!("listening..."),
        AppEvent::ListeningChanged(false) => println!("stopped listening"),
        AppEvent::TranscriptUpdate(t) if t.is_empty() => println!("(cleared)"),
        AppEvent::TranscriptUpdate(t) => println!("heard: {t}"),
        AppEvent::TranslationStarted => println!("translating..."),
        AppEvent::ShowTranslation(view) => {
            println!("[{} -> {} via {}] {}", view.source, view.target, view.provider, view.translated);
        }
        AppEvent::DetectionNotice { message, .. } => println!("note: {message}"),
        AppEvent::ShowError { kind, message } => eprintln!("error ({kind}): {message}"),
        // Triggers never loop back here
        _ => {}
    }
}

/// Returns false when the session should end.
async fn dispatch(
    line: &str,
    tx: &AsyncSender<AppEvent>,
    state: &Arc<AppState>,
) -> anyhow::Result<bool> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(true);
    }

    let (source, target, recognition_lang) = {
        let config = state.config.read().await;
        (
            config.translator.source_lang.clone(),
            config.translator.target_lang.clone(),
            config.speech.recognition_lang.clone(),
        )
    };

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    let event = match command {
        "/quit" | "/exit" => return Ok(false),
        "/languages" => {
            for lang in LanguageRegistry::new().list() {
                println!("{:>4}  {}  ({})", lang.code, lang.name, lang.synthesis_tag);
            }
            return Ok(true);
        }
        "/listen" => AppEvent::StartListening {
            language: if rest.is_empty() { recognition_lang } else { rest.to_string() },
        },
        "/stop" => AppEvent::StopListening,
        "/reset" => AppEvent::Reset,
        "/hush" => AppEvent::StopSpeech,
        "/say" => AppEvent::SpeakText {
            text: rest.to_string(),
            language: target,
        },
        "/file" => AppEvent::TranslateFile {
            path: PathBuf::from(rest),
            source,
            target,
        },
        _ => AppEvent::TranslateText {
            text: line.to_string(),
            source,
            target,
            origin: TextSource::Manual,
        },
    };

    tx.send(event).await?;
    Ok(true)
}
