use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncReceiver;
use openvoice_config::Config;
use openvoice_types::{AppEvent, TextSource};
use tokio::time::timeout;

use crate::events::handle_event;
use crate::state::AppState;
use crate::tests::support::{test_workflow, EchoProvider};

fn test_state() -> Arc<AppState> {
    let mut config = Config::new();
    config.translator.source_lang = "en".to_string();
    config.translator.target_lang = "te".to_string();
    Arc::new(AppState::new(config))
}

async fn next_event(rx: &AsyncReceiver<AppEvent>) -> AppEvent {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("channel closed")
}

#[tokio::test]
async fn typed_text_flows_to_a_displayed_translation() {
    let state = test_state();
    let (workflow, _) = test_workflow(Arc::new(EchoProvider::new()), &[]);
    let workflow = Arc::new(workflow);
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    handle_event(
        state.clone(),
        workflow,
        &tx,
        AppEvent::TranslateText {
            text: "good evening".to_string(),
            source: "en".to_string(),
            target: "es".to_string(),
            origin: TextSource::Manual,
        },
    )
    .await
    .unwrap();

    assert!(matches!(next_event(&rx).await, AppEvent::TranslationStarted));
    match next_event(&rx).await {
        AppEvent::ShowTranslation(view) => {
            assert_eq!(view.translated, "<good evening>");
            assert_eq!(view.input, "good evening");
            assert_eq!(view.target, "es");
            assert_eq!(view.origin, TextSource::Manual);
        }
        other => panic!("expected ShowTranslation, got {other:?}"),
    }

    let displayed = state.view.read().await.clone();
    assert_eq!(displayed.unwrap().translated, "<good evening>");
}

#[tokio::test]
async fn empty_text_resolves_to_an_invalid_input_error() {
    let state = test_state();
    let (workflow, _) = test_workflow(Arc::new(EchoProvider::new()), &[]);
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    handle_event(
        state.clone(),
        Arc::new(workflow),
        &tx,
        AppEvent::TranslateText {
            text: "   ".to_string(),
            source: "en".to_string(),
            target: "te".to_string(),
            origin: TextSource::Manual,
        },
    )
    .await
    .unwrap();

    assert!(matches!(next_event(&rx).await, AppEvent::TranslationStarted));
    match next_event(&rx).await {
        AppEvent::ShowError { kind, .. } => assert_eq!(kind, "InvalidInput"),
        other => panic!("expected ShowError, got {other:?}"),
    }
    assert!(state.view.read().await.is_none());
}

#[tokio::test]
async fn speech_capture_drives_translate_then_speak() {
    let state = test_state();
    let provider = Arc::new(EchoProvider::new());
    let (workflow, queue) = test_workflow(provider.clone(), &["hello", "world"]);
    let workflow = Arc::new(workflow);
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    handle_event(
        state.clone(),
        workflow.clone(),
        &tx,
        AppEvent::StartListening { language: "en".to_string() },
    )
    .await
    .unwrap();
    assert!(matches!(next_event(&rx).await, AppEvent::ListeningChanged(true)));

    handle_event(state.clone(), workflow, &tx, AppEvent::StopListening)
        .await
        .unwrap();

    assert!(matches!(next_event(&rx).await, AppEvent::ListeningChanged(false)));
    match next_event(&rx).await {
        AppEvent::TranscriptUpdate(t) => assert_eq!(t, "hello world"),
        other => panic!("expected TranscriptUpdate, got {other:?}"),
    }
    assert!(matches!(next_event(&rx).await, AppEvent::TranslationStarted));
    match next_event(&rx).await {
        AppEvent::ShowTranslation(view) => {
            assert_eq!(view.translated, "<hello world>");
            assert_eq!(view.origin, TextSource::Microphone);
        }
        other => panic!("expected ShowTranslation, got {other:?}"),
    }

    assert_eq!(provider.call_count(), 1);
    assert_eq!(queue.pending().len(), 1);
    assert_eq!(queue.pending()[0].language, "te-IN");
}

#[tokio::test]
async fn file_translation_is_tagged_with_its_origin() {
    let state = test_state();
    let (workflow, _) = test_workflow(Arc::new(EchoProvider::new()), &[]);
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    let path = std::env::temp_dir().join("openvoice_event_file_origin.txt");
    tokio::fs::write(&path, "guten morgen").await.unwrap();

    handle_event(
        state,
        Arc::new(workflow),
        &tx,
        AppEvent::TranslateFile {
            path: path.clone(),
            source: "de".to_string(),
            target: "en".to_string(),
        },
    )
    .await
    .unwrap();

    assert!(matches!(next_event(&rx).await, AppEvent::TranslationStarted));
    match next_event(&rx).await {
        AppEvent::ShowTranslation(view) => {
            assert_eq!(view.translated, "<guten morgen>");
            assert_eq!(view.origin, TextSource::File);
        }
        other => panic!("expected ShowTranslation, got {other:?}"),
    }

    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn listening_without_capability_shows_unsupported() {
    let state = test_state();
    let config = state.config.read().await;
    let workflow = Arc::new(crate::events::build_workflow(&config));
    drop(config);
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    handle_event(
        state,
        workflow,
        &tx,
        AppEvent::StartListening { language: "en".to_string() },
    )
    .await
    .unwrap();

    match next_event(&rx).await {
        AppEvent::ShowError { kind, .. } => assert_eq!(kind, "UnsupportedCapability"),
        other => panic!("expected ShowError, got {other:?}"),
    }
}

#[tokio::test]
async fn last_resolved_response_owns_the_display() {
    let state = test_state();
    let provider = Arc::new(
        EchoProvider::new().with_delay("slow request", Duration::from_millis(150)),
    );
    let (workflow, _) = test_workflow(provider, &[]);
    let workflow = Arc::new(workflow);
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    let translate = |text: &str| AppEvent::TranslateText {
        text: text.to_string(),
        source: "en".to_string(),
        target: "te".to_string(),
        origin: TextSource::Manual,
    };

    // Issued first, resolves last
    handle_event(state.clone(), workflow.clone(), &tx, translate("slow request"))
        .await
        .unwrap();
    handle_event(state.clone(), workflow, &tx, translate("fast request"))
        .await
        .unwrap();

    let mut shown = Vec::new();
    while shown.len() < 2 {
        if let AppEvent::ShowTranslation(view) = next_event(&rx).await {
            shown.push(view.translated);
        }
    }

    assert_eq!(shown, vec!["<fast request>", "<slow request>"]);
    let displayed = state.view.read().await.clone();
    assert_eq!(displayed.unwrap().translated, "<slow request>");
}

#[tokio::test]
async fn reset_clears_display_and_is_idempotent() {
    let state = test_state();
    let (workflow, _) = test_workflow(Arc::new(EchoProvider::new()), &[]);
    let workflow = Arc::new(workflow);
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    handle_event(
        state.clone(),
        workflow.clone(),
        &tx,
        AppEvent::TranslateText {
            text: "hi".to_string(),
            source: "en".to_string(),
            target: "es".to_string(),
            origin: TextSource::Manual,
        },
    )
    .await
    .unwrap();
    assert!(matches!(next_event(&rx).await, AppEvent::TranslationStarted));
    assert!(matches!(next_event(&rx).await, AppEvent::ShowTranslation(_)));

    handle_event(state.clone(), workflow.clone(), &tx, AppEvent::Reset)
        .await
        .unwrap();
    let after_once = state.view.read().await.is_none();

    handle_event(state.clone(), workflow.clone(), &tx, AppEvent::Reset)
        .await
        .unwrap();
    let after_twice = state.view.read().await.is_none();

    assert!(after_once);
    assert_eq!(after_once, after_twice);
    assert_eq!(workflow.transcript(), "");
}

#[tokio::test]
async fn detection_notice_is_advisory() {
    let state = test_state();
    let (workflow, queue) = test_workflow(Arc::new(EchoProvider::new()), &[]);
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    handle_event(
        state,
        Arc::new(workflow),
        &tx,
        AppEvent::SpeakText {
            text: "Hello".to_string(),
            language: "te-IN".to_string(),
        },
    )
    .await
    .unwrap();

    match next_event(&rx).await {
        AppEvent::DetectionNotice { language, .. } => assert_eq!(language, "te-IN"),
        other => panic!("expected DetectionNotice, got {other:?}"),
    }
    // Spoken regardless
    assert_eq!(queue.pending().len(), 1);
}
