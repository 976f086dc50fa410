use std::sync::Arc;
use std::time::Duration;

use openword_translator::{
    LookupError, ResultAccumulator, TranslationQuery, TranslationResult, Translator,
};
use openword_types::{AppEvent, Direction, Strategy};
use tokio::time::timeout;

use crate::events::event_loop;

/// Answers "house" in either strategy, fails on "broken", finds nothing else
struct StubTranslator;

#[async_trait::async_trait]
impl Translator for StubTranslator {
    async fn lookup(&self, query: &TranslationQuery) -> Result<TranslationResult, LookupError> {
        let mut results = ResultAccumulator::new();
        match (query.text(), query.strategy()) {
            ("house", Strategy::Vanilla) => {
                results.push("casa (n.)");
                results.push("lar (n.)");
            }
            ("house", Strategy::Priority) => {
                results.push("casa");
            }
            ("broken", _) => {
                return Err(LookupError::ModifierIndex {
                    index: 3,
                    available: 1,
                });
            }
            _ => {}
        }
        Ok(results.finish())
    }
}

fn lookup_event(text: &str, strategy: Strategy) -> AppEvent {
    AppEvent::Lookup {
        text: text.to_string(),
        direction: Direction::EnToPt,
        strategy,
    }
}

#[tokio::test]
async fn test_lookup_round_trip() {
    let (ui_tx, app_rx) = kanal::unbounded_async::<AppEvent>();
    let (app_tx, ui_rx) = kanal::unbounded_async::<AppEvent>();
    let handle = tokio::spawn(event_loop(Arc::new(StubTranslator), app_rx, app_tx));

    ui_tx.send(lookup_event("house", Strategy::Vanilla)).await.unwrap();
    let result = timeout(Duration::from_secs(2), ui_rx.recv()).await;
    match result {
        Ok(Ok(AppEvent::ShowResults { query, entries })) => {
            assert_eq!(query, "house");
            assert_eq!(entries, ["casa (n.)", "lar (n.)"]);
        }
        Ok(Ok(other)) => panic!("Wrong event type: {:?}", other),
        Ok(Err(e)) => panic!("Channel error: {}", e),
        Err(_) => panic!("Timeout - lookup result never arrived"),
    }

    ui_tx.send(lookup_event("house", Strategy::Priority)).await.unwrap();
    let result = timeout(Duration::from_secs(2), ui_rx.recv()).await;
    assert!(matches!(
        result,
        Ok(Ok(AppEvent::ShowResults { ref entries, .. })) if entries == &["casa"]
    ));

    ui_tx.send(AppEvent::Shutdown).await.unwrap();
    let finished = timeout(Duration::from_secs(2), handle).await;
    assert!(matches!(finished, Ok(Ok(Ok(())))));
}

#[tokio::test]
async fn test_failures_and_misses_become_not_found() {
    let (ui_tx, app_rx) = kanal::unbounded_async::<AppEvent>();
    let (app_tx, ui_rx) = kanal::unbounded_async::<AppEvent>();
    tokio::spawn(event_loop(Arc::new(StubTranslator), app_rx, app_tx));

    for text in ["broken", "xyzzy", "   "] {
        ui_tx.send(lookup_event(text, Strategy::Vanilla)).await.unwrap();
        let result = timeout(Duration::from_secs(2), ui_rx.recv()).await;
        match result {
            Ok(Ok(AppEvent::NotFound { query })) => assert_eq!(query, text),
            Ok(Ok(other)) => panic!("Wrong event type: {:?}", other),
            Ok(Err(e)) => panic!("Channel error: {}", e),
            Err(_) => panic!("Timeout - NotFound never arrived"),
        }
    }
}

#[tokio::test]
async fn test_event_loop_stops_when_ui_hangs_up() {
    let (ui_tx, app_rx) = kanal::unbounded_async::<AppEvent>();
    let (app_tx, _ui_rx) = kanal::unbounded_async::<AppEvent>();
    let handle = tokio::spawn(event_loop(Arc::new(StubTranslator), app_rx, app_tx));

    drop(ui_tx);
    let finished = timeout(Duration::from_secs(2), handle).await;
    assert!(matches!(finished, Ok(Ok(Ok(())))));
}
