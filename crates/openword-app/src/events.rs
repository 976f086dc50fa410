use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use openword_translator::{LookupError, TranslationQuery, Translator};
use openword_types::{AppEvent, Direction, Strategy};

/// Serves lookup requests until `Shutdown` or the UI side hangs up
pub async fn event_loop(
    translator: Arc<dyn Translator>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::debug!("Event loop started");
    loop {
        let Ok(event) = ui_to_app_rx.recv().await else {
            tracing::debug!("UI channel closed, stopping event loop");
            return Ok(());
        };

        match event {
            AppEvent::Lookup {
                text,
                direction,
                strategy,
            } => {
                // One task per lookup
                let translator = Arc::clone(&translator);
                let tx = app_to_ui_tx.clone();
                tokio::spawn(async move {
                    if let Err(e) =
                        handle_lookup(translator.as_ref(), text, direction, strategy, &tx).await
                    {
                        tracing::error!("Failed to deliver lookup result: {e}");
                    }
                });
            }
            AppEvent::Shutdown => {
                tracing::debug!("Shutdown requested");
                return Ok(());
            }
            other => {
                tracing::debug!("Ignoring event: {:?}", other);
            }
        }
    }
}

async fn handle_lookup(
    translator: &dyn Translator,
    text: String,
    direction: Direction,
    strategy: Strategy,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let entries = match TranslationQuery::new(&text, direction, strategy) {
        Ok(query) => match translator.lookup(&query).await {
            Ok(result) => result.into_entries(),
            Err(e) => {
                tracing::warn!("Lookup for '{text}' failed: {e}");
                Vec::new()
            }
        },
        Err(LookupError::EmptyQuery) => {
            tracing::debug!("Blank query dropped");
            Vec::new()
        }
        Err(e) => return Err(e.into()),
    };

    let event = if entries.is_empty() {
        AppEvent::NotFound { query: text }
    } else {
        AppEvent::ShowResults {
            query: text,
            entries,
        }
    };

    app_to_ui_tx.send(event).await?;
    Ok(())
}
