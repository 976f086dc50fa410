use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use openword_translator::Translator;
use openword_types::AppEvent;
use tokio::task::JoinSet;

use crate::events::event_loop;
use crate::ui::{Session, ui_loop};

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(16),
            ui_to_app: kanal::bounded_async(16),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawns the lookup and terminal tasks and wires them together
pub struct AppController {
    channels: ChannelSet,
    translator: Arc<dyn Translator>,
}

impl AppController {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self {
            channels: ChannelSet::new(),
            translator,
        }
    }

    pub fn spawn_tasks(&self, session: Session, words: Vec<String>) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.translator.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
        ));

        // Terminal loop
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
            session,
            words,
        ));

        tasks
    }
}
