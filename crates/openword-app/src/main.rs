use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use openword_config::Config;
use openword_translator::{OpenWordTranslator, Translator};
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod controller;
pub mod events;
pub mod ui;

#[cfg(test)]
mod tests;

use self::cli::Args;
use self::controller::AppController;
use self::ui::Session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(args.json_logs);

    let config = Config::new();
    tracing::debug!(
        "Service {} (timeout {}s, priority policy {:?})",
        config.service.base_url,
        config.service.timeout_seconds,
        config.priority_policy
    );

    let translator: Arc<dyn Translator> = Arc::new(
        OpenWordTranslator::from_config(&config).context("Failed to build HTTP client")?,
    );

    let session = Session::new(args.direction(), args.strategy());
    let controller = AppController::new(translator);
    let mut tasks = controller.spawn_tasks(session, args.words);

    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::error!("task exited with error: {e:#}");
                return Err(e);
            }
            Err(e) => {
                tracing::error!("task panicked: {e}");
                return Err(e.into());
            }
        }
    }

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
