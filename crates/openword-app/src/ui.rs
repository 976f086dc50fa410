//! Terminal front end: one-shot lookups from the command line, or an
//! interactive prompt with direction and strategy toggles.

use kanal::{AsyncReceiver, AsyncSender};
use openword_types::{AppEvent, Direction, Strategy};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

const HELP: &str = "\
Type a word to look it up. Commands:
  :en        English -> Portuguese
  :pt        Portuguese -> English
  :vanilla   single-page search
  :priority  concept search with word-count fallback
  :status    show current settings
  :help      show this help
  :quit      exit";

/// Direction and strategy the user has currently selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub direction: Direction,
    pub strategy: Strategy,
}

impl Session {
    pub fn new(direction: Direction, strategy: Strategy) -> Self {
        Self {
            direction,
            strategy,
        }
    }

    pub fn describe(&self) -> String {
        format!("{}, {} search", self.direction, self.strategy)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Direction(Direction),
    Strategy(Strategy),
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Lookup(String),
    Empty,
    Unknown(String),
}

pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }

    let Some(command) = line.strip_prefix(':') else {
        return Input::Lookup(line.to_string());
    };

    match command.trim().to_ascii_lowercase().as_str() {
        "en" => Input::Command(Command::Direction(Direction::EnToPt)),
        "pt" => Input::Command(Command::Direction(Direction::PtToEn)),
        "vanilla" => Input::Command(Command::Strategy(Strategy::Vanilla)),
        "priority" => Input::Command(Command::Strategy(Strategy::Priority)),
        "status" => Input::Command(Command::Status),
        "help" | "?" => Input::Command(Command::Help),
        "quit" | "q" | "exit" => Input::Command(Command::Quit),
        other => Input::Unknown(other.to_string()),
    }
}

/// Render a lookup outcome the way the terminal shows it
pub fn render(event: &AppEvent) -> Option<String> {
    match event {
        AppEvent::ShowResults { entries, .. } => Some(
            entries
                .iter()
                .enumerate()
                .map(|(i, entry)| format!("{i}. {entry}"))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        AppEvent::NotFound { query } => {
            tracing::debug!("Nothing found for '{query}'");
            Some("Word not found.".to_string())
        }
        _ => None,
    }
}

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    session: Session,
    words: Vec<String>,
) -> anyhow::Result<()> {
    if words.is_empty() {
        interactive(&app_to_ui_rx, &ui_to_app_tx, session).await?;
    } else {
        for word in words {
            match parse_input(&word) {
                Input::Lookup(text) => {
                    let output = lookup(&app_to_ui_rx, &ui_to_app_tx, session, text).await?;
                    println!("{output}");
                }
                _ => eprintln!("Skipping '{word}': not a word"),
            }
        }
    }

    ui_to_app_tx.send(AppEvent::Shutdown).await?;
    Ok(())
}

async fn interactive(
    app_to_ui_rx: &AsyncReceiver<AppEvent>,
    ui_to_app_tx: &AsyncSender<AppEvent>,
    mut session: Session,
) -> anyhow::Result<()> {
    println!("{HELP}");
    println!("[{}]", session.describe());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            return Ok(());
        };

        match parse_input(&line) {
            Input::Empty => println!("Input cannot be empty."),
            Input::Unknown(command) => println!("Unknown command ':{command}' (try :help)"),
            Input::Command(Command::Quit) => return Ok(()),
            Input::Command(Command::Help) => println!("{HELP}"),
            Input::Command(Command::Status) => println!("[{}]", session.describe()),
            Input::Command(Command::Direction(direction)) => {
                session.direction = direction;
                println!("[{}]", session.describe());
            }
            Input::Command(Command::Strategy(strategy)) => {
                session.strategy = strategy;
                println!("[{}]", session.describe());
            }
            Input::Lookup(text) => {
                let output = lookup(app_to_ui_rx, ui_to_app_tx, session, text).await?;
                println!("{output}");
            }
        }
    }
}

/// Send one lookup and wait for its outcome
async fn lookup(
    app_to_ui_rx: &AsyncReceiver<AppEvent>,
    ui_to_app_tx: &AsyncSender<AppEvent>,
    session: Session,
    text: String,
) -> anyhow::Result<String> {
    ui_to_app_tx
        .send(AppEvent::Lookup {
            text,
            direction: session.direction,
            strategy: session.strategy,
        })
        .await?;

    loop {
        let event = app_to_ui_rx.recv().await?;
        if let Some(output) = render(&event) {
            return Ok(output);
        }
        tracing::debug!("Ignoring event: {:?}", event);
    }
}
