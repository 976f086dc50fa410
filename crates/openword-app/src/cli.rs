use clap::Parser;
use openword_types::{Direction, Strategy};

/// English <-> Portuguese word lookup backed by OpenWordNet-PT
#[derive(Parser, Debug)]
#[command(name = "openword", version)]
pub struct Args {
    /// Translate from Portuguese to English (default is English to Portuguese)
    #[arg(long)]
    pub pt_to_en: bool,

    /// Use priority search: concept filters first, then word-count hints
    #[arg(long)]
    pub priority: bool,

    /// Write logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Words to look up. Without any, an interactive session starts.
    pub words: Vec<String>,
}

impl Args {
    pub fn direction(&self) -> Direction {
        if self.pt_to_en {
            Direction::PtToEn
        } else {
            Direction::EnToPt
        }
    }

    pub fn strategy(&self) -> Strategy {
        if self.priority {
            Strategy::Priority
        } else {
            Strategy::Vanilla
        }
    }
}
