use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Translation direction between the two supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    EnToPt,
    PtToEn,
}

impl Direction {
    /// ISO 639-1 codes of (source, target)
    pub fn language_pair(&self) -> (&'static str, &'static str) {
        match self {
            Direction::EnToPt => ("en", "pt"),
            Direction::PtToEn => ("pt", "en"),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (from, to) = self.language_pair();
        write!(f, "{from} -> {to}")
    }
}

/// How many pages a lookup may consult
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Single plain term query
    #[default]
    Vanilla,
    /// Concept-scoped queries first, then word-count hinted fallbacks
    Priority,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Vanilla => f.write_str("vanilla"),
            Strategy::Priority => f.write_str("priority"),
        }
    }
}

/// When priority search stops requesting further pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriorityPolicy {
    /// Stop after the first page that contributes at least one entry
    #[default]
    FirstMatch,
    /// Keep going until the result list is full or every page was tried
    FillToCap,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown priority policy '{0}'")]
pub struct UnknownPolicy(pub String);

impl FromStr for PriorityPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-match" | "first_match" => Ok(PriorityPolicy::FirstMatch),
            "fill-to-cap" | "fill_to_cap" => Ok(PriorityPolicy::FillToCap),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Caller asks for a lookup
    Lookup {
        text: String,
        direction: Direction,
        strategy: Strategy,
    },
    /// Ordered translations for `query`
    ShowResults {
        query: String,
        entries: Vec<String>,
    },
    /// Nothing usable came back for `query`
    NotFound { query: String },
    Shutdown,
}
