use openword_types::{Direction, Strategy};
use unicode_normalization::UnicodeNormalization;

use crate::error::LookupError;

/// One lookup request, fixed before the engine runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationQuery {
    text: String,
    direction: Direction,
    strategy: Strategy,
}

impl TranslationQuery {
    /// Trims and NFC-normalizes `text`; blank input is rejected
    pub fn new(
        text: &str,
        direction: Direction,
        strategy: Strategy,
    ) -> Result<Self, LookupError> {
        let text: String = text.trim().nfc().collect();
        if text.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        Ok(Self {
            text,
            direction,
            strategy,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

/// Ordered translation candidates, most relevant first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationResult {
    entries: Vec<String>,
}

impl TranslationResult {
    pub(crate) fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}
