use crate::query::TranslationResult;

/// Hard cap on the number of candidates a lookup returns
pub const MAX_RESULTS: usize = 5;

/// Collects candidates in first-seen order up to `MAX_RESULTS`
#[derive(Debug, Default)]
pub struct ResultAccumulator {
    entries: Vec<String>,
}

impl ResultAccumulator {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(MAX_RESULTS),
        }
    }

    /// Append an entry. Returns `true` once the cap is reached; entries
    /// offered after that are dropped.
    pub fn push(&mut self, entry: impl Into<String>) -> bool {
        if !self.is_full() {
            self.entries.push(entry.into());
        }
        self.is_full()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_RESULTS
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn finish(self) -> TranslationResult {
        TranslationResult::from_entries(self.entries)
    }
}
