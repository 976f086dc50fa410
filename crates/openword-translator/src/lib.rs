pub mod accumulator;
pub mod dom;
pub mod error;
pub mod fetch;
pub mod modifier;
pub mod openword;
pub mod priority;
pub mod query;
pub mod search_url;
pub mod vanilla;

#[cfg(test)]
mod tests;

pub use accumulator::{MAX_RESULTS, ResultAccumulator};
pub use error::{FetchError, LookupError};
pub use fetch::{HttpFetcher, PageFetcher};
pub use openword::OpenWordTranslator;
pub use query::{TranslationQuery, TranslationResult};
pub use search_url::{SearchMode, UrlBuilder};

/// Word lookup provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Look up ranked translation candidates for a query
    async fn lookup(&self, query: &TranslationQuery) -> Result<TranslationResult, LookupError>;

    /// Like `lookup`, but every failure collapses into an empty result
    async fn lookup_or_empty(&self, query: &TranslationQuery) -> TranslationResult {
        match self.lookup(query).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("lookup for '{}' failed: {e}", query.text());
                TranslationResult::default()
            }
        }
    }
}
