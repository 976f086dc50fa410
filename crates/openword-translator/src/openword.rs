use async_trait::async_trait;
use openword_config::Config;
use openword_types::{PriorityPolicy, Strategy};

use crate::error::{FetchError, LookupError};
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::priority::priority_search;
use crate::query::{TranslationQuery, TranslationResult};
use crate::search_url::UrlBuilder;
use crate::vanilla::vanilla_search;
use crate::Translator;

/// OpenWordNet-PT backed lookup engine
#[derive(Clone)]
pub struct OpenWordTranslator<F = HttpFetcher> {
    fetcher: F,
    urls: UrlBuilder,
    policy: PriorityPolicy,
}

impl OpenWordTranslator<HttpFetcher> {
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let fetcher = HttpFetcher::new(&config.service)?;
        Ok(Self::with_fetcher(
            fetcher,
            config.service.base_url.clone(),
            config.priority_policy,
        ))
    }
}

impl<F: PageFetcher> OpenWordTranslator<F> {
    pub fn with_fetcher(fetcher: F, base_url: impl Into<String>, policy: PriorityPolicy) -> Self {
        Self {
            fetcher,
            urls: UrlBuilder::new(base_url),
            policy,
        }
    }
}

#[async_trait]
impl<F: PageFetcher> Translator for OpenWordTranslator<F> {
    async fn lookup(&self, query: &TranslationQuery) -> Result<TranslationResult, LookupError> {
        tracing::info!(
            "Looking up '{}' ({}, {} search)",
            query.text(),
            query.direction(),
            query.strategy()
        );

        let result = match query.strategy() {
            Strategy::Vanilla => vanilla_search(&self.fetcher, &self.urls, query).await?,
            Strategy::Priority => {
                priority_search(&self.fetcher, &self.urls, query, self.policy).await?
            }
        };

        tracing::info!("'{}': {} translations", query.text(), result.len());
        Ok(result)
    }
}
