use std::sync::Arc;

use async_trait::async_trait;
use openword_config::service::ServiceConfig;

use crate::error::FetchError;

/// Source of search-result pages
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET `url` and return the response body
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

#[async_trait]
impl<F: PageFetcher + ?Sized> PageFetcher for Arc<F> {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url).await
    }
}

#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &ServiceConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
