use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://wnpt.sl.res.ibm.com/wn/search".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("openword/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Where and how the lexical search service is reached
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Search endpoint, without query string
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl ServiceConfig {
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = var("OPENWORD_BASE_URL")
            .map(|v| v.trim().trim_end_matches('?').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_base_url);

        let timeout_seconds = var("OPENWORD_TIMEOUT_SECONDS")
            .and_then(|v| v.trim().parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or_else(default_timeout_seconds); // 10 seconds default

        let user_agent = var("OPENWORD_USER_AGENT")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_user_agent);

        Self {
            base_url,
            timeout_seconds,
            user_agent,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
