use std::env;

use openword_types::PriorityPolicy;
use serde::{Deserialize, Serialize};

use self::service::ServiceConfig;

pub mod service;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    /// Stopping rule for priority search
    pub priority_policy: PriorityPolicy,
}

impl Config {
    pub fn new() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source, falling back to defaults for
    /// anything missing or unparsable
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let priority_policy = var("OPENWORD_PRIORITY_POLICY")
            .and_then(|v| match v.parse() {
                Ok(policy) => Some(policy),
                Err(e) => {
                    tracing::warn!("ignoring OPENWORD_PRIORITY_POLICY: {e}");
                    None
                }
            })
            .unwrap_or_default();

        Config {
            service: ServiceConfig::from_vars(&var),
            priority_policy,
        }
    }
}
