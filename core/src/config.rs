//! Client configuration.
//!
//! Defaults point at the public jsonplaceholder API with owner 1. Both values
//! can be overridden from the environment (`TODO_API_URL`, `TODO_OWNER_ID`).

use crate::error::ConfigError;
use crate::types::OwnerId;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_OWNER: OwnerId = OwnerId(1);

const BASE_URL_VAR: &str = "TODO_API_URL";
const OWNER_VAR: &str = "TODO_OWNER_ID";

/// Where the remote collection lives and who new records belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub owner: OwnerId,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            owner: DEFAULT_OWNER,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = lookup(BASE_URL_VAR) {
            let url = url.trim();
            if url.is_empty() {
                return Err(ConfigError::EmptyBaseUrl { var: BASE_URL_VAR });
            }
            config.base_url = url.to_string();
        }
        if let Some(raw) = lookup(OWNER_VAR) {
            let owner = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidOwner {
                var: OWNER_VAR,
                value: raw.clone(),
            })?;
            config.owner = OwnerId(owner);
        }
        Ok(config)
    }
}
