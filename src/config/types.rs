use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Placeholder that ends up in configs where no real key was ever set.
/// A config carrying this value is treated the same as a missing credential.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_OPENAI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub llm: LlmConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LlmConfig {
    /// Rejects a missing or placeholder credential before any network call
    /// is made. Sending an unauthenticated request and letting the remote
    /// side reject it would only surface the problem later and less clearly.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() || self.api_key == PLACEHOLDER_API_KEY {
            return Err(Error::config(
                "API credential is missing; set OPENAI_API_KEY or llm.api_key in the config file",
            ));
        }
        if self.base_url.is_empty() {
            return Err(Error::config("llm.base_url must not be empty"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_database_path() -> String {
    "fitcoach.db".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
