//! Reasoning backend endpoint and model selection.

use std::collections::HashMap;
use std::time::Duration;

/// Default vLLM endpoint serving Cosmos Reason 2.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";
/// Default model identifier as served by vLLM.
pub const DEFAULT_MODEL: &str = "nvidia/cosmos-reason2-8b";
/// Bound on a single verification round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings for the Cosmos Reason backend.
///
/// Read once at construction; verifier calls are otherwise stateless.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CosmosConfig {
    /// Base URL of the OpenAI-compatible endpoint, no trailing slash.
    pub endpoint: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for CosmosConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CosmosConfig {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: normalize_endpoint(&endpoint.into()),
            model: model.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read `COSMOS_NIM_URL` and `COSMOS_MODEL` from the process environment,
    /// falling back to the defaults for anything unset or blank.
    pub fn from_env() -> Self {
        let mut envs = HashMap::new();
        for key in ["COSMOS_NIM_URL", "COSMOS_MODEL"] {
            if let Ok(value) = std::env::var(key) {
                envs.insert(key.to_string(), value);
            }
        }
        Self::from_env_map(&envs)
    }

    fn from_env_map(envs: &HashMap<String, String>) -> Self {
        let endpoint = envs
            .get("COSMOS_NIM_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let model = envs
            .get("COSMOS_MODEL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Self {
            endpoint: normalize_endpoint(&endpoint),
            model,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the chat completions route.
    pub fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.endpoint)
    }
}

fn normalize_endpoint(endpoint: &str) -> String {
    endpoint.trim_end_matches('/').to_string()
}
