use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_collection() -> String {
    "phrases".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct RemoteConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Base URL of the document store HTTP API; writes are skipped when empty
    #[serde(default)]
    pub api_url: String,
    /// WebSocket endpoint streaming collection changes; listening is skipped when empty
    #[serde(default)]
    pub ws_url: String,
    #[serde(default = "default_collection")]
    pub collection: String,
}

impl RemoteConfig {
    pub fn new() -> Self {
        let api_url = env::var("TANKA_REMOTE_API_URL").unwrap_or_default();
        let ws_url = env::var("TANKA_REMOTE_WS_URL").unwrap_or_default();
        let collection =
            env::var("TANKA_REMOTE_COLLECTION").unwrap_or_else(|_| default_collection());

        Self {
            enabled: default_enabled(),
            api_url,
            ws_url,
            collection,
        }
    }

    /// Remote store is configured and switched on
    pub fn is_active(&self) -> bool {
        self.enabled && (!self.api_url.is_empty() || !self.ws_url.is_empty())
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_url: String::new(),
            ws_url: String::new(),
            collection: default_collection(),
        }
    }
}
