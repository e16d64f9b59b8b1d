use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_rate_limit_seconds() -> u64 {
    30
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Minimum gap between two accepted submissions
    #[serde(default = "default_rate_limit_seconds")]
    pub rate_limit_seconds: u64,
}

impl SubmissionConfig {
    pub fn new() -> Self {
        let rate_limit_seconds = env::var("TANKA_RATE_LIMIT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_rate_limit_seconds);

        Self { rate_limit_seconds }
    }

    pub fn rate_limit(&self) -> Duration {
        Duration::from_secs(self.rate_limit_seconds)
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            rate_limit_seconds: default_rate_limit_seconds(),
        }
    }
}
