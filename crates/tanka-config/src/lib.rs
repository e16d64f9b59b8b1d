use std::env;

use serde::{Deserialize, Serialize};

use self::remote::RemoteConfig;
use self::storage::StorageConfig;
use self::submission::SubmissionConfig;
use self::validation::ValidationConfig;

pub mod remote;
pub mod storage;
pub mod submission;
pub mod validation;

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub remote: RemoteConfig,
    pub validation: ValidationConfig,
    pub submission: SubmissionConfig,

    /// Replace the embedded phrase bundle with this JSON file
    pub bundle_path: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        let bundle_path = env::var("TANKA_BUNDLE").ok();

        Config {
            storage: StorageConfig::new(),
            remote: RemoteConfig::new(),
            validation: ValidationConfig::new(),
            submission: SubmissionConfig::new(),

            bundle_path,
        }
    }
}
