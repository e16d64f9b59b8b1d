use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_data_dir() -> String {
    ".tanka".to_string()
}

fn default_cache_file() -> String {
    "local_storage.json".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the local cache and profiles
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// File name of the local key/value cache inside `data_dir`
    #[serde(default = "default_cache_file")]
    pub cache_file: String,
}

impl StorageConfig {
    pub fn new() -> Self {
        let data_dir = env::var("TANKA_DATA_DIR").unwrap_or_else(|_| default_data_dir());

        Self {
            data_dir,
            cache_file: default_cache_file(),
        }
    }

    pub fn cache_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.cache_file)
    }

    pub fn profiles_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("profiles")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            cache_file: default_cache_file(),
        }
    }
}
