#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Corrupt cache file {path}: {source}")]
    CorruptFile {
        path: String,
        source: serde_json::Error,
    },

    #[error("Corrupt value under key {key}: {source}")]
    CorruptValue {
        key: String,
        source: serde_json::Error,
    },

    #[error("Serialize error: {0}")]
    SerializeError(#[from] serde_json::Error),
}
