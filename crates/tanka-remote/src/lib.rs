mod http;
mod memory;
mod subscription;
pub mod ws;

pub use http::HttpRemoteStore;
pub use memory::MemoryRemoteStore;
pub use subscription::Subscription;
pub use ws::{ChangeEvent, ChangeKind};

use tanka_types::PhraseDocument;

/// Shared phrase collection
#[async_trait::async_trait]
pub trait RemoteStore: Send + Sync {
    /// Store `doc` under its text, replacing any document with the same text
    async fn put(&self, doc: &PhraseDocument) -> Result<(), RemoteError>;

    /// Stream of added documents: everything already stored, then new additions
    async fn subscribe(&self) -> Result<Subscription, RemoteError>;

    /// Provider name for logs
    fn name(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("WebSocket error: {0}")]
    WebSocketError(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Remote store not configured: {0} is empty")]
    NotConfigured(&'static str),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Remote store closed")]
    Closed,
}
