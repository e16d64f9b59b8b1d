use async_trait::async_trait;
use reqwest::Url;
use tanka_types::PhraseDocument;
use tokio_util::sync::CancellationToken;

use crate::subscription::Subscription;
use crate::ws::start_change_listener;
use crate::{RemoteError, RemoteStore};

/// Document store reached over HTTP for writes and a WebSocket for changes
#[derive(Clone)]
pub struct HttpRemoteStore {
    client: reqwest::Client,
    api_url: String,
    ws_url: String,
    collection: String,
}

impl HttpRemoteStore {
    pub fn new(api_url: String, ws_url: String, collection: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            ws_url,
            collection,
        }
    }

    /// `{api_url}/collections/{collection}/documents/{text}`, text percent-encoded
    pub fn document_url(&self, text: &str) -> Result<Url, RemoteError> {
        if self.api_url.is_empty() {
            return Err(RemoteError::NotConfigured("api_url"));
        }

        let mut url =
            Url::parse(&self.api_url).map_err(|e| RemoteError::InvalidUrl(e.to_string()))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| RemoteError::InvalidUrl(self.api_url.clone()))?;
            segments
                .pop_if_empty()
                .extend(["collections", self.collection.as_str(), "documents", text]);
        }

        Ok(url)
    }
}

#[async_trait]
impl RemoteStore for HttpRemoteStore {
    async fn put(&self, doc: &PhraseDocument) -> Result<(), RemoteError> {
        let url = self.document_url(&doc.text)?;

        let response = self.client.put(url).json(doc).send().await?;

        if response.status() == 429 {
            return Err(RemoteError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(RemoteError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        tracing::debug!("Stored '{}' in {}", doc.text, self.collection);
        Ok(())
    }

    async fn subscribe(&self) -> Result<Subscription, RemoteError> {
        if self.ws_url.is_empty() {
            return Err(RemoteError::NotConfigured("ws_url"));
        }

        let (tx, rx) = kanal::bounded_async(256);
        let cancel = CancellationToken::new();

        start_change_listener(&self.ws_url, tx, cancel.clone()).await?;

        Ok(Subscription::new(rx, cancel))
    }

    fn name(&self) -> &str {
        "http"
    }
}
