use std::collections::HashMap;

use async_trait::async_trait;
use kanal::AsyncSender;
use tanka_types::PhraseDocument;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::subscription::Subscription;
use crate::{RemoteError, RemoteStore};

#[derive(Default)]
struct Collection {
    docs: Vec<PhraseDocument>,
    index: HashMap<String, usize>,
    subscribers: Vec<AsyncSender<PhraseDocument>>,
    closed: bool,
}

/// In-process collection with the same add/overwrite semantics as the
/// shared store. Several clients can hold clones of one `Arc` to converge.
#[derive(Default)]
pub struct MemoryRemoteStore {
    inner: Mutex<Collection>,
}

impl MemoryRemoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of stored documents in insertion order
    pub async fn documents(&self) -> Vec<PhraseDocument> {
        self.inner.lock().await.docs.clone()
    }

    /// End every open subscription and refuse new ones
    pub async fn close(&self) {
        let mut inner = self.inner.lock().await;
        inner.closed = true;
        inner.subscribers.clear();
    }
}

#[async_trait]
impl RemoteStore for MemoryRemoteStore {
    async fn put(&self, doc: &PhraseDocument) -> Result<(), RemoteError> {
        let mut inner = self.inner.lock().await;
        if inner.closed {
            return Err(RemoteError::Closed);
        }

        if let Some(&pos) = inner.index.get(&doc.text) {
            // Overwrite is a modification, subscribers only see additions
            inner.docs[pos] = doc.clone();
            return Ok(());
        }

        let pos = inner.docs.len();
        inner.index.insert(doc.text.clone(), pos);
        inner.docs.push(doc.clone());
        inner
            .subscribers
            .retain(|tx| matches!(tx.try_send(doc.clone()), Ok(true)));

        Ok(())
    }

    async fn subscribe(&self) -> Result<Subscription, RemoteError> {
        let mut inner = self.inner.lock().await;
        if inner.closed {
            return Err(RemoteError::Closed);
        }

        let (tx, rx) = kanal::unbounded_async();
        for doc in &inner.docs {
            // Unbounded and the receiver is alive, cannot fail
            let _ = tx.try_send(doc.clone());
        }
        inner.subscribers.push(tx);

        Ok(Subscription::new(rx, CancellationToken::new()))
    }

    fn name(&self) -> &str {
        "memory"
    }
}
