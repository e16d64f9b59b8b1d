use std::sync::Arc;

use tanka_types::PhraseClass;
use tokio::sync::Mutex;

use crate::error::CacheError;
use crate::store::KeyValueStore;

/// User-submitted phrases, one JSON array of strings per class
pub struct LocalCache {
    store: Arc<dyn KeyValueStore>,
    // Serializes read-modify-write in `append`
    write_lock: Mutex<()>,
}

impl LocalCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Storage key holding the phrases of `class`
    pub fn key_for(class: PhraseClass) -> &'static str {
        match class {
            PhraseClass::Five => "userPhrases5",
            PhraseClass::Seven => "userPhrases7",
        }
    }

    /// Cached phrases of `class`, empty when nothing was stored yet
    pub async fn load(&self, class: PhraseClass) -> Result<Vec<String>, CacheError> {
        let key = Self::key_for(class);
        self.read_list(key).await
    }

    /// Append `phrase` to the cached list of `class`
    pub async fn append(&self, class: PhraseClass, phrase: &str) -> Result<(), CacheError> {
        let key = Self::key_for(class);
        let _guard = self.write_lock.lock().await;

        let mut list = self.read_list(key).await?;
        list.push(phrase.to_string());

        let encoded = serde_json::to_string(&list)?;
        self.store.set(key, encoded).await?;

        tracing::debug!("Cached phrase under {} ({} total)", key, list.len());
        Ok(())
    }

    async fn read_list(&self, key: &str) -> Result<Vec<String>, CacheError> {
        match self.store.get(key).await? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| CacheError::CorruptValue {
                key: key.to_string(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }
}
