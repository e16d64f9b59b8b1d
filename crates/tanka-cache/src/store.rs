use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use crate::error::CacheError;

/// String key/value persistence, the shape of browser local storage
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Value under `key`, `None` when never written
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Replace the value under `key`
    async fn set(&self, key: &str, value: String) -> Result<(), CacheError>;
}

/// Volatile store, lost with the process
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CacheError> {
        self.entries.lock().await.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store persisted as one JSON object (key -> string) on disk.
///
/// The whole file is rewritten on every `set`, through a temporary file
/// renamed into place.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, starting empty if the file does not exist
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, CacheError> {
        let path = path.as_ref().to_path_buf();

        let entries = match fs::read_to_string(&path).await {
            Ok(data) if data.trim().is_empty() => BTreeMap::new(),
            Ok(data) => {
                serde_json::from_str(&data).map_err(|source| CacheError::CorruptFile {
                    path: path.display().to_string(),
                    source,
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No cache file at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            "Opened local cache {} ({} keys)",
            path.display(),
            entries.len()
        );

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CacheError> {
        let mut entries = self.entries.lock().await;

        let mut next = entries.clone();
        next.insert(key.to_string(), value);
        let data = serde_json::to_string_pretty(&next)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data).await?;
        fs::rename(&tmp, &self.path).await?;

        *entries = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("local_storage.json");

        let store = FileStore::open(&path).await.unwrap();
        assert_eq!(store.get("userPhrases5").await.unwrap(), None);
        store
            .set("userPhrases5", r#"["ふるいけや"]"#.to_string())
            .await
            .unwrap();

        let reopened = FileStore::open(&path).await.unwrap();
        assert_eq!(
            reopened.get("userPhrases5").await.unwrap().as_deref(),
            Some(r#"["ふるいけや"]"#)
        );
    }

    #[tokio::test]
    async fn test_file_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local_storage.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = FileStore::open(&path).await;
        assert!(matches!(result, Err(CacheError::CorruptFile { .. })));
    }

    #[tokio::test]
    async fn test_memory_store_overwrites() {
        let store = MemoryStore::new();
        store.set("k", "a".to_string()).await.unwrap();
        store.set("k", "b".to_string()).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("b"));
    }
}
