use rand::Rng;
use tanka_cache::LocalCache;
use tanka_types::{PhraseClass, PhraseDocument, Tanka};
use tokio::sync::RwLock;

use crate::bundle::PhraseBundle;
use crate::composer;
use crate::error::ComposeError;
use crate::pool::PhraseBook;

/// Phrase pools and submission timestamp shared by every task.
///
/// All mutations go through the write lock, so a remote merge and a local
/// submission never lose each other's phrase.
#[derive(Default)]
pub struct TankaState {
    book: RwLock<PhraseBook>,
}

impl TankaState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pools seeded with the bundled baseline
    pub fn from_bundle(bundle: &PhraseBundle) -> Self {
        let mut book = PhraseBook::default();
        for class in PhraseClass::ALL {
            book.pool_mut(class)
                .extend(bundle.phrases(class).iter().cloned());
        }

        Self {
            book: RwLock::new(book),
        }
    }

    /// Merge previously cached submissions. A class whose cache entry can't be
    /// read is skipped with a warning. Returns how many phrases were new.
    pub async fn load_cached(&self, cache: &LocalCache) -> usize {
        let mut added = 0;

        for class in PhraseClass::ALL {
            match cache.load(class).await {
                Ok(phrases) => {
                    let mut book = self.book.write().await;
                    added += book.pool_mut(class).extend(phrases);
                }
                Err(e) => {
                    tracing::warn!("Ignoring cached class {} phrases: {}", class, e);
                }
            }
        }

        added
    }

    /// Add `text` to the pool of `class` unless present
    pub async fn merge(&self, class: PhraseClass, text: &str) -> bool {
        self.book.write().await.pool_mut(class).insert(text)
    }

    pub async fn merge_document(&self, doc: &PhraseDocument) -> bool {
        self.merge(doc.class, &doc.text).await
    }

    pub async fn contains(&self, class: PhraseClass, text: &str) -> bool {
        self.book.read().await.pool(class).contains(text)
    }

    /// (class 5, class 7) pool sizes
    pub async fn counts(&self) -> (usize, usize) {
        self.book.read().await.counts()
    }

    pub async fn phrases(&self, class: PhraseClass) -> Vec<String> {
        self.book.read().await.pool(class).as_slice().to_vec()
    }

    pub async fn last_accepted_at(&self) -> Option<u64> {
        self.book.read().await.last_accepted_at
    }

    pub async fn compose(&self) -> Result<Tanka, ComposeError> {
        let book = self.book.read().await;
        composer::compose(&book)
    }

    pub async fn compose_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Tanka, ComposeError> {
        let book = self.book.read().await;
        composer::compose_with(&book, rng)
    }

    pub(crate) fn book(&self) -> &RwLock<PhraseBook> {
        &self.book
    }
}
