use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tanka_cache::{FileStore, KeyValueStore, LocalCache, MemoryStore};
use tanka_config::Config;
use tanka_config::validation::ValidationPolicy;
use tanka_core::{PhraseBundle, ReadingProvider, Submitter, SystemClock, TankaState, Validator};
use tanka_lang_japanese::JapaneseReader;
use tanka_remote::{HttpRemoteStore, RemoteStore};

use crate::state::AppState;

/// Bundled phrases, then the local cache; the remote listener starts later
pub async fn bootstrap(config: Config) -> anyhow::Result<AppState> {
    let bundle = load_bundle(&config)?;
    let tanka = Arc::new(TankaState::from_bundle(&bundle));

    let store = open_store(&config).await;
    let cache = Arc::new(LocalCache::new(store));
    let restored = tanka.load_cached(&cache).await;

    let remote = build_remote(&config);
    let reader = build_reader(&config);
    let validator = Validator::new(config.validation.policy, reader);
    if config.validation.policy == ValidationPolicy::Mora && !validator.has_reader() {
        tracing::warn!("Phrases must be submitted with a hiragana reading");
    }

    let submitter = Submitter::new(
        tanka.clone(),
        validator,
        cache,
        remote.clone(),
        Arc::new(SystemClock),
        config.submission.rate_limit(),
    );

    let (five, seven) = tanka.counts().await;
    tracing::info!(
        five,
        seven,
        restored,
        "initial phrase data loaded"
    );

    Ok(AppState::new(config, tanka, submitter, remote))
}

fn load_bundle(config: &Config) -> anyhow::Result<PhraseBundle> {
    match &config.bundle_path {
        Some(path) => PhraseBundle::load_from_file(Path::new(path))
            .with_context(|| format!("failed to load phrase bundle {path}")),
        None => PhraseBundle::load_embedded().context("embedded phrase bundle is invalid"),
    }
}

/// File-backed cache, or memory if the file can't be opened so it is never clobbered
async fn open_store(config: &Config) -> Arc<dyn KeyValueStore> {
    let path = config.storage.cache_path();

    match FileStore::open(&path).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::warn!(
                "Local cache {} unusable, submissions stay in memory: {}",
                path.display(),
                e
            );
            Arc::new(MemoryStore::new())
        }
    }
}

fn build_remote(config: &Config) -> Option<Arc<dyn RemoteStore>> {
    if !config.remote.is_active() {
        tracing::info!("Remote store disabled, phrases stay on this machine");
        return None;
    }

    Some(Arc::new(HttpRemoteStore::new(
        config.remote.api_url.clone(),
        config.remote.ws_url.clone(),
        config.remote.collection.clone(),
    )))
}

fn build_reader(config: &Config) -> Option<Arc<dyn ReadingProvider>> {
    if config.validation.policy != ValidationPolicy::Mora {
        return None;
    }

    let additional = config.validation.lexicon_path.as_deref().map(Path::new);
    match JapaneseReader::init(additional) {
        Ok(reader) => Some(Arc::new(reader)),
        Err(e) => {
            tracing::warn!(
                "Reading derivation unavailable, phrases without a reading will be rejected: {}",
                e
            );
            None
        }
    }
}
