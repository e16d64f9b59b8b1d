use std::sync::Arc;
use std::time::Duration;

use tanka_cache::LocalCache;
use tanka_remote::RemoteStore;
use tanka_types::{PhraseClass, PhraseDocument, PhraseSubmission};

use crate::clock::Clock;
use crate::error::Rejection;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};
use crate::state::TankaState;
use crate::validate::Validator;

pub const SHARED_MESSAGE: &str = "追加しました！（共有されます）";
pub const LOCAL_ONLY_MESSAGE: &str = "追加しました！（この端末のみ）";

/// A phrase that passed every gate and is now in the pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub class: PhraseClass,
    pub text: String,
    pub reading: Option<String>,
    pub created_at: u64,
    /// Written to the local cache
    pub cached: bool,
    /// Written to the remote store
    pub shared: bool,
}

impl Accepted {
    pub fn message(&self) -> &'static str {
        if self.shared {
            SHARED_MESSAGE
        } else {
            LOCAL_ONLY_MESSAGE
        }
    }
}

/// Runs a submission through validation, duplicate and rate-limit gates,
/// then records it in memory, the local cache and the remote store.
pub struct Submitter {
    state: Arc<TankaState>,
    validator: Validator,
    cache: Arc<LocalCache>,
    remote: Option<Arc<dyn RemoteStore>>,
    clock: Arc<dyn Clock>,
    rate_limit: Duration,
}

impl Submitter {
    pub fn new(
        state: Arc<TankaState>,
        validator: Validator,
        cache: Arc<LocalCache>,
        remote: Option<Arc<dyn RemoteStore>>,
        clock: Arc<dyn Clock>,
        rate_limit: Duration,
    ) -> Self {
        Self {
            state,
            validator,
            cache,
            remote,
            clock,
            rate_limit,
        }
    }

    pub async fn submit(&self, submission: PhraseSubmission) -> Result<Accepted, Rejection> {
        let class = submission.class;
        // Stored and shared as typed; width folding only applies to validation
        let text = submission.text.trim().to_string();
        let normalized = DefaultPreprocessor.process(&text);
        let reading = submission
            .reading
            .as_deref()
            .map(|r| DefaultPreprocessor.process(r));

        let reading = self
            .validator
            .check(&normalized, reading.as_deref(), class)
            .map_err(|reason| {
                tracing::debug!("Rejected '{}' for class {}: {}", text, class, reason);
                Rejection::Invalid {
                    policy: self.validator.policy(),
                    reason,
                }
            })?;

        // Duplicate check, rate limit and insert happen under one write lock
        let created_at = {
            let mut book = self.state.book().write().await;

            if book.pool(class).contains(&text) {
                return Err(Rejection::Duplicate(class));
            }

            let now = self.clock.now_millis();
            let limit_ms = self.rate_limit.as_millis() as u64;
            if let Some(last) = book.last_accepted_at {
                let elapsed = now.saturating_sub(last);
                if elapsed < limit_ms {
                    return Err(Rejection::RateLimited {
                        limit_seconds: self.rate_limit.as_secs(),
                        retry_after_ms: limit_ms - elapsed,
                    });
                }
            }

            book.last_accepted_at = Some(now);
            book.pool_mut(class).insert(text.clone());
            now
        };

        let cached = match self.cache.append(class, &text).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to cache phrase '{}': {}", text, e);
                false
            }
        };

        let doc = PhraseDocument {
            class,
            text: text.clone(),
            reading: reading.clone(),
            created_at,
        };

        let shared = match &self.remote {
            Some(remote) => match remote.put(&doc).await {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("Failed to share phrase '{}' via {}: {}", text, remote.name(), e);
                    false
                }
            },
            None => false,
        };

        tracing::info!(
            class = %class,
            text = %text,
            cached,
            shared,
            "phrase accepted"
        );

        Ok(Accepted {
            class,
            text,
            reading,
            created_at,
            cached,
            shared,
        })
    }
}
