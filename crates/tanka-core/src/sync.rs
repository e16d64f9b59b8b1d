use std::sync::Arc;

use tanka_remote::Subscription;

use crate::state::TankaState;

/// Merge every document the subscription yields into the pools.
///
/// Returns the number of phrases that were new once the subscription is
/// cancelled or its source closes.
pub async fn run_listener(state: Arc<TankaState>, mut subscription: Subscription) -> usize {
    let mut merged = 0;

    while let Some(doc) = subscription.next().await {
        if state.merge_document(&doc).await {
            merged += 1;
            tracing::debug!("Merged remote phrase '{}' into class {}", doc.text, doc.class);
        }
    }

    tracing::info!("Remote listener stopped, {} phrases merged", merged);
    merged
}
