use kanal::AsyncReceiver;
use tanka_types::PhraseDocument;
use tokio_util::sync::CancellationToken;

/// Cancellable stream of documents added to the remote collection.
///
/// Dropping the subscription cancels it.
pub struct Subscription {
    rx: AsyncReceiver<PhraseDocument>,
    cancel: CancellationToken,
}

impl Subscription {
    pub fn new(rx: AsyncReceiver<PhraseDocument>, cancel: CancellationToken) -> Self {
        Self { rx, cancel }
    }

    /// Next added document, `None` once cancelled or the source has closed
    pub async fn next(&mut self) -> Option<PhraseDocument> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => None,
            doc = self.rx.recv() => doc.ok(),
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Token that cancels this subscription when fired
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
