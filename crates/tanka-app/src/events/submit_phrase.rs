use std::sync::Arc;

use kanal::AsyncSender;
use tanka_types::{AppEvent, PhraseSubmission, StatusMessage};

use crate::state::AppState;

pub async fn handle_phrase_submission(
    state: Arc<AppState>,
    submission: PhraseSubmission,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let class = submission.class;

    let status = match state.submitter.submit(submission).await {
        Ok(accepted) => StatusMessage::success(accepted.message()),
        Err(rejection) => {
            tracing::debug!(%class, "submission rejected: {:?}", rejection);
            StatusMessage::warning(rejection.to_string())
        }
    };

    app_to_ui_tx.send(AppEvent::Status(status)).await?;
    Ok(())
}
