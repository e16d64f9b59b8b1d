use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tanka_types::{AppEvent, StatusMessage};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod generate_tanka;
pub mod submit_phrase;

use generate_tanka::handle_tanka_generation;
use submit_phrase::handle_phrase_submission;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    {
        let config = state.config.read().await;
        tracing::debug!(
            policy = ?config.validation.policy,
            rate_limit_seconds = config.submission.rate_limit_seconds,
            "event loop starting"
        );
    }

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_to_app_rx.recv() => event?,
        };

        tracing::debug!("Event received: {:?}", std::mem::discriminant(&event));

        if matches!(event, AppEvent::Shutdown) {
            tracing::info!("Shutdown requested from input");
            cancel.cancel();
            break;
        }

        handle_events(state.clone(), &app_to_ui_tx, event).await?;
    }

    Ok(())
}

async fn handle_events(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::SubmitPhrase(submission) => {
            handle_phrase_submission(state, submission, app_to_ui_tx).await?;
        }
        AppEvent::GenerateTanka => {
            handle_tanka_generation(state, app_to_ui_tx).await?;
        }
        AppEvent::Help => {
            let text = help_text(&state).await;
            app_to_ui_tx
                .send(AppEvent::Status(StatusMessage::info(text)))
                .await?;
        }
        AppEvent::Status(status) => {
            app_to_ui_tx.send(AppEvent::Status(status)).await?;
        }
        // Output-only
        AppEvent::ShowTanka(_) => {}
        AppEvent::Shutdown => {}
    }

    Ok(())
}

async fn help_text(state: &AppState) -> String {
    let limit = state.config.read().await.submission.rate_limit_seconds;
    let (five, seven) = state.tanka.counts().await;

    format!(
        "commands:\n  \
         gen                          compose a tanka\n  \
         add <5|7> <phrase> [reading] submit a phrase (reading in hiragana)\n  \
         help                         show this text\n  \
         quit                         leave\n\
         pools: {five} five-mora, {seven} seven-mora phrases; one submission per {limit}s"
    )
}
