use std::sync::Arc;

use kanal::AsyncSender;
use tanka_types::{AppEvent, StatusMessage};

use crate::state::AppState;

pub async fn handle_tanka_generation(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let event = match state.tanka.compose().await {
        Ok(tanka) => AppEvent::ShowTanka(tanka),
        Err(e) => {
            tracing::warn!("Cannot compose: {}", e);
            AppEvent::Status(StatusMessage::error(e.to_string()))
        }
    };

    app_to_ui_tx.send(event).await?;
    Ok(())
}
