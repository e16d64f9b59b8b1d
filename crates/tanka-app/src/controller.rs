use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tanka_core::sync::run_listener;
use tanka_types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::watch_stdin;
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(64),
            ui_to_app: kanal::bounded_async(64),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.clone(),
        ));

        // Output
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.cancel_token.child_token(),
        ));

        // Remote listener
        if let Some(remote) = self.state.remote.clone() {
            let tanka = self.state.tanka.clone();
            let cancel = self.cancel_token.child_token();
            tasks.spawn(async move {
                let subscription = match remote.subscribe().await {
                    Ok(subscription) => subscription,
                    Err(e) => {
                        tracing::warn!("Remote listener unavailable via {}: {}", remote.name(), e);
                        return Ok(());
                    }
                };

                tracing::info!("Remote listener started via {}", remote.name());

                // Dropping the subscription cancels it
                tokio::select! {
                    _ = run_listener(tanka, subscription) => {}
                    _ = cancel.cancelled() => {}
                }
                Ok(())
            });
        }

        // Stdin runs on its own thread so a pending read never holds up shutdown
        watch_stdin(self.channels.ui_to_app.0.clone());

        tasks
    }

    /// Resolves once any task has ended the session
    pub async fn cancelled(&self) {
        self.cancel_token.cancelled().await;
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
