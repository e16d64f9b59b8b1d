use std::sync::Arc;

use tanka_config::Config;
use tanka_core::{Submitter, TankaState};
use tanka_remote::RemoteStore;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub tanka: Arc<TankaState>,
    pub submitter: Arc<Submitter>,
    /// Shared collection, absent when no remote endpoint is configured
    pub remote: Option<Arc<dyn RemoteStore>>,
}

impl AppState {
    pub fn new(
        config: Config,
        tanka: Arc<TankaState>,
        submitter: Submitter,
        remote: Option<Arc<dyn RemoteStore>>,
    ) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            tanka,
            submitter: Arc::new(submitter),
            remote,
        }
    }
}
