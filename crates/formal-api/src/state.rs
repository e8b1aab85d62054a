use formal_persist::PersistClient;
use std::sync::Arc;

use crate::config::Config;

/// Shared application state passed to all handlers
///
/// The persist client is the only long-lived resource; it is safe to share
/// across tasks because the driver pools connections internally.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub persist: Arc<PersistClient>,
}

impl AppState {
    pub fn new(config: Config, persist: PersistClient) -> Self {
        Self {
            config: Arc::new(config),
            persist: Arc::new(persist),
        }
    }
}
