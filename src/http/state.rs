use crate::config::Config;
use crate::signaling::SignalingClient;
use crate::standup::StandupStore;
use anyhow::Result;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Proxy client for realtime session negotiation
    pub signaling: Arc<SignalingClient>,

    /// Day-partitioned standup record store
    pub store: Arc<StandupStore>,
}

impl AppState {
    pub fn new(cfg: &Config) -> Result<Self> {
        Ok(Self {
            signaling: Arc::new(SignalingClient::new(&cfg.openai)?),
            store: Arc::new(StandupStore::new(&cfg.storage.data_dir)),
        })
    }
}
