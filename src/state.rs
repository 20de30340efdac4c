use crate::config::AppConfig;
use crate::store::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        Ok(Self {
            store: Arc::new(Store::new()),
            config,
        })
    }

    /// Fresh state with its own store, for tests that must not share data.
    pub fn fake() -> Self {
        Self {
            store: Arc::new(Store::new()),
            config: Arc::new(AppConfig {
                host: "127.0.0.1".into(),
                port: 0,
            }),
        }
    }
}
