//! Shared application state for the Tally server.

use std::env;
use std::sync::Arc;

use tokio::sync::Mutex;

use tally_core::store::CounterStore;

use crate::config::ServerConfig;
use crate::storage::FileStore;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    store: Arc<dyn CounterStore>,
    increment_gate: Option<Mutex<()>>,
}

impl AppState {
    /// Build application state with the file-backed store from the config.
    pub fn new(cfg: ServerConfig) -> Self {
        let store = Arc::new(FileStore::new(&cfg.storage.counter_path));
        Self::with_store(cfg, store)
    }

    /// Build application state around an injected store (tests, alternate
    /// backends).
    pub fn with_store(cfg: ServerConfig, store: Arc<dyn CounterStore>) -> Self {
        let increment_gate = cfg.storage.serialize_increments.then(|| Mutex::new(()));

        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                store,
                increment_gate,
            }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &dyn CounterStore {
        self.inner.store.as_ref()
    }

    /// Present only when `storage.serialize_increments` is on.
    pub fn increment_gate(&self) -> Option<&Mutex<()>> {
        self.inner.increment_gate.as_ref()
    }

    /// Host identity, read from the environment on every call. Empty when
    /// unset.
    pub fn hostname(&self) -> String {
        env::var(&self.inner.cfg.identity.hostname_env).unwrap_or_default()
    }
}
