//! Shared application state handed to every handler.

use std::sync::Arc;

use salesq_core::config::Config;
use salesq_core::SalesContext;

use crate::session::SessionRegistry;

/// Shared application state for the HTTP server
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    sessions: SessionRegistry,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let sessions = SessionRegistry::new(config.server.max_sessions);
        Self {
            inner: Arc::new(AppStateInner { config, sessions }),
        }
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.inner.sessions
    }

    /// A newly generated context, independent of every other.
    pub fn fresh_context(&self) -> SalesContext {
        SalesContext::generate(&self.inner.config)
    }
}
