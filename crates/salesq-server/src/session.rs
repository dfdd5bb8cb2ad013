//! Session registry — one [`SalesContext`] per MCP session.
//!
//! Contexts are immutable once registered; the lock only guards the map.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use salesq_core::SalesContext;

use crate::error::{Result, ServerError};

#[derive(Debug)]
pub struct SessionRegistry {
    contexts: RwLock<HashMap<String, Arc<SalesContext>>>,
    max_sessions: usize,
}

impl SessionRegistry {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            contexts: RwLock::new(HashMap::new()),
            max_sessions,
        }
    }

    /// Register `context` under a new session id.
    pub async fn open(&self, context: SalesContext) -> Result<String> {
        let mut contexts = self.contexts.write().await;
        if contexts.len() >= self.max_sessions {
            return Err(ServerError::SessionLimit {
                max: self.max_sessions,
            });
        }
        let id = uuid::Uuid::new_v4().simple().to_string();
        contexts.insert(id.clone(), Arc::new(context));
        Ok(id)
    }

    pub async fn get(&self, id: &str) -> Option<Arc<SalesContext>> {
        self.contexts.read().await.get(id).cloned()
    }

    /// Returns `false` if no such session existed.
    pub async fn close(&self, id: &str) -> bool {
        self.contexts.write().await.remove(id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.contexts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
