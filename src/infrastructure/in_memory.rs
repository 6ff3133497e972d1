use crate::domain::ports::StateStore;
use crate::domain::state::AppState;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory holder for the application state.
///
/// Uses `Arc<RwLock<AppState>>` so clones share the same state. Nothing
/// outlives the process.
#[derive(Default, Clone)]
pub struct InMemoryStateStore {
    state: Arc<RwLock<AppState>>,
}

impl InMemoryStateStore {
    /// Creates a store holding the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `state`.
    pub fn with_state(state: AppState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn load(&self) -> Result<AppState> {
        let state = self.state.read().await;
        Ok(state.clone())
    }

    async fn store(&self, state: AppState) -> Result<()> {
        let mut current = self.state.write().await;
        *current = state;
        Ok(())
    }
}
