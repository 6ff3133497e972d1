use super::state::AppState;
use crate::error::Result;
use async_trait::async_trait;

/// Holds the current application state between actions.
#[async_trait]
pub trait StateStore: Send + Sync {
    async fn load(&self) -> Result<AppState>;
    async fn store(&self, state: AppState) -> Result<()>;
}

pub type StateStoreBox = Box<dyn StateStore>;
