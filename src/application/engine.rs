use crate::domain::ports::StateStoreBox;
use crate::domain::settlement::Settlement;
use crate::domain::state::{Action, SettlementSnapshot};
use crate::error::Result;
use tokio::sync::Mutex;
use tracing::debug;

/// The main entry point for driving a group's settlement.
///
/// `SettlementEngine` owns the state store. A dispatch holds `dispatch_lock`
/// from load to store, so concurrent dispatches through a shared engine are
/// applied one after another and none is lost.
pub struct SettlementEngine {
    store: StateStoreBox,
    dispatch_lock: Mutex<()>,
}

impl SettlementEngine {
    /// Creates a new `SettlementEngine` over `store`.
    pub fn new(store: StateStoreBox) -> Self {
        Self {
            store,
            dispatch_lock: Mutex::new(()),
        }
    }

    /// Applies `action` and returns the settlement of the resulting state.
    pub async fn dispatch(&self, action: Action) -> Result<Settlement> {
        let _guard = self.dispatch_lock.lock().await;
        debug!(?action, "dispatching action");
        let state = self.store.load().await?.apply(action);
        let settlement = state.settlement().clone();
        debug!(
            participants = state.participants().len(),
            transfers = settlement.transfers.len(),
            "state updated"
        );
        self.store.store(state).await?;
        Ok(settlement)
    }

    /// Current settlement snapshot for a report.
    pub async fn snapshot(&self) -> Result<SettlementSnapshot> {
        Ok(self.store.load().await?.snapshot())
    }

    /// Consumes the engine and returns the final snapshot.
    pub async fn into_snapshot(self) -> Result<SettlementSnapshot> {
        self.snapshot().await
    }
}
