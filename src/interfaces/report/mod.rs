//! Report writers consuming a [`SettlementSnapshot`](crate::domain::state::SettlementSnapshot).

pub mod json;
pub mod summary;
