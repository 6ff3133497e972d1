//! Application layer orchestrating state changes.
//!
//! This module defines the `SettlementEngine`, which feeds actions through the
//! state reducer and keeps the resulting state in a `StateStore`.

pub mod engine;
