//! Domain layer: money, participants, the settlement calculator and the
//! application state it is projected from.

pub mod money;
pub mod participant;
pub mod ports;
pub mod settlement;
pub mod state;
