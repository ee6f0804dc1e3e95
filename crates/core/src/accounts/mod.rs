//! Brokerage account positions as delivered by the backend.

mod accounts_model;
mod accounts_snapshot;

pub use accounts_model::*;
pub use accounts_snapshot::*;
