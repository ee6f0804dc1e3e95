//! Folioview Core - positions snapshot models, symbol grouping and display metrics.
//!
//! The crate is a pure transform: a snapshot of account positions goes in,
//! positions bucketed by ticker symbol and their display metrics come out.

pub mod accounts;
pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod utils;

pub use accounts::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
