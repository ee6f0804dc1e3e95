//! Grouping of account positions by ticker symbol.

mod grouping_model;
mod grouping_service;

pub use grouping_model::*;
pub use grouping_service::*;
