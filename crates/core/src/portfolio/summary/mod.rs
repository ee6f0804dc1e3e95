//! Portfolio-wide totals.

mod summary_model;

pub use summary_model::*;

#[cfg(test)]
mod summary_model_tests;
