//! Per-position display metrics: rounded entry price, gain and direction.

mod metrics_calculator;
mod metrics_model;

pub use metrics_calculator::*;
pub use metrics_model::*;
