//! View model handed to the rendering layer.

mod view_model;

pub use view_model::*;

#[cfg(test)]
mod view_model_tests;
