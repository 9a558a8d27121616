//! Portfolio summary - totals, top performers and allocation.

mod summary_calculator;
mod summary_model;

pub use summary_calculator::*;
pub use summary_model::*;
