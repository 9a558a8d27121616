//! Holdings module - raw and derived holding models and derivation.

mod derivation;
mod holdings_model;

pub use derivation::*;
pub use holdings_model::*;
