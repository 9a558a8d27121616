//! Equidash Core - holdings transformation pipeline.
//!
//! Turns the brokerage API's currency-formatted holdings into derived view
//! models: parsed amounts, profit/loss, portfolio summaries and filtered,
//! sorted holdings tables. Every stage is pure and performs no I/O.

pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod holdings;
pub mod money;
pub mod portfolio;
pub mod query;
pub mod settings;

// Re-export the pipeline types
pub use dashboard::*;
pub use holdings::*;
pub use money::*;
pub use portfolio::*;
pub use query::*;
pub use settings::ViewSettings;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
