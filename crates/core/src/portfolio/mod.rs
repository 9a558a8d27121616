//! Portfolio-level aggregation over derived holdings.

pub mod summary;

pub use summary::*;
