//! View queries - name filtering and column sorting over derived holdings.

mod query_engine;
mod query_model;

pub use query_engine::*;
pub use query_model::*;
