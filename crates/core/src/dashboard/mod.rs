//! Dashboard module - view models and the service that composes the
//! pipeline stages for the UI and CLI collaborators.

mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;

pub use dashboard_model::*;
pub use dashboard_service::HoldingsViewService;
pub use dashboard_traits::HoldingsViewServiceTrait;
