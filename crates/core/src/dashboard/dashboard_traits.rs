//! Service trait for building holdings views.

use super::{DashboardView, HoldingsTable, ProfitLossReport};
use crate::errors::Result;
use crate::holdings::{DerivationBatch, DerivedHolding, Holding};
use crate::portfolio::PortfolioSummary;
use crate::query::ViewQuery;

/// Builds view models from raw holdings.
///
/// Implementations hold no mutable state; every call works only on its own
/// arguments, so one instance can serve concurrent requests.
pub trait HoldingsViewServiceTrait: Send + Sync {
    /// Derives every holding, collecting per-record failures.
    fn derive_holdings(&self, holdings: &[Holding]) -> DerivationBatch;

    /// Aggregates already-derived holdings.
    fn summarize(&self, holdings: &[DerivedHolding]) -> Result<PortfolioSummary>;

    /// Derives, filters and sorts holdings for the holdings table.
    fn holdings_table(&self, holdings: &[Holding], query: &ViewQuery) -> HoldingsTable;

    /// Derives and summarizes holdings for the dashboard page.
    fn dashboard(&self, holdings: &[Holding]) -> Result<DashboardView>;

    /// Derives holdings and reports numeric profit/loss per holding and in total.
    fn profit_loss(&self, holdings: &[Holding]) -> Result<ProfitLossReport>;
}
