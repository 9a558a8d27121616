use log::debug;

use super::dashboard_traits::HoldingsViewServiceTrait;
use super::{DashboardView, HoldingRow, HoldingsTable, ProfitLossLine, ProfitLossReport};
use crate::errors::Result;
use crate::holdings::{
    derive_holdings, exclude_foreign_currency, DerivationBatch, DerivedHolding, Holding,
};
use crate::money::{format_amount, format_signed};
use crate::portfolio::{summarize, PortfolioSummary};
use crate::query::{query_holdings, ViewQuery};
use crate::settings::ViewSettings;

/// Service composing derivation, aggregation and querying.
#[derive(Debug, Clone, Default)]
pub struct HoldingsViewService {
    settings: ViewSettings,
}

impl HoldingsViewService {
    /// Creates a new HoldingsViewService after validating `settings`.
    pub fn new(settings: ViewSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Derives holdings for aggregation: malformed and off-currency records
    /// both end up in the failure list.
    fn derive_portfolio(&self, holdings: &[Holding]) -> DerivationBatch {
        exclude_foreign_currency(self.derive_holdings(holdings))
    }
}

impl HoldingsViewServiceTrait for HoldingsViewService {
    fn derive_holdings(&self, holdings: &[Holding]) -> DerivationBatch {
        derive_holdings(holdings, &self.settings)
    }

    fn summarize(&self, holdings: &[DerivedHolding]) -> Result<PortfolioSummary> {
        summarize(holdings, &self.settings)
    }

    fn holdings_table(&self, holdings: &[Holding], query: &ViewQuery) -> HoldingsTable {
        let batch = self.derive_holdings(holdings);
        let rows = query_holdings(&batch.holdings, query)
            .into_iter()
            .map(HoldingRow::from)
            .collect();

        HoldingsTable {
            query: query.clone(),
            rows,
            failures: batch.failures,
        }
    }

    fn dashboard(&self, holdings: &[Holding]) -> Result<DashboardView> {
        let batch = self.derive_portfolio(holdings);
        let summary = self.summarize(&batch.holdings)?;
        debug!(
            "Dashboard built for {} holdings, {} top performers",
            summary.holdings_count,
            summary.top_performers.len()
        );

        Ok(DashboardView {
            total_value_display: format_amount(&summary.total_value),
            total_profit_loss_display: format_signed(&summary.total_profit_loss),
            summary,
            holdings: batch.holdings,
            failures: batch.failures,
        })
    }

    fn profit_loss(&self, holdings: &[Holding]) -> Result<ProfitLossReport> {
        let batch = self.derive_portfolio(holdings);
        let summary = self.summarize(&batch.holdings)?;

        Ok(ProfitLossReport {
            holdings: batch.holdings.iter().map(ProfitLossLine::from).collect(),
            total_investment: summary.total_purchase_value.magnitude,
            total_current_value: summary.total_value.magnitude,
            total_profit_loss: summary.total_profit_loss.magnitude,
            total_profit_loss_percentage: summary.total_profit_loss_percentage,
            currency: summary.currency_symbol,
            failures: batch.failures,
        })
    }
}
