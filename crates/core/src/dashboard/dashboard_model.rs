use serde::Serialize;

use crate::holdings::{DerivationFailure, DerivedHolding, Trend};
use crate::money::{format_percentage, format_signed};
use crate::portfolio::PortfolioSummary;
use crate::query::ViewQuery;

/// A row of the holdings table: the derived holding plus its display strings.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRow {
    #[serde(flatten)]
    pub holding: DerivedHolding,
    /// e.g. `"+$50.00"`
    pub profit_loss_display: String,
    /// e.g. `"-10.00%"`
    pub profit_loss_percentage_display: String,
    pub trend: Trend,
}

impl From<&DerivedHolding> for HoldingRow {
    fn from(holding: &DerivedHolding) -> Self {
        Self {
            profit_loss_display: format_signed(&holding.profit_loss_amount()),
            profit_loss_percentage_display: format_percentage(holding.profit_loss_percentage),
            trend: holding.trend(),
            holding: holding.clone(),
        }
    }
}

/// Filtered and sorted holdings table.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingsTable {
    pub query: ViewQuery,
    pub rows: Vec<HoldingRow>,
    /// Records that could not be derived, regardless of the search term
    pub failures: Vec<DerivationFailure>,
}

/// Everything the dashboard page renders: summary cards, pie chart and top
/// performers, plus the derived holdings they were computed from.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub summary: PortfolioSummary,
    /// `summary.total_value` formatted for display
    pub total_value_display: String,
    /// `summary.total_profit_loss` formatted with its sign
    pub total_profit_loss_display: String,
    pub holdings: Vec<DerivedHolding>,
    pub failures: Vec<DerivationFailure>,
}

/// Numeric profit/loss figures for a single holding.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfitLossLine {
    pub name: String,
    pub purchase_value: f64,
    pub current_value: f64,
    pub profit_loss: f64,
    pub profit_loss_percentage: f64,
}

impl From<&DerivedHolding> for ProfitLossLine {
    fn from(holding: &DerivedHolding) -> Self {
        Self {
            name: holding.name.clone(),
            purchase_value: holding.purchase_amount.magnitude,
            current_value: holding.current_amount.magnitude,
            profit_loss: holding.profit_loss,
            profit_loss_percentage: holding.profit_loss_percentage,
        }
    }
}

/// Per-holding and total profit/loss for an account, in input order.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfitLossReport {
    pub holdings: Vec<ProfitLossLine>,
    pub total_investment: f64,
    pub total_current_value: f64,
    pub total_profit_loss: f64,
    pub total_profit_loss_percentage: f64,
    pub currency: char,
    pub failures: Vec<DerivationFailure>,
}
