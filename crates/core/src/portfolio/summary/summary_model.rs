use serde::{Deserialize, Serialize};

use crate::money::MonetaryAmount;

/// Entry in the top performers list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformer {
    pub name: String,
    pub profit_loss_percentage: f64,
}

/// One slice of the allocation chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    pub name: String,
    /// Current value magnitude of the holding
    pub value: f64,
    /// Percentage of total current value (0-100), 0 when the total is 0
    pub weight: f64,
}

/// Aggregate figures over a list of derived holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub currency_symbol: char,
    /// Sum of current values
    pub total_value: MonetaryAmount,
    /// Sum of purchase values
    pub total_purchase_value: MonetaryAmount,
    /// Signed: total value - total purchase value
    pub total_profit_loss: MonetaryAmount,
    pub total_profit_loss_percentage: f64,
    pub holdings_count: usize,
    /// Sorted by percentage return descending, ties in input order
    pub top_performers: Vec<TopPerformer>,
    /// Input order; zero and negative values are kept
    pub allocation: Vec<AllocationSlice>,
}

impl PortfolioSummary {
    /// Summary of a portfolio with no holdings.
    pub fn empty(currency_symbol: char) -> Self {
        Self {
            currency_symbol,
            total_value: MonetaryAmount::zero(currency_symbol),
            total_purchase_value: MonetaryAmount::zero(currency_symbol),
            total_profit_loss: MonetaryAmount::zero(currency_symbol),
            total_profit_loss_percentage: 0.0,
            holdings_count: 0,
            top_performers: Vec::new(),
            allocation: Vec::new(),
        }
    }
}
