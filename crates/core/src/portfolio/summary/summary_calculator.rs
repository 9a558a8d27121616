use log::debug;

use super::{AllocationSlice, PortfolioSummary, TopPerformer};
use crate::errors::{Error, Result};
use crate::holdings::{percentage_return, DerivedHolding};
use crate::money::MonetaryAmount;
use crate::query::compare_magnitudes;
use crate::settings::ViewSettings;

/// Aggregates derived holdings into portfolio totals, top performers and
/// allocation slices.
///
/// An empty list is a valid portfolio and summarizes to zeros in the
/// fallback currency. Holdings are never converted between currencies: if
/// they do not all share one symbol the summary fails with
/// [`Error::CurrencyMismatch`].
pub fn summarize(
    holdings: &[DerivedHolding],
    settings: &ViewSettings,
) -> Result<PortfolioSummary> {
    let Some(first) = holdings.first() else {
        return Ok(PortfolioSummary::empty(settings.fallback_currency_symbol));
    };
    let currency_symbol = first.currency_symbol();

    if let Some(other) = holdings
        .iter()
        .find(|h| h.currency_symbol() != currency_symbol)
    {
        return Err(Error::CurrencyMismatch {
            context: format!("portfolio summary at holding '{}'", other.name),
            expected: currency_symbol,
            found: other.currency_symbol(),
        });
    }

    let total_value: f64 = holdings.iter().map(|h| h.current_amount.magnitude).sum();
    let total_purchase_value: f64 = holdings.iter().map(|h| h.purchase_amount.magnitude).sum();
    let total_profit_loss = total_value - total_purchase_value;

    let mut ranked: Vec<&DerivedHolding> = holdings.iter().collect();
    // sort_by is stable: equal returns stay in input order
    ranked.sort_by(|a, b| compare_magnitudes(b.profit_loss_percentage, a.profit_loss_percentage));
    let top_performers = ranked
        .into_iter()
        .take(settings.top_performers_limit)
        .map(|h| TopPerformer {
            name: h.name.clone(),
            profit_loss_percentage: h.profit_loss_percentage,
        })
        .collect();

    let allocation = holdings
        .iter()
        .map(|h| AllocationSlice {
            name: h.name.clone(),
            value: h.current_amount.magnitude,
            weight: if total_value == 0.0 {
                0.0
            } else {
                h.current_amount.magnitude / total_value * 100.0
            },
        })
        .collect();

    debug!(
        "Summarized {} holdings: total value {}{:.2}",
        holdings.len(),
        currency_symbol,
        total_value
    );

    Ok(PortfolioSummary {
        currency_symbol,
        total_value: MonetaryAmount::new(currency_symbol, total_value),
        total_purchase_value: MonetaryAmount::new(currency_symbol, total_purchase_value),
        total_profit_loss: MonetaryAmount::new(currency_symbol, total_profit_loss),
        total_profit_loss_percentage: percentage_return(total_profit_loss, total_purchase_value),
        holdings_count: holdings.len(),
        top_performers,
        allocation,
    })
}
