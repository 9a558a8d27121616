use log::{debug, warn};
use rayon::prelude::*;
use serde::{Serialize, Serializer};
use std::collections::HashSet;

use super::{DerivedHolding, Holding};
use crate::errors::{Error, Result};
use crate::money::parse_amount;
use crate::settings::ViewSettings;

/// Percentage return of `profit_loss` on `cost_basis`.
///
/// A zero cost basis has no defined return and yields 0, not infinity.
pub fn percentage_return(profit_loss: f64, cost_basis: f64) -> f64 {
    if cost_basis == 0.0 {
        0.0
    } else {
        profit_loss / cost_basis * 100.0
    }
}

/// Parses both monetary fields of a raw holding and computes profit/loss.
///
/// Fails with [`Error::MalformedAmount`] when either field does not parse, and
/// with [`Error::CurrencyMismatch`] when the two fields carry different
/// currency symbols.
pub fn derive_holding(holding: &Holding) -> Result<DerivedHolding> {
    let purchase_amount = parse_amount(&holding.purchase_value)?;
    let current_amount = parse_amount(&holding.current_value)?;

    if purchase_amount.currency_symbol != current_amount.currency_symbol {
        return Err(Error::CurrencyMismatch {
            context: format!("holding '{}'", holding.name),
            expected: purchase_amount.currency_symbol,
            found: current_amount.currency_symbol,
        });
    }

    let profit_loss = current_amount.magnitude - purchase_amount.magnitude;

    Ok(DerivedHolding {
        name: holding.name.clone(),
        image_url: holding.image_url.clone(),
        share_count: holding.share_count,
        purchase_amount,
        current_amount,
        profit_loss,
        profit_loss_percentage: percentage_return(profit_loss, purchase_amount.magnitude),
    })
}

/// A holding that could not be derived, identified by its position in the
/// input list.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DerivationFailure {
    pub index: usize,
    pub name: String,
    #[serde(serialize_with = "serialize_error")]
    pub error: Error,
}

fn serialize_error<S: Serializer>(
    error: &Error,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&error.to_string())
}

/// Outcome of deriving a list of holdings. Both lists keep input order.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DerivationBatch {
    pub holdings: Vec<DerivedHolding>,
    pub failures: Vec<DerivationFailure>,
}

impl DerivationBatch {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Derives every holding in `holdings`, collecting per-record failures next to
/// the successes instead of aborting on the first bad record.
///
/// Lists at or above `settings.parallel_threshold` are derived on the rayon
/// pool; the result is identical either way.
pub fn derive_holdings(holdings: &[Holding], settings: &ViewSettings) -> DerivationBatch {
    let results: Vec<Result<DerivedHolding>> = if holdings.len() >= settings.parallel_threshold {
        debug!("Deriving {} holdings in parallel", holdings.len());
        holdings.par_iter().map(derive_holding).collect()
    } else {
        holdings.iter().map(derive_holding).collect()
    };

    let mut batch = DerivationBatch::default();
    for (index, (holding, result)) in holdings.iter().zip(results).enumerate() {
        match result {
            Ok(derived) => batch.holdings.push(derived),
            Err(error) => {
                warn!(
                    "Skipping holding '{}' at position {}: {}",
                    holding.name, index, error
                );
                batch.failures.push(DerivationFailure {
                    index,
                    name: holding.name.clone(),
                    error,
                });
            }
        }
    }

    debug!(
        "Derived {} of {} holdings ({} failed)",
        batch.holdings.len(),
        holdings.len(),
        batch.failures.len()
    );
    batch
}

/// Symbol shared by most holdings; ties go to the symbol seen first.
fn portfolio_currency(holdings: &[DerivedHolding]) -> Option<char> {
    let mut counts: Vec<(char, usize)> = Vec::new();
    for holding in holdings {
        let symbol = holding.currency_symbol();
        match counts.iter_mut().find(|(s, _)| *s == symbol) {
            Some((_, count)) => *count += 1,
            None => counts.push((symbol, 1)),
        }
    }
    counts
        .into_iter()
        .fold(None, |best: Option<(char, usize)>, (symbol, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((symbol, count)),
        })
        .map(|(symbol, _)| symbol)
}

/// Moves holdings priced in a currency other than the portfolio's into the
/// failure list as [`Error::CurrencyMismatch`], so the rest can be summed.
///
/// The portfolio currency is the symbol most holdings share. Failure indices
/// keep referring to positions in the raw input and stay sorted.
pub fn exclude_foreign_currency(batch: DerivationBatch) -> DerivationBatch {
    let Some(portfolio_symbol) = portfolio_currency(&batch.holdings) else {
        return batch;
    };
    let DerivationBatch { holdings, failures } = batch;

    let failed: HashSet<usize> = failures.iter().map(|f| f.index).collect();
    let input_indices = (0usize..).filter(|i| !failed.contains(i));

    let mut result = DerivationBatch {
        holdings: Vec::with_capacity(holdings.len()),
        failures,
    };
    for (index, holding) in input_indices.zip(holdings) {
        let symbol = holding.currency_symbol();
        if symbol == portfolio_symbol {
            result.holdings.push(holding);
            continue;
        }
        warn!(
            "Excluding holding '{}' at position {}: priced in '{}', portfolio in '{}'",
            holding.name, index, symbol, portfolio_symbol
        );
        result.failures.push(DerivationFailure {
            index,
            error: Error::CurrencyMismatch {
                context: format!("holding '{}'", holding.name),
                expected: portfolio_symbol,
                found: symbol,
            },
            name: holding.name,
        });
    }
    result.failures.sort_by_key(|f| f.index);
    result
}
