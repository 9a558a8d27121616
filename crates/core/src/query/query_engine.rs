use log::debug;
use std::cmp::Ordering;

use super::{SortDirection, SortField, ViewQuery};
use crate::holdings::DerivedHolding;

/// Three-way comparison of two magnitudes.
///
/// Parsed amounts are never NaN; if one slips through it compares equal so
/// the stable sort leaves it in place.
pub fn compare_magnitudes(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Compares two holdings on a single column, ascending.
pub fn compare_holdings(a: &DerivedHolding, b: &DerivedHolding, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.cmp(&b.name),
        SortField::PurchaseValue => {
            compare_magnitudes(a.purchase_amount.magnitude, b.purchase_amount.magnitude)
        }
        SortField::CurrentValue => {
            compare_magnitudes(a.current_amount.magnitude, b.current_amount.magnitude)
        }
        SortField::ProfitLoss => compare_magnitudes(a.profit_loss, b.profit_loss),
        SortField::ProfitLossPercentage => {
            compare_magnitudes(a.profit_loss_percentage, b.profit_loss_percentage)
        }
    }
}

/// Filters `holdings` by name and orders the result by the query's column.
///
/// The sort is stable in both directions: holdings equal on the column keep
/// their input order. The input slice is left untouched.
pub fn query_holdings<'a>(
    holdings: &'a [DerivedHolding],
    query: &ViewQuery,
) -> Vec<&'a DerivedHolding> {
    let needle = query.search_term.to_lowercase();

    let mut view: Vec<&DerivedHolding> = holdings
        .iter()
        .filter(|h| h.name.to_lowercase().contains(needle.as_str()))
        .collect();

    view.sort_by(|a, b| {
        let ordering = compare_holdings(a, b, query.sort_field);
        match query.sort_direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    debug!(
        "Query '{}' by {} {:?} kept {} of {} holdings",
        query.search_term,
        query.sort_field,
        query.sort_direction,
        view.len(),
        holdings.len()
    );
    view
}
