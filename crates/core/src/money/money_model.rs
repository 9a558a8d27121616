use serde::{Deserialize, Serialize};

/// A magnitude tagged with the currency symbol it was displayed with.
///
/// `magnitude` is never NaN or infinite when produced by [`parse_amount`].
///
/// [`parse_amount`]: super::parse_amount
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonetaryAmount {
    pub currency_symbol: char,
    pub magnitude: f64,
}

impl MonetaryAmount {
    pub fn new(currency_symbol: char, magnitude: f64) -> Self {
        MonetaryAmount {
            currency_symbol,
            magnitude,
        }
    }

    pub fn zero(currency_symbol: char) -> Self {
        MonetaryAmount::new(currency_symbol, 0.0)
    }
}
