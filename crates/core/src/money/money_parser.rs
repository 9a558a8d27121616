use lazy_static::lazy_static;
use regex::Regex;

use super::MonetaryAmount;
use crate::constants::{GROUPING_SEPARATORS, MAX_MAGNITUDE};
use crate::errors::{Error, Result};

lazy_static! {
    /// Plain decimal numeral once grouping separators are gone.
    /// Format: optional minus, digits, optional fraction
    ///
    /// The pattern puts no bound on the digit count, so `parse_amount` also
    /// rejects magnitudes above [`MAX_MAGNITUDE`]. Summing holdings with f64
    /// then stays finite for any list that fits in memory.
    static ref NUMERAL_REGEX: Regex =
        Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("Invalid regex pattern");
}

/// Returns true if `c` can stand as the leading currency symbol.
///
/// The symbol is not checked against a list of currencies; it only has to be
/// something that cannot be mistaken for the start of the numeral.
pub fn is_currency_symbol(c: char) -> bool {
    !(c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '+' | '.' | ','))
}

/// Parses a display string such as `"$12,345.67"` or `"R9 323.46"`.
///
/// The first character is taken as the currency symbol. Grouping separators
/// are removed from the remainder, which must then be a plain decimal
/// numeral no larger than [`MAX_MAGNITUDE`]. Anything else fails with
/// [`Error::MalformedAmount`] carrying the original string; there is no
/// fallback to zero.
pub fn parse_amount(display: &str) -> Result<MonetaryAmount> {
    let malformed = || Error::MalformedAmount(display.to_string());

    let mut chars = display.chars();
    let currency_symbol = chars.next().ok_or_else(malformed)?;
    if !is_currency_symbol(currency_symbol) {
        return Err(malformed());
    }

    let numeral: String = chars
        .filter(|c| !GROUPING_SEPARATORS.contains(c))
        .collect();
    if !NUMERAL_REGEX.is_match(&numeral) {
        return Err(malformed());
    }

    let magnitude: f64 = numeral.parse().map_err(|_| malformed())?;
    if !magnitude.is_finite() || magnitude.abs() > MAX_MAGNITUDE {
        return Err(malformed());
    }

    Ok(MonetaryAmount::new(currency_symbol, magnitude))
}
