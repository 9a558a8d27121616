//! Display formatting for amounts and percentages.
//!
//! Output produced by [`format_amount`] is accepted again by
//! [`parse_amount`](super::parse_amount).

use super::MonetaryAmount;
use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Inserts `,` every three digits of the integer part of an unsigned
/// fixed-point numeral.
fn group_thousands(fixed: &str) -> String {
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed, None),
    };

    let mut grouped = String::with_capacity(fixed.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Rounds to display precision and reports whether the rounded value is
/// still below zero, so `-0.001` renders as `0.00` without a minus.
fn fixed_parts(value: f64) -> (bool, String) {
    let fixed = format!("{:.*}", DISPLAY_DECIMAL_PRECISION, value.abs());
    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    (negative, fixed)
}

/// Formats an amount as symbol, optional minus, grouped magnitude:
/// `"$12,345.67"`, `"$-20.00"`.
pub fn format_amount(amount: &MonetaryAmount) -> String {
    let (negative, fixed) = fixed_parts(amount.magnitude);
    format!(
        "{}{}{}",
        amount.currency_symbol,
        if negative { "-" } else { "" },
        group_thousands(&fixed)
    )
}

/// Formats a profit or loss with the sign ahead of the symbol:
/// `"+$50.00"`, `"-$20.00"`. Zero is shown as a gain.
pub fn format_signed(amount: &MonetaryAmount) -> String {
    let (negative, fixed) = fixed_parts(amount.magnitude);
    format!(
        "{}{}{}",
        if negative { '-' } else { '+' },
        amount.currency_symbol,
        group_thousands(&fixed)
    )
}

/// Formats a percentage return: `"+50.00%"`, `"-10.00%"`.
pub fn format_percentage(percentage: f64) -> String {
    let (negative, fixed) = fixed_parts(percentage);
    format!("{}{}%", if negative { '-' } else { '+' }, fixed)
}
