//! Tests for monetary parsing and formatting.

#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::money::{
        format_amount, format_percentage, format_signed, is_currency_symbol, parse_amount,
        MonetaryAmount,
    };

    // ==================== parse_amount ====================

    #[test]
    fn test_parse_dollar_with_grouping() {
        let amount = parse_amount("$1,234.56").unwrap();
        assert_eq!(amount.currency_symbol, '$');
        assert_eq!(amount.magnitude, 1234.56);
    }

    #[test]
    fn test_parse_rand_with_space_grouping() {
        let amount = parse_amount("R9 323.46").unwrap();
        assert_eq!(amount, MonetaryAmount::new('R', 9323.46));
    }

    #[test]
    fn test_parse_no_break_space_grouping() {
        let amount = parse_amount("R1\u{00A0}000\u{00A0}000.00").unwrap();
        assert_eq!(amount.magnitude, 1_000_000.0);
    }

    #[test]
    fn test_parse_multibyte_symbol() {
        let amount = parse_amount("€12,345.67").unwrap();
        assert_eq!(amount.currency_symbol, '€');
        assert_eq!(amount.magnitude, 12345.67);
    }

    #[test]
    fn test_parse_integer_and_single_fraction_digit() {
        assert_eq!(parse_amount("$100").unwrap().magnitude, 100.0);
        assert_eq!(parse_amount("$0.5").unwrap().magnitude, 0.5);
    }

    #[test]
    fn test_parse_zero() {
        assert_eq!(parse_amount("$0.00").unwrap().magnitude, 0.0);
    }

    #[test]
    fn test_parse_negative_after_symbol() {
        let amount = parse_amount("$-20.00").unwrap();
        assert_eq!(amount.magnitude, -20.0);
    }

    #[test]
    fn test_parse_rejects_letters() {
        assert_eq!(
            parse_amount("$abc"),
            Err(Error::MalformedAmount("$abc".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(parse_amount(""), Err(Error::MalformedAmount(String::new())));
    }

    #[test]
    fn test_parse_rejects_symbol_only() {
        assert!(matches!(parse_amount("$"), Err(Error::MalformedAmount(_))));
        assert!(matches!(parse_amount("$,"), Err(Error::MalformedAmount(_))));
    }

    #[test]
    fn test_parse_rejects_missing_symbol() {
        // Stripping the "1" would silently yield 234.
        assert!(matches!(parse_amount("1,234"), Err(Error::MalformedAmount(_))));
        assert!(matches!(parse_amount("-$5.00"), Err(Error::MalformedAmount(_))));
    }

    #[test]
    fn test_parse_rejects_unsupported_formats() {
        for raw in ["$(100.00)", "$100.00$", "USD100", "$1e5", "$NaN", "$inf", "$1.2.3", "$.50"] {
            assert!(
                matches!(parse_amount(raw), Err(Error::MalformedAmount(ref s)) if s == raw),
                "expected {raw} to be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let raw = format!("${}", "9".repeat(400));
        assert!(matches!(parse_amount(&raw), Err(Error::MalformedAmount(_))));
    }

    #[test]
    fn test_parse_magnitude_cap() {
        let too_large = format!("$1{}", "0".repeat(16));
        assert_eq!(
            parse_amount(&too_large),
            Err(Error::MalformedAmount(too_large.clone()))
        );
        let too_small = format!("$-1{}", "0".repeat(16));
        assert!(parse_amount(&too_small).is_err());

        let at_cap = parse_amount("R1,000,000,000,000,000.00").unwrap();
        assert_eq!(at_cap.magnitude, 1e15);
        assert_eq!(parse_amount("R-1 000 000 000 000 000").unwrap().magnitude, -1e15);
    }

    #[test]
    fn test_is_currency_symbol() {
        assert!(is_currency_symbol('$'));
        assert!(is_currency_symbol('R'));
        assert!(is_currency_symbol('£'));
        assert!(!is_currency_symbol('7'));
        assert!(!is_currency_symbol('-'));
        assert!(!is_currency_symbol(' '));
    }

    // ==================== formatting ====================

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(&MonetaryAmount::new('$', 12345.67)), "$12,345.67");
        assert_eq!(format_amount(&MonetaryAmount::new('$', 1_234_567.0)), "$1,234,567.00");
        assert_eq!(format_amount(&MonetaryAmount::new('R', 999.5)), "R999.50");
        assert_eq!(format_amount(&MonetaryAmount::new('$', 0.0)), "$0.00");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(&MonetaryAmount::new('$', -1500.0)), "$-1,500.00");
        assert_eq!(format_amount(&MonetaryAmount::new('$', -0.001)), "$0.00");
    }

    #[test]
    fn test_format_signed() {
        assert_eq!(format_signed(&MonetaryAmount::new('$', 50.0)), "+$50.00");
        assert_eq!(format_signed(&MonetaryAmount::new('$', -20.0)), "-$20.00");
        assert_eq!(format_signed(&MonetaryAmount::new('R', 0.0)), "+R0.00");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(50.0), "+50.00%");
        assert_eq!(format_percentage(-10.0), "-10.00%");
        assert_eq!(format_percentage(0.0), "+0.00%");
    }

    #[test]
    fn test_formatted_amount_parses_back() {
        let amount = MonetaryAmount::new('$', -98765.43);
        assert_eq!(parse_amount(&format_amount(&amount)).unwrap(), amount);
    }

    #[test]
    fn test_monetary_amount_serialization() {
        let json = serde_json::to_value(MonetaryAmount::new('$', 12.5)).unwrap();
        assert_eq!(json, serde_json::json!({ "currencySymbol": "$", "magnitude": 12.5 }));
    }
}
