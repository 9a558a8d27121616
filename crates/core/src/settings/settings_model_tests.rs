//! Tests for pipeline settings.

#[cfg(test)]
mod tests {
    use crate::errors::{Error, ValidationError};
    use crate::settings::ViewSettings;

    #[test]
    fn test_default_settings() {
        let settings = ViewSettings::default();
        assert_eq!(settings.top_performers_limit, 5);
        assert_eq!(settings.fallback_currency_symbol, 'R');
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: ViewSettings =
            serde_json::from_str(r#"{ "topPerformersLimit": 3 }"#).unwrap();
        assert_eq!(settings.top_performers_limit, 3);
        assert_eq!(settings.fallback_currency_symbol, 'R');
        assert_eq!(settings.parallel_threshold, 256);
    }

    #[test]
    fn test_empty_json_is_default() {
        let settings: ViewSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, ViewSettings::default());
    }

    #[test]
    fn test_validate_rejects_numeric_symbol() {
        let settings = ViewSettings {
            fallback_currency_symbol: '4',
            ..ViewSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_threshold() {
        let settings = ViewSettings {
            parallel_threshold: 0,
            ..ViewSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
