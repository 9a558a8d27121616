use std::str::FromStr;

use equidash_core::ViewSettings;

pub struct Config {
    pub settings: ViewSettings,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = ViewSettings::default();
        let settings = ViewSettings {
            top_performers_limit: env_or("EQD_TOP_PERFORMERS", defaults.top_performers_limit),
            fallback_currency_symbol: env_or(
                "EQD_CURRENCY_SYMBOL",
                defaults.fallback_currency_symbol,
            ),
            parallel_threshold: env_or("EQD_PARALLEL_THRESHOLD", defaults.parallel_threshold),
        };
        let log_format = std::env::var("EQD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        Self {
            settings,
            log_format,
        }
    }
}

/// Reads `key` from the environment, falling back to `default` when the
/// variable is absent or does not parse.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
