use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CURRENCY_SYMBOL, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_TOP_PERFORMERS_LIMIT,
};
use crate::errors::{Result, ValidationError};
use crate::money::is_currency_symbol;

/// Tunables for derivation and aggregation. Every field has a default, so a
/// partial JSON object (or `{}`) deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewSettings {
    /// Length cap for the top performers list
    pub top_performers_limit: usize,
    /// Symbol for summaries of an empty portfolio
    pub fallback_currency_symbol: char,
    /// Batch derivation runs on the rayon pool at or above this many holdings
    pub parallel_threshold: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            top_performers_limit: DEFAULT_TOP_PERFORMERS_LIMIT,
            fallback_currency_symbol: DEFAULT_CURRENCY_SYMBOL,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ViewSettings {
    /// Validates the settings.
    pub fn validate(&self) -> Result<()> {
        if !is_currency_symbol(self.fallback_currency_symbol) {
            return Err(ValidationError::InvalidInput(format!(
                "'{}' cannot be used as a currency symbol",
                self.fallback_currency_symbol
            ))
            .into());
        }
        if self.parallel_threshold == 0 {
            return Err(ValidationError::InvalidInput(
                "Parallel threshold must be at least 1".to_string(),
            )
            .into());
        }
        Ok(())
    }
}
