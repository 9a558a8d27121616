use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, ValidationError};

/// Column a holdings view can be ordered by.
///
/// Accepts the camelCase names as well as the table's snake_case column ids.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Name,
    #[serde(alias = "purchase_value")]
    PurchaseValue,
    #[serde(alias = "current_value")]
    CurrentValue,
    #[serde(alias = "profit_loss")]
    ProfitLoss,
    #[serde(alias = "profit_loss_percentage")]
    ProfitLossPercentage,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Name,
        SortField::PurchaseValue,
        SortField::CurrentValue,
        SortField::ProfitLoss,
        SortField::ProfitLossPercentage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::PurchaseValue => "purchaseValue",
            SortField::CurrentValue => "currentValue",
            SortField::ProfitLoss => "profitLoss",
            SortField::ProfitLossPercentage => "profitLossPercentage",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = Error;

    /// Matches case-insensitively and ignores `_` and `-`, so
    /// `profitLoss`, `profit_loss` and `profit-loss` are the same field.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-'))
            .collect::<String>()
            .to_lowercase();

        SortField::ALL
            .into_iter()
            .find(|field| field.as_str().to_lowercase() == normalized)
            .ok_or_else(|| ValidationError::UnknownSortField(s.to_string()).into())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Filter and ordering requested by the holdings table. Built per render and
/// never stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewQuery {
    /// Case-insensitive substring of the holding name; empty matches all
    pub search_term: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl ViewQuery {
    pub fn new(
        search_term: impl Into<String>,
        sort_field: SortField,
        sort_direction: SortDirection,
    ) -> Self {
        Self {
            search_term: search_term.into(),
            sort_field,
            sort_direction,
        }
    }

    /// Query after the user clicks the header of `field`.
    ///
    /// Clicking the column that is already sorted ascending flips it to
    /// descending; every other click sorts `field` ascending.
    pub fn request_sort(self, field: SortField) -> Self {
        let sort_direction =
            if self.sort_field == field && self.sort_direction == SortDirection::Ascending {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
        Self {
            sort_field: field,
            sort_direction,
            ..self
        }
    }
}
