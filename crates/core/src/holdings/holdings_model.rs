use serde::{Deserialize, Serialize};

use crate::money::MonetaryAmount;

/// A holding as delivered by the brokerage API.
///
/// Monetary fields are display strings (`"$1,234.56"`). Both the camelCase
/// shape and the backend's snake_case keys are accepted. Missing monetary
/// fields become empty strings and fail derivation for this record only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "purchase_value")]
    pub purchase_value: String,
    #[serde(default, alias = "current_value")]
    pub current_value: String,
    #[serde(default, alias = "img", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, alias = "shares", skip_serializing_if = "Option::is_none")]
    pub share_count: Option<f64>,
}

/// Direction of a holding's profit/loss, used for the up/down indicator.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Trend {
    Gain,
    Loss,
}

/// Holding with parsed amounts and computed profit/loss.
///
/// Built once from a [`Holding`] by [`derive_holding`](super::derive_holding);
/// recompute from the raw record instead of editing fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DerivedHolding {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_count: Option<f64>,
    pub purchase_amount: MonetaryAmount,
    pub current_amount: MonetaryAmount,
    /// current - purchase
    pub profit_loss: f64,
    /// Percentage return on the purchase value; 0 when the purchase value is 0
    pub profit_loss_percentage: f64,
}

impl DerivedHolding {
    pub fn currency_symbol(&self) -> char {
        self.purchase_amount.currency_symbol
    }

    /// Profit/loss tagged with the holding's currency symbol.
    pub fn profit_loss_amount(&self) -> MonetaryAmount {
        MonetaryAmount::new(self.currency_symbol(), self.profit_loss)
    }

    pub fn trend(&self) -> Trend {
        if self.profit_loss >= 0.0 {
            Trend::Gain
        } else {
            Trend::Loss
        }
    }
}
