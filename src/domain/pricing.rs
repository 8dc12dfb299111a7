//! Price estimates as returned to the form.

use crate::domain::ml::feature_registry::FeatureVector;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

/// A model estimate together with the exact row that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub price: f64,
    pub features: FeatureVector,
    pub model: String,
}

impl PriceQuote {
    pub fn display(&self, currency_symbol: &str) -> String {
        format_price(self.price, currency_symbol)
    }
}

/// Render a price as currency-like text: two decimals, symbol appended.
///
/// Values outside the `Decimal` range fall back to plain float formatting.
pub fn format_price(price: f64, currency_symbol: &str) -> String {
    match Decimal::from_f64(price) {
        Some(amount) => format!("{:.2}{}", amount.round_dp(2), currency_symbol),
        None => format!("{:.2}{}", price, currency_symbol),
    }
}
