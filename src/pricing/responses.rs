//! Output types of the quote calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Yacht;

/// A labelled monetary amount: one row of a breakdown, or a caller-supplied extra.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub amount: Decimal,
}

impl LineItem {
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Fully itemised charter quote.
///
/// `total` always equals `base + apa_amount + vat_amount + gratuity_amount
/// + delivery_fee + extras_total`, and `breakdown` always ends with the
/// `Total` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBreakdown {
    pub currency: String,
    pub weeks: Decimal,
    pub base: Decimal,
    pub apa_pct: Decimal,
    pub apa_amount: Decimal,
    pub vat_pct: Decimal,
    pub vat_amount: Decimal,
    pub gratuity_pct: Decimal,
    pub gratuity_amount: Decimal,
    pub delivery_fee: Decimal,
    pub extras_total: Decimal,
    pub total: Decimal,
    pub breakdown: Vec<LineItem>,
}

impl QuoteBreakdown {
    /// First breakdown row with the given label
    pub fn line(&self, label: &str) -> Option<&LineItem> {
        self.breakdown.iter().find(|item| item.label == label)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.breakdown.iter().map(|item| item.label.as_str()).collect()
    }
}

/// One entry of a batch calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YachtQuote {
    pub yacht: Yacht,
    pub quote: QuoteBreakdown,
}
