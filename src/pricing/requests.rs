//! Request DTOs for quote calculation.

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::responses::LineItem;

/// Pricing parameters shared by single and batch calculations.
///
/// `vat_pct: None` means "derive VAT from the yacht's operating area";
/// `Some(0)` is an explicit zero rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteParams {
    pub weeks: Decimal,
    pub apa_pct: Decimal,
    pub vat_pct: Option<Decimal>,
    pub gratuity_pct: Decimal,
    pub delivery_fee: Decimal,
    pub extras: Vec<LineItem>,
}

impl Default for QuoteParams {
    fn default() -> Self {
        Self {
            weeks: Decimal::ONE,
            apa_pct: default_apa_pct(),
            vat_pct: None,
            gratuity_pct: Decimal::ZERO,
            delivery_fee: Decimal::ZERO,
            extras: Vec::new(),
        }
    }
}

fn default_weeks() -> Decimal {
    Decimal::ONE
}

fn default_apa_pct() -> Decimal {
    Decimal::from(25)
}

/// Request to calculate a quote for one yacht
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_quote_request"))]
pub struct CalculateQuoteRequest {
    #[validate(length(min = 1))]
    pub yacht_id: String,
    #[serde(default = "default_weeks")]
    pub weeks: Decimal,
    #[serde(default = "default_apa_pct")]
    pub apa_pct: Decimal,
    /// Absent keeps area-based VAT detection
    #[serde(default)]
    pub vat_pct: Option<Decimal>,
    #[serde(default)]
    pub gratuity_pct: Decimal,
    #[serde(default)]
    pub delivery_fee: Decimal,
    #[serde(default)]
    pub extras: Vec<LineItem>,
}

impl CalculateQuoteRequest {
    pub fn into_params(self) -> QuoteParams {
        QuoteParams {
            weeks: self.weeks,
            apa_pct: self.apa_pct,
            vat_pct: self.vat_pct,
            gratuity_pct: self.gratuity_pct,
            delivery_fee: self.delivery_fee,
            extras: self.extras,
        }
    }
}

fn rejection(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Owned(message));
    err
}

fn check_percentage(name: &str, pct: Decimal) -> Result<(), ValidationError> {
    if pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED {
        return Err(rejection(
            "percentage_out_of_range",
            format!("{} must be between 0 and 100, got {}", name, pct),
        ));
    }
    Ok(())
}

fn validate_quote_request(req: &CalculateQuoteRequest) -> Result<(), ValidationError> {
    if req.weeks <= Decimal::ZERO {
        return Err(rejection(
            "weeks_not_positive",
            format!("weeks must be positive, got {}", req.weeks),
        ));
    }
    check_percentage("apaPct", req.apa_pct)?;
    if let Some(vat_pct) = req.vat_pct {
        check_percentage("vatPct", vat_pct)?;
    }
    check_percentage("gratuityPct", req.gratuity_pct)?;
    if req.delivery_fee < Decimal::ZERO {
        return Err(rejection(
            "negative_delivery_fee",
            format!("deliveryFee must not be negative, got {}", req.delivery_fee),
        ));
    }
    Ok(())
}
