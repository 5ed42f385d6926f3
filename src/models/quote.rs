//! Persisted quotes

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::pricing::QuoteBreakdown;

use super::Yacht;

/// Quote as stored: a flattened projection of a [`QuoteBreakdown`].
///
/// Gratuity, delivery fee and individual extras are not kept separately;
/// `extras` holds only the extras total, while `total` still includes every
/// component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub tenant_id: String,
    #[serde(default)]
    pub lead_id: Option<String>,
    pub yacht_id: String,
    pub base_price: Decimal,
    pub apa: Decimal,
    pub vat: Decimal,
    pub extras: Decimal,
    pub total: Decimal,
    #[validate(length(equal = 3))]
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Quote {
    /// Build a new record for `yacht` from a calculated breakdown.
    pub fn from_breakdown(
        tenant_id: impl Into<String>,
        lead_id: Option<String>,
        yacht: &Yacht,
        breakdown: &QuoteBreakdown,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            tenant_id: tenant_id.into(),
            lead_id,
            yacht_id: yacht.id.clone(),
            base_price: breakdown.base,
            apa: breakdown.apa_amount,
            vat: breakdown.vat_amount,
            extras: breakdown.extras_total,
            total: breakdown.total,
            currency: breakdown.currency.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}
