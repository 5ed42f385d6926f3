//! Charter leads

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Enquiry from a prospective charter guest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub tenant_id: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub notes: String,
    pub party_size: u32,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub dates: Option<String>,
    #[serde(default)]
    pub budget: Option<Decimal>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
