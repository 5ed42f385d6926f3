//! Request DTOs for tenant, yacht search, lead and email-ingest endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use super::coerce;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenantRequest {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub smtp_host: Option<String>,
    #[serde(default)]
    pub smtp_port: Option<u16>,
    #[serde(default)]
    pub smtp_user: Option<String>,
    #[serde(default)]
    pub smtp_pass: Option<String>,
    #[serde(default)]
    pub from_name: Option<String>,
    #[serde(default)]
    pub from_email: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_limit() -> u32 {
    20
}

/// Yacht search filters, usually parsed from a query string
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchYachtsRequest {
    #[serde(default)]
    pub area: Option<String>,
    /// Free-text match
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "coerce::option_u32_from_any")]
    pub guests: Option<u32>,
    #[serde(default = "default_true")]
    pub strict_guests: bool,
    #[serde(default)]
    pub min_length: Option<Decimal>,
    #[serde(default)]
    pub max_length: Option<Decimal>,
    #[serde(default)]
    pub max_price: Option<Decimal>,
    #[serde(default = "default_limit", deserialize_with = "coerce::u32_from_any")]
    #[validate(range(min = 1, max = 50))]
    pub limit: u32,
    #[serde(default, deserialize_with = "coerce::u32_from_any")]
    pub offset: u32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadRequest {
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub notes: String,
    #[serde(deserialize_with = "coerce::u32_from_any")]
    pub party_size: u32,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub dates: Option<String>,
    #[serde(default)]
    pub budget: Option<Decimal>,
}

/// Inbound email to be turned into a lead
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IngestEmailRequest {
    #[validate(email)]
    pub from: String,
    pub subject: String,
    pub body: String,
    #[serde(default)]
    pub received_at: Option<DateTime<Utc>>,
}
