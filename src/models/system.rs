//! Bookkeeping records: idempotency keys and schema migrations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Cached response for a replayed write request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IdempotencyKey {
    #[validate(length(min = 1))]
    pub key: String,
    pub tenant_id: String,
    pub resource: String,
    pub resource_id: String,
    pub response: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl IdempotencyKey {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Applied schema migration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Migration {
    pub version: u32,
    pub name: String,
    pub executed_at: DateTime<Utc>,
}
