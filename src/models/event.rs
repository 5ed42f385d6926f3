//! Domain events and audit trail

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Event emitted by a subsystem, with a JSON-encoded payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub tenant_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub entity_id: Option<String>,
    pub payload: String,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Decode the stored payload text
    pub fn payload_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(&self.payload)
    }
}

/// Record of a change made to a tenant resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: String,
    pub tenant_id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub action: String,
    pub resource: String,
    #[serde(default)]
    pub resource_id: Option<String>,
    #[serde(default)]
    pub old_values: Option<String>,
    #[serde(default)]
    pub new_values: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}
