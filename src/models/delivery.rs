//! Outbound mail: queued jobs, send log and dead letters

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::coerce;

/// Channel a failed delivery belonged to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeadLetterKind {
    Email,
    Webhook,
}

impl std::fmt::Display for DeadLetterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeadLetterKind::Email => write!(f, "email"),
            DeadLetterKind::Webhook => write!(f, "webhook"),
        }
    }
}

/// Delivery that exhausted its retries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeadLetter {
    pub id: String,
    pub tenant_id: String,
    #[serde(rename = "type")]
    pub kind: DeadLetterKind,
    pub payload: String,
    pub error: String,
    pub attempts: u32,
    pub last_attempt: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MailLog {
    pub id: String,
    pub tenant_id: String,
    #[serde(default)]
    pub lead_id: Option<String>,
    pub to_email: String,
    #[serde(default)]
    pub cc: Option<String>,
    pub subject: String,
    pub sent: bool,
    #[serde(default)]
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Email queued for sending. System mails carry no lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmailJob {
    pub tenant_id: String,
    #[serde(default, deserialize_with = "coerce::option_string_from_any")]
    pub lead_id: Option<String>,
    pub to: String,
    /// Charter company copied on the mail
    #[serde(default)]
    pub cc: Option<String>,
    pub subject: String,
    pub body: String,
}
