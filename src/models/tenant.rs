//! Tenant (charter company) records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Charter company using the service, with optional outbound SMTP settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: String,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tenant {
    /// Whether the tenant supplies its own mail relay
    pub fn has_smtp(&self) -> bool {
        self.smtp_host.as_deref().is_some_and(|h| !h.is_empty()) && self.smtp_port.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tenant_nullable_smtp_fields() {
        let tenant: Tenant = serde_json::from_value(json!({
            "id": "acme",
            "name": "Acme Charters",
            "smtpHost": null,
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(tenant.smtp_host, None);
        assert_eq!(tenant.smtp_port, None);
        assert!(!tenant.has_smtp());
    }

    #[test]
    fn test_tenant_with_smtp() {
        let tenant: Tenant = serde_json::from_value(json!({
            "id": "acme",
            "name": "Acme Charters",
            "smtpHost": "smtp.acme.test",
            "smtpPort": 587,
            "fromEmail": "sales@acme.test",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert!(tenant.has_smtp());
        assert_eq!(tenant.from_email.as_deref(), Some("sales@acme.test"));
    }
}
