//! Yacht records

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Charter yacht owned by a tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Yacht {
    pub id: String,
    pub tenant_id: String,
    pub name: String,
    pub builder: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub length: Decimal,
    /// Operating area, e.g. "Mediterranean"; drives VAT detection
    pub area: String,
    pub cabins: u32,
    pub guests: u32,
    pub weekly_rate: Decimal,
    /// ISO 4217 code the weekly rate is quoted in
    #[validate(length(equal = 3))]
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Yacht scored against a lead's requirements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub yacht: Yacht,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn yacht_json() -> serde_json::Value {
        json!({
            "id": "y-1",
            "tenantId": "acme",
            "name": "Sea Breeze",
            "builder": "Benetti",
            "type": "Motor",
            "length": 40.5,
            "area": "Mediterranean",
            "cabins": 5,
            "guests": 10,
            "weeklyRate": 95000,
            "currency": "EUR",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z"
        })
    }

    #[test]
    fn test_yacht_deserializes_camel_case() {
        let yacht: Yacht = serde_json::from_value(yacht_json()).unwrap();
        assert_eq!(yacht.tenant_id, "acme");
        assert_eq!(yacht.kind, "Motor");
        assert_eq!(yacht.length, dec!(40.5));
        assert_eq!(yacht.weekly_rate, dec!(95000));
        assert!(yacht.validate().is_ok());

        let back = serde_json::to_value(&yacht).unwrap();
        assert_eq!(back["type"], "Motor");
        assert_eq!(back["weeklyRate"], "95000");
    }

    #[test]
    fn test_yacht_rejects_malformed_currency() {
        let mut value = yacht_json();
        value["currency"] = json!("EURO");
        let yacht: Yacht = serde_json::from_value(value).unwrap();
        assert!(yacht.validate().is_err());
    }

    #[test]
    fn test_yacht_missing_field_fails() {
        let mut value = yacht_json();
        value.as_object_mut().unwrap().remove("weeklyRate");
        assert!(serde_json::from_value::<Yacht>(value).is_err());
    }
}
