//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::Yacht;

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Mediterranean motor yacht at 10,000 EUR per week
pub fn test_yacht() -> Yacht {
    test_yacht_in("Mediterranean", dec!(10000))
}

/// Test yacht with a specific operating area and weekly rate
pub fn test_yacht_in(area: &str, weekly_rate: Decimal) -> Yacht {
    Yacht {
        id: format!("yacht-{}", area.to_lowercase().replace(' ', "-")),
        tenant_id: "acme".to_string(),
        name: "Test Yacht".to_string(),
        builder: "Sunseeker".to_string(),
        kind: "Motor".to_string(),
        length: dec!(28),
        area: area.to_string(),
        cabins: 4,
        guests: 8,
        weekly_rate,
        currency: "EUR".to_string(),
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}
