//! Data contracts for persisted records and API requests.
//!
//! Shape is enforced by deserialization; the remaining constraints
//! (email addresses, bounds, currency codes) by `validator`.

pub mod coerce;
pub mod delivery;
pub mod event;
pub mod lead;
pub mod quote;
pub mod requests;
pub mod system;
pub mod tenant;
pub mod yacht;

use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::Result;

pub use delivery::{DeadLetter, DeadLetterKind, EmailJob, MailLog};
pub use event::{AuditLog, Event};
pub use lead::Lead;
pub use quote::Quote;
pub use requests::{CreateLeadRequest, CreateTenantRequest, IngestEmailRequest, SearchYachtsRequest};
pub use system::{IdempotencyKey, Migration};
pub use tenant::Tenant;
pub use yacht::{MatchResult, Yacht};

/// Deserialize a JSON document and run its validation rules.
pub fn parse_record<T>(json: &str) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let record: T = serde_json::from_str(json)?;
    record.validate()?;
    Ok(record)
}
