//! Runtime configuration from the environment (and `.env`).

use std::env;

use crate::error::Result;
use crate::pricing::VatTable;

const DEFAULT_LOG_FILTER: &str = "yacht_quotes=info,yacht_quote=info";

#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing_subscriber` filter directive (`RUST_LOG`)
    pub log_filter: String,
    /// Built-in VAT rates merged with `VAT_RATES` (`Area=pct,...`)
    pub vat_table: VatTable,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let vat_table = match lookup("VAT_RATES") {
            Some(rules) => VatTable::default().merge_rules(&rules)?,
            None => VatTable::default(),
        };

        Ok(Self {
            log_filter,
            vat_table,
        })
    }
}
