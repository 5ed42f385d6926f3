//! `yacht-quote <job.json>`: print formatted quotes for a batch of yachts.
//!
//! The job file holds `{"yachts": [...], "params": {...}}`; `params` may be
//! omitted to use the default pricing parameters.

use std::fs;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;
use validator::Validate;

use yacht_quotes::config::Config;
use yacht_quotes::models::Yacht;
use yacht_quotes::pricing::{calculate_multiple_quotes, format_quote_breakdown, QuoteParams};

#[derive(Debug, Deserialize)]
struct QuoteJob {
    yachts: Vec<Yacht>,
    #[serde(default)]
    params: QuoteParams,
}

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    let path = std::env::args()
        .nth(1)
        .context("Usage: yacht-quote <job.json>")?;
    let raw = fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))?;
    let job: QuoteJob =
        serde_json::from_str(&raw).with_context(|| format!("Invalid quote job in {}", path))?;

    for yacht in &job.yachts {
        yacht
            .validate()
            .with_context(|| format!("Invalid yacht record {}", yacht.id))?;
    }

    info!(yachts = job.yachts.len(), path = %path, "Quoting charter job");

    let quotes = calculate_multiple_quotes(&job.yachts, &job.params, &config.vat_table)?;
    for entry in &quotes {
        println!("{} ({}, {})", entry.yacht.name, entry.yacht.builder, entry.yacht.area);
        println!("{}\n", format_quote_breakdown(&entry.quote)?);
    }

    Ok(())
}
