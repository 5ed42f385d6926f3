//! Core charter quote calculation.
//!
//! Pure functions: no I/O, no shared state. Identical inputs always produce
//! identical breakdowns.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::QuoteError;
use crate::models::Yacht;

use super::requests::QuoteParams;
use super::responses::{LineItem, QuoteBreakdown, YachtQuote};
use super::vat::VatTable;

pub const BASE_LABEL: &str = "Base";
pub const APA_LABEL: &str = "APA";
pub const VAT_LABEL: &str = "VAT";
pub const GRATUITY_LABEL: &str = "Gratuity";
pub const DELIVERY_FEE_LABEL: &str = "Delivery fee";
pub const TOTAL_LABEL: &str = "Total";

/// Round to `places` decimal places, halves away from zero.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use yacht_quotes::pricing::round_money;
///
/// assert_eq!(round_money(dec!(100.5), 0), dec!(101));
/// assert_eq!(round_money(dec!(-100.5), 0), dec!(-101));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// `pct` percent of `amount`, rounded to whole currency units.
fn percent_of(amount: Decimal, pct: Decimal, field: &'static str) -> Result<Decimal, QuoteError> {
    amount
        .checked_mul(pct)
        .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
        .map(|v| round_money(v, 0))
        .ok_or(QuoteError::Overflow { field })
}

fn checked_sum<I>(start: Decimal, values: I, field: &'static str) -> Result<Decimal, QuoteError>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(start, |sum, v| sum.checked_add(v))
        .ok_or(QuoteError::Overflow { field })
}

/// VAT percentage to apply: the explicit value when given, otherwise the
/// rate for the yacht's operating area.
pub fn resolve_vat_pct(area: &str, explicit: Option<Decimal>, vat_table: &VatTable) -> Decimal {
    explicit.unwrap_or_else(|| vat_table.rate_for(area))
}

/// Calculate an itemised quote for one yacht.
///
/// Zero or negative weeks and percentages are not rejected here; they flow
/// through the arithmetic. Only a result outside Decimal's range fails.
pub fn calculate_quote(
    yacht: &Yacht,
    params: &QuoteParams,
    vat_table: &VatTable,
) -> Result<QuoteBreakdown, QuoteError> {
    let base = yacht
        .weekly_rate
        .checked_mul(params.weeks)
        .ok_or(QuoteError::Overflow { field: "base" })?;

    let apa_amount = percent_of(base, params.apa_pct, "apa")?;

    let vat_pct = resolve_vat_pct(&yacht.area, params.vat_pct, vat_table);
    let vat_base = base
        .checked_add(apa_amount)
        .ok_or(QuoteError::Overflow { field: "vat" })?;
    let vat_amount = percent_of(vat_base, vat_pct, "vat")?;

    let gratuity_amount = percent_of(base, params.gratuity_pct, "gratuity")?;

    let extras_total = checked_sum(
        Decimal::ZERO,
        params.extras.iter().map(|extra| extra.amount),
        "extras",
    )?;

    let total = checked_sum(
        base,
        [
            apa_amount,
            vat_amount,
            gratuity_amount,
            params.delivery_fee,
            extras_total,
        ],
        "total",
    )?;

    let mut breakdown = Vec::with_capacity(params.extras.len() + 6);
    breakdown.push(LineItem::new(BASE_LABEL, base));
    breakdown.push(LineItem::new(APA_LABEL, apa_amount));
    breakdown.push(LineItem::new(VAT_LABEL, vat_amount));
    if params.gratuity_pct > Decimal::ZERO {
        breakdown.push(LineItem::new(GRATUITY_LABEL, gratuity_amount));
    }
    if params.delivery_fee > Decimal::ZERO {
        breakdown.push(LineItem::new(DELIVERY_FEE_LABEL, params.delivery_fee));
    }
    breakdown.extend(params.extras.iter().cloned());
    breakdown.push(LineItem::new(TOTAL_LABEL, total));

    debug!(
        yacht_id = %yacht.id,
        area = %yacht.area,
        vat_pct = %vat_pct,
        vat_explicit = params.vat_pct.is_some(),
        total = %total,
        "Calculated charter quote"
    );

    Ok(QuoteBreakdown {
        currency: yacht.currency.clone(),
        weeks: params.weeks,
        base,
        apa_pct: params.apa_pct,
        apa_amount,
        vat_pct,
        vat_amount,
        gratuity_pct: params.gratuity_pct,
        gratuity_amount,
        delivery_fee: params.delivery_fee,
        extras_total,
        total,
        breakdown,
    })
}

/// Quote every yacht with the same parameters, preserving input order.
///
/// The first failing yacht fails the whole batch.
pub fn calculate_multiple_quotes(
    yachts: &[Yacht],
    params: &QuoteParams,
    vat_table: &VatTable,
) -> Result<Vec<YachtQuote>, QuoteError> {
    let quotes = yachts
        .iter()
        .map(|yacht| {
            Ok(YachtQuote {
                yacht: yacht.clone(),
                quote: calculate_quote(yacht, params, vat_table)?,
            })
        })
        .collect::<Result<Vec<_>, QuoteError>>()?;

    info!(count = quotes.len(), "Calculated charter quotes for batch");

    Ok(quotes)
}
