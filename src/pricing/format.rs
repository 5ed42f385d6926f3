//! Plain-text rendering of quote breakdowns.

use rust_decimal::Decimal;

use crate::error::QuoteError;

use super::calculators::{round_money, TOTAL_LABEL};
use super::responses::QuoteBreakdown;

const HEADER: &str = "Charter Quote Breakdown:";
const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━";

const DISCLAIMERS: [&str; 3] = [
    "* APA covers fuel, food, beverages, port fees, and other operational expenses",
    "* VAT rates vary by jurisdiction and yacht flag",
    "* All prices are indicative and subject to final confirmation",
];

/// Currencies quoted without minor units
const ZERO_DECIMAL_CURRENCIES: &[&str] = &[
    "BIF", "CLP", "DJF", "GNF", "ISK", "JPY", "KMF", "KRW", "PYG", "RWF", "UGX", "UYI", "VND",
    "VUV", "XAF", "XOF", "XPF",
];

const THREE_DECIMAL_CURRENCIES: &[&str] = &["BHD", "IQD", "JOD", "KWD", "LYD", "OMR", "TND"];

fn currency_symbol(code: &str) -> Option<&'static str> {
    let symbol = match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "CAD" => "CA$",
        "AUD" => "A$",
        "NZD" => "NZ$",
        "HKD" => "HK$",
        "MXN" => "MX$",
        "BRL" => "R$",
        "CNY" => "CN¥",
        "TWD" => "NT$",
        "XCD" => "EC$",
        "INR" => "₹",
        "ILS" => "₪",
        "KRW" => "₩",
        "VND" => "₫",
        "PHP" => "₱",
        _ => return None,
    };
    Some(symbol)
}

fn minor_units(code: &str) -> u32 {
    if ZERO_DECIMAL_CURRENCIES.contains(&code) {
        0
    } else if THREE_DECIMAL_CURRENCIES.contains(&code) {
        3
    } else {
        2
    }
}

/// Upper-cased ISO 4217 style code, or an error if `currency` is not three letters.
fn normalize_currency(currency: &str) -> Result<String, QuoteError> {
    if currency.len() == 3 && currency.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(currency.to_ascii_uppercase())
    } else {
        Err(QuoteError::InvalidCurrency(currency.to_string()))
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format an amount as en-US currency text with no forced fraction digits.
///
/// ```
/// use rust_decimal_macros::dec;
/// use yacht_quotes::pricing::format_money;
///
/// assert_eq!(format_money(dec!(15250), "EUR").unwrap(), "€15,250");
/// assert_eq!(format_money(dec!(1234.5), "usd").unwrap(), "$1,234.5");
/// assert!(format_money(dec!(1), "EURO").is_err());
/// ```
pub fn format_money(amount: Decimal, currency: &str) -> Result<String, QuoteError> {
    let code = normalize_currency(currency)?;
    let rounded = round_money(amount, minor_units(&code)).normalize();
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };

    let digits = rounded.abs().to_string();
    let number = match digits.split_once('.') {
        Some((whole, fraction)) => format!("{}.{}", group_thousands(whole), fraction),
        None => group_thousands(&digits),
    };

    Ok(match currency_symbol(&code) {
        Some(symbol) => format!("{}{}{}", sign, symbol, number),
        None => format!("{}{}\u{a0}{}", sign, code, number),
    })
}

/// Render a breakdown as the multi-line text sent to clients.
pub fn format_quote_breakdown(breakdown: &QuoteBreakdown) -> Result<String, QuoteError> {
    normalize_currency(&breakdown.currency)?;

    let mut result = format!("{}\n{}\n", HEADER, RULE);
    for item in &breakdown.breakdown {
        let amount = format_money(item.amount, &breakdown.currency)?;
        if item.label == TOTAL_LABEL {
            result.push_str(RULE);
            result.push('\n');
            result.push_str(&format!("{}: {}\n", item.label.to_uppercase(), amount));
        } else {
            result.push_str(&format!("{}: {}\n", item.label, amount));
        }
    }

    for line in DISCLAIMERS {
        result.push('\n');
        result.push_str(line);
    }

    Ok(result)
}
