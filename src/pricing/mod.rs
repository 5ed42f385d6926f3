//! Charter quote calculator.
//!
//! Turns a yacht's weekly rate and a set of percentage/fee parameters into
//! an itemised quote, and renders quotes as text.

pub mod calculators;
pub mod format;
pub mod requests;
pub mod responses;
pub mod vat;

// Re-export commonly used items
pub use calculators::{calculate_multiple_quotes, calculate_quote, resolve_vat_pct, round_money};
pub use format::{format_money, format_quote_breakdown};
pub use requests::{CalculateQuoteRequest, QuoteParams};
pub use responses::{LineItem, QuoteBreakdown, YachtQuote};
pub use vat::{VatRule, VatTable};
