//! VAT rates by operating area.
//!
//! Areas are matched by exact, case-sensitive string equality. Anything not
//! listed falls through to the table's default rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A single area -> VAT percentage rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatRule {
    pub area: String,
    pub pct: Decimal,
}

/// Ordered area rules plus the rate used when no rule matches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatTable {
    rules: Vec<VatRule>,
    default_pct: Decimal,
}

impl VatTable {
    /// Empty table: every area resolves to `default_pct`.
    pub fn new(default_pct: Decimal) -> Self {
        Self {
            rules: Vec::new(),
            default_pct,
        }
    }

    /// Add a rule, replacing any existing rule for the same area.
    pub fn with_rule(mut self, area: impl Into<String>, pct: Decimal) -> Self {
        let area = area.into();
        match self.rules.iter_mut().find(|r| r.area == area) {
            Some(rule) => rule.pct = pct,
            None => self.rules.push(VatRule { area, pct }),
        }
        self
    }

    /// Parse a comma separated `Area=pct` list and merge it over this table.
    ///
    /// Whitespace around areas and percentages is trimmed; empty entries are skipped.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use yacht_quotes::pricing::VatTable;
    ///
    /// let table = VatTable::default().merge_rules("Adriatic=25, Bahamas=10").unwrap();
    /// assert_eq!(table.rate_for("Adriatic"), dec!(25));
    /// assert_eq!(table.rate_for("Bahamas"), dec!(10));
    /// assert_eq!(table.rate_for("Mediterranean"), dec!(22));
    /// ```
    pub fn merge_rules(self, rules: &str) -> Result<Self, AppError> {
        rules.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .try_fold(self, |table, entry| {
                let (area, pct) = entry.split_once('=').ok_or_else(|| {
                    AppError::Config(format!("VAT rule '{}' is not in Area=pct form", entry))
                })?;
                let area = area.trim();
                if area.is_empty() {
                    return Err(AppError::Config(format!("VAT rule '{}' has no area", entry)));
                }
                let pct = pct.trim().parse::<Decimal>().map_err(|e| {
                    AppError::Config(format!("VAT rule '{}' has invalid percentage: {}", entry, e))
                })?;
                Ok(table.with_rule(area, pct))
            })
    }

    /// Rate configured for `area`, if any rule matches exactly.
    pub fn lookup(&self, area: &str) -> Option<Decimal> {
        self.rules.iter().find(|r| r.area == area).map(|r| r.pct)
    }

    /// Rate for `area`, falling back to the default.
    pub fn rate_for(&self, area: &str) -> Decimal {
        self.lookup(area).unwrap_or(self.default_pct)
    }

    pub fn default_pct(&self) -> Decimal {
        self.default_pct
    }

    pub fn rules(&self) -> &[VatRule] {
        &self.rules
    }
}

impl Default for VatTable {
    /// Mediterranean charters carry European VAT; the Caribbean and Bahamas
    /// jurisdictions mostly charge none.
    fn default() -> Self {
        Self::new(Decimal::ZERO)
            .with_rule("Mediterranean", Decimal::from(22))
            .with_rule("Caribbean", Decimal::ZERO)
            .with_rule("Bahamas", Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_table_rates() {
        let table = VatTable::default();
        assert_eq!(table.rate_for("Mediterranean"), dec!(22));
        assert_eq!(table.rate_for("Caribbean"), dec!(0));
        assert_eq!(table.rate_for("Bahamas"), dec!(0));
        assert_eq!(table.default_pct(), dec!(0));
        assert_eq!(table.rules().len(), 3);
    }

    #[test]
    fn test_lookup_is_exact_and_case_sensitive() {
        let table = VatTable::default();
        assert_eq!(table.lookup("Mediterranean"), Some(dec!(22)));
        assert_eq!(table.lookup("mediterranean"), None);
        assert_eq!(table.lookup(" Mediterranean"), None);
        assert_eq!(table.lookup(""), None);
        assert_eq!(table.rate_for("mediterranean"), dec!(0));
    }

    #[test]
    fn test_with_rule_overrides_existing_area() {
        let table = VatTable::default().with_rule("Caribbean", dec!(7.5));
        assert_eq!(table.rate_for("Caribbean"), dec!(7.5));
        assert_eq!(table.rules().len(), 3);
    }

    #[test]
    fn test_custom_default_rate() {
        let table = VatTable::new(dec!(5)).with_rule("Bahamas", dec!(0));
        assert_eq!(table.rate_for("Anywhere"), dec!(5));
        assert_eq!(table.rate_for("Bahamas"), dec!(0));
    }

    #[test]
    fn test_merge_rules_parses_list() {
        let table = VatTable::default()
            .merge_rules(" Adriatic = 25 ,, Indian Ocean=0 ")
            .unwrap();
        assert_eq!(table.rate_for("Adriatic"), dec!(25));
        assert_eq!(table.lookup("Indian Ocean"), Some(dec!(0)));
        assert_eq!(table.rules().len(), 5);
    }

    #[test]
    fn test_merge_rules_empty_is_noop() {
        let table = VatTable::default().merge_rules("").unwrap();
        assert_eq!(table, VatTable::default());
    }

    #[test]
    fn test_merge_rules_rejects_malformed_entries() {
        assert!(matches!(
            VatTable::default().merge_rules("Adriatic"),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            VatTable::default().merge_rules("=10"),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            VatTable::default().merge_rules("Adriatic=lots"),
            Err(AppError::Config(_))
        ));
    }
}
