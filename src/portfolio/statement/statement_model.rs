use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One holding as read from a statement, before any derivation.
///
/// All column conventions map into this shape. Numeric fields are `None`
/// when the cell was absent or unparseable; such values stay out of every
/// aggregate and render blank. The pledge/unsettled fields are carried
/// through for display but never enter computation.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct HoldingInput {
    pub symbol: String,
    pub company: Option<String>,
    pub sector: Option<String>,
    pub quantity: Option<Decimal>,
    pub average_cost: Option<Decimal>,
    pub market_price: Option<Decimal>,
    pub pledged: Option<Decimal>,
    pub unsettled_buy: Option<Decimal>,
    pub unsettled_sell: Option<Decimal>,
    pub closing_price: Option<Decimal>,
}

impl HoldingInput {
    /// Minimal constructor used by the simple layout and by tests.
    pub fn new(symbol: &str, quantity: Decimal, average_cost: Decimal) -> Self {
        Self {
            symbol: symbol.to_string(),
            quantity: Some(quantity),
            average_cost: Some(average_cost),
            ..Default::default()
        }
    }
}

/// Coerces a statement cell to a decimal.
///
/// Thousands separators (",") are stripped first; anything that still
/// fails to parse is treated as missing rather than an error.
pub fn parse_decimal_cell(raw: &str) -> Option<Decimal> {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() || cleaned == "-" {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn strips_thousands_separators() {
        assert_eq!(parse_decimal_cell("1,234,567.89"), Some(dec!(1234567.89)));
        assert_eq!(parse_decimal_cell(" 2,000 "), Some(dec!(2000)));
    }

    #[test]
    fn plain_numbers_parse() {
        assert_eq!(parse_decimal_cell("85.5"), Some(dec!(85.5)));
        assert_eq!(parse_decimal_cell("-12.25"), Some(dec!(-12.25)));
    }

    #[test]
    fn unparseable_cells_become_missing() {
        assert_eq!(parse_decimal_cell(""), None);
        assert_eq!(parse_decimal_cell("   "), None);
        assert_eq!(parse_decimal_cell("-"), None);
        assert_eq!(parse_decimal_cell("n/a"), None);
    }
}
