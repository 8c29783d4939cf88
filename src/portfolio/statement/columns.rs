//! Column-naming profiles for the supported statement formats.
//!
//! Each external naming convention maps into the same typed
//! [`HoldingInput`](super::statement_model::HoldingInput) shape through
//! one adapter here, instead of duplicating the aggregation logic per
//! convention.

use std::collections::HashMap;

use super::StatementError;

/// Fields a statement column can map into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementField {
    Symbol,
    Company,
    Quantity,
    AverageCost,
    MarketPrice,
    Pledged,
    UnsettledBuy,
    UnsettledSell,
    ClosingPrice,
}

/// A known statement layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementProfile {
    /// Minimal watch-list export: symbol, share count, buy price.
    /// Market prices come from the quote provider.
    Simple,
    /// English-language broker wallet export.
    Broker,
    /// Arabic-language Tadawul wallet export.
    Tadawul,
}

impl StatementProfile {
    pub const ALL: [StatementProfile; 3] = [
        StatementProfile::Simple,
        StatementProfile::Broker,
        StatementProfile::Tadawul,
    ];

    /// Every header this layout requires. Derived columns (total cost,
    /// market value, gain/loss, return) must be present in broker exports
    /// even though their values are recomputed, not trusted.
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            StatementProfile::Simple => &["symbol", "shares", "buy_price"],
            StatementProfile::Broker => &[
                "Code",
                "Stock",
                "Holding",
                "Pledge",
                "Average cost",
                "Unsettled sell",
                "Unsettled buy",
                "Market Price",
                "Total Cost",
                "Current Value",
                "Gain/Loss",
                "Return",
                "Closing Price",
            ],
            StatementProfile::Tadawul => &[
                "الرمز",
                "الشركة",
                "المحفظة",
                "مرهون",
                "متوسط التكلفة",
                "بيع تحت التسوية",
                "شراء تحت التسوية",
                "سعر السوق",
                "إجمالي التكلفة",
                "القيمة السوقية",
                "الربح/الخسارة",
                "العائد",
                "سعر الإغلاق",
            ],
        }
    }

    /// Header for a field under this layout, when the layout carries it.
    pub fn column(&self, field: StatementField) -> Option<&'static str> {
        use StatementField::*;
        match self {
            StatementProfile::Simple => match field {
                Symbol => Some("symbol"),
                Quantity => Some("shares"),
                AverageCost => Some("buy_price"),
                _ => None,
            },
            StatementProfile::Broker => match field {
                Symbol => Some("Code"),
                Company => Some("Stock"),
                Quantity => Some("Holding"),
                AverageCost => Some("Average cost"),
                MarketPrice => Some("Market Price"),
                Pledged => Some("Pledge"),
                UnsettledBuy => Some("Unsettled buy"),
                UnsettledSell => Some("Unsettled sell"),
                ClosingPrice => Some("Closing Price"),
            },
            StatementProfile::Tadawul => match field {
                Symbol => Some("الرمز"),
                Company => Some("الشركة"),
                Quantity => Some("المحفظة"),
                AverageCost => Some("متوسط التكلفة"),
                MarketPrice => Some("سعر السوق"),
                Pledged => Some("مرهون"),
                UnsettledBuy => Some("شراء تحت التسوية"),
                UnsettledSell => Some("بيع تحت التسوية"),
                ClosingPrice => Some("سعر الإغلاق"),
            },
        }
    }

    /// Picks the layout with the most matching headers.
    /// Ties break in declaration order.
    pub fn detect(headers: &[String]) -> StatementProfile {
        let mut best = StatementProfile::Simple;
        let mut best_matches = 0usize;
        for profile in Self::ALL {
            let matches = profile
                .required_columns()
                .iter()
                .filter(|col| headers.iter().any(|h| h == *col))
                .count();
            if matches > best_matches {
                best_matches = matches;
                best = profile;
            }
        }
        best
    }

    /// Fails fast when required headers are absent, naming exactly the
    /// missing ones. No computation happens on a malformed statement.
    pub fn validate(&self, headers: &[String]) -> Result<(), StatementError> {
        let missing: Vec<String> = self
            .required_columns()
            .iter()
            .filter(|col| !headers.iter().any(|h| h == *col))
            .map(|col| (*col).to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(StatementError::MissingColumns(missing))
        }
    }

    /// Index of each mapped field in the given header row.
    pub fn field_indexes(&self, headers: &[String]) -> HashMap<StatementField, usize> {
        use StatementField::*;
        let mut indexes = HashMap::new();
        for field in [
            Symbol,
            Company,
            Quantity,
            AverageCost,
            MarketPrice,
            Pledged,
            UnsettledBuy,
            UnsettledSell,
            ClosingPrice,
        ] {
            if let Some(column) = self.column(field) {
                if let Some(idx) = headers.iter().position(|h| h == column) {
                    indexes.insert(field, idx);
                }
            }
        }
        indexes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(cols: &[&str]) -> Vec<String> {
        cols.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn detects_simple_layout() {
        let h = headers(&["symbol", "shares", "buy_price"]);
        assert_eq!(StatementProfile::detect(&h), StatementProfile::Simple);
    }

    #[test]
    fn detects_tadawul_layout() {
        let h = headers(StatementProfile::Tadawul.required_columns());
        assert_eq!(StatementProfile::detect(&h), StatementProfile::Tadawul);
    }

    #[test]
    fn detects_broker_layout_with_extra_columns() {
        let mut h = headers(StatementProfile::Broker.required_columns());
        h.push("Notes".to_string());
        assert_eq!(StatementProfile::detect(&h), StatementProfile::Broker);
    }

    #[test]
    fn missing_columns_are_named_exactly() {
        let h: Vec<String> = StatementProfile::Tadawul
            .required_columns()
            .iter()
            .filter(|c| **c != "سعر السوق")
            .map(|c| c.to_string())
            .collect();

        let err = StatementProfile::Tadawul.validate(&h).unwrap_err();
        match err {
            StatementError::MissingColumns(missing) => {
                assert_eq!(missing, vec!["سعر السوق".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn complete_layout_validates() {
        let h = headers(StatementProfile::Broker.required_columns());
        assert!(StatementProfile::Broker.validate(&h).is_ok());
    }

    #[test]
    fn field_indexes_follow_header_order() {
        let h = headers(&["shares", "symbol", "buy_price"]);
        let idx = StatementProfile::Simple.field_indexes(&h);
        assert_eq!(idx[&StatementField::Symbol], 1);
        assert_eq!(idx[&StatementField::Quantity], 0);
        assert_eq!(idx[&StatementField::AverageCost], 2);
        assert!(!idx.contains_key(&StatementField::MarketPrice));
    }
}
