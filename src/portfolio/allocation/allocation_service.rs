//! Service computing the portfolio value distribution by group.

use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{DISPLAY_DECIMAL_PRECISION, UNKNOWN_SECTOR};
use crate::portfolio::holdings_model::HoldingRow;

use super::allocation_model::{GroupAllocation, PortfolioDistribution};

/// Attribute the distribution groups on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    /// Sector classification; unclassified rows form an "Unknown" group.
    Sector,
    /// Company name, falling back to the symbol.
    Company,
}

#[derive(Debug, Default)]
pub struct AllocationService;

impl AllocationService {
    pub fn new() -> Self {
        Self
    }

    /// Sums market value per group and drops groups with a non-positive
    /// sum, so the proportional view only shows meaningful slices.
    pub fn distribution(&self, rows: &[HoldingRow], group_by: GroupBy) -> PortfolioDistribution {
        let mut values: HashMap<String, Decimal> = HashMap::new();

        for row in rows {
            let Some(value) = row.market_value else { continue };
            let group = match group_by {
                GroupBy::Sector => row
                    .sector
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_SECTOR.to_string()),
                GroupBy::Company => row
                    .company
                    .clone()
                    .unwrap_or_else(|| row.symbol.clone()),
            };
            *values.entry(group).or_insert(Decimal::ZERO) += value;
        }

        let retained: Vec<(String, Decimal)> = values
            .into_iter()
            .filter(|(_, value)| *value > Decimal::ZERO)
            .collect();
        let total_value: Decimal = retained.iter().map(|(_, value)| *value).sum();

        let mut groups: Vec<GroupAllocation> = retained
            .into_iter()
            .map(|(name, value)| {
                let percentage = if total_value > Decimal::ZERO {
                    (value / total_value * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION)
                } else {
                    Decimal::ZERO
                };
                GroupAllocation {
                    name,
                    value,
                    percentage,
                }
            })
            .collect();

        // Sort by value descending
        groups.sort_by(|a, b| b.value.cmp(&a.value));

        debug!("distribution over {} groups, total value {}", groups.len(), total_value);

        PortfolioDistribution {
            groups,
            total_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(symbol: &str, sector: Option<&str>, value: Option<Decimal>) -> HoldingRow {
        HoldingRow {
            symbol: symbol.to_string(),
            company: None,
            sector: sector.map(str::to_string),
            quantity: Some(dec!(1)),
            average_cost: Some(dec!(1)),
            market_price: value,
            cost_basis: Some(dec!(1)),
            market_value: value,
            gain_loss: None,
            return_pct: None,
        }
    }

    #[test]
    fn groups_by_sector_with_unknown_bucket() {
        let rows = vec![
            row("1120.SR", Some("Banks"), Some(dec!(500))),
            row("1180.SR", Some("Banks"), Some(dec!(300))),
            row("9999.SR", None, Some(dec!(200))),
        ];
        let dist = AllocationService::new().distribution(&rows, GroupBy::Sector);

        assert_eq!(dist.groups.len(), 2);
        assert_eq!(dist.groups[0].name, "Banks");
        assert_eq!(dist.groups[0].value, dec!(800));
        assert_eq!(dist.groups[0].percentage, dec!(80.00));
        assert_eq!(dist.groups[1].name, UNKNOWN_SECTOR);
        assert_eq!(dist.total_value, dec!(1000));
    }

    #[test]
    fn non_positive_groups_are_dropped() {
        let rows = vec![
            row("1120.SR", Some("Banks"), Some(dec!(600))),
            row("2222.SR", Some("Energy"), Some(dec!(-50))),
            row("3333.SR", Some("Cement"), Some(dec!(0))),
            row("4444.SR", Some("Telecom"), None),
        ];
        let dist = AllocationService::new().distribution(&rows, GroupBy::Sector);

        assert_eq!(dist.groups.len(), 1);
        assert_eq!(dist.groups[0].name, "Banks");
        // Retained groups still sum to the retained portion of total value.
        assert_eq!(dist.total_value, dec!(600));
        assert_eq!(dist.groups[0].percentage, dec!(100.00));
    }

    #[test]
    fn company_grouping_falls_back_to_symbol() {
        let mut named = row("1120.SR", None, Some(dec!(500)));
        named.company = Some("Al Rajhi Bank".to_string());
        let unnamed = row("2222.SR", None, Some(dec!(500)));

        let dist = AllocationService::new().distribution(&[named, unnamed], GroupBy::Company);
        let names: Vec<&str> = dist.groups.iter().map(|g| g.name.as_str()).collect();
        assert!(names.contains(&"Al Rajhi Bank"));
        assert!(names.contains(&"2222.SR"));
    }

    #[test]
    fn empty_portfolio_yields_empty_distribution() {
        let dist = AllocationService::new().distribution(&[], GroupBy::Sector);
        assert!(dist.groups.is_empty());
        assert_eq!(dist.total_value, Decimal::ZERO);
    }
}
