//! Models for the portfolio value distribution.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Summed market value for one group.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GroupAllocation {
    pub name: String,
    /// Total market value of the group's holdings.
    pub value: Decimal,
    /// Share of the retained total, in percent (0-100).
    pub percentage: Decimal,
}

/// Value distribution feeding a proportional (pie-style) view.
///
/// Groups whose summed value is missing or non-positive are dropped
/// before rendering; `total_value` covers only the retained groups.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDistribution {
    /// Retained groups, sorted descending by value.
    pub groups: Vec<GroupAllocation>,
    pub total_value: Decimal,
}
