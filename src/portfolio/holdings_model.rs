use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One valued holding with its derived P&L fields.
///
/// Derived fields are `None` whenever an ingredient is missing: a row
/// without a market price carries no market value, gain, or return, and
/// those blanks stay out of the portfolio totals.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRow {
    pub symbol: String,
    pub company: Option<String>,
    pub sector: Option<String>,
    pub quantity: Option<Decimal>,
    pub average_cost: Option<Decimal>,
    pub market_price: Option<Decimal>,
    /// quantity x average cost
    pub cost_basis: Option<Decimal>,
    /// quantity x market price
    pub market_value: Option<Decimal>,
    /// market value - cost basis
    pub gain_loss: Option<Decimal>,
    /// gain/loss over cost basis, in percent; 0 for a zero cost basis
    pub return_pct: Option<Decimal>,
}

impl HoldingRow {
    pub fn is_winner(&self) -> bool {
        matches!(self.gain_loss, Some(g) if g > Decimal::ZERO)
    }

    pub fn is_loser(&self) -> bool {
        matches!(self.gain_loss, Some(g) if g < Decimal::ZERO)
    }
}

/// Portfolio-level totals.
///
/// Each total sums the present values of its own field, so a row missing
/// a price still contributes its cost while staying out of value and
/// gain.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_cost: Decimal,
    pub total_value: Decimal,
    pub total_gain_loss: Decimal,
    /// Overall return in percent, zero when total cost is zero.
    pub total_return_pct: Decimal,
    pub holdings_count: usize,
}

/// Full valuation output: rows, totals, and the display partitions.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuation {
    pub rows: Vec<HoldingRow>,
    pub summary: PortfolioSummary,
    /// Rows with positive gain, sorted descending by gain.
    pub winners: Vec<HoldingRow>,
    /// Rows with negative gain, sorted ascending (worst first).
    pub losers: Vec<HoldingRow>,
    /// Rows at or above the alert threshold return.
    pub alert_gainers: Vec<HoldingRow>,
    /// Rows at or below the negated alert threshold return.
    pub alert_losers: Vec<HoldingRow>,
}
