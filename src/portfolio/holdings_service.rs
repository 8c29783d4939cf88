//! Valuation of imported holdings: derived fields, totals, partitions.

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{DEFAULT_ALERT_THRESHOLD_PCT, DISPLAY_DECIMAL_PRECISION};
use crate::portfolio::holdings_model::{HoldingRow, PortfolioSummary, PortfolioValuation};
use crate::portfolio::statement::HoldingInput;
use crate::quotes::QuoteService;

/// Tunable valuation options.
#[derive(Debug, Clone)]
pub struct HoldingsOptions {
    /// Return% cutoff for the alert buckets, applied symmetrically.
    pub alert_threshold_pct: Decimal,
}

impl Default for HoldingsOptions {
    fn default() -> Self {
        Self {
            alert_threshold_pct: Decimal::from(DEFAULT_ALERT_THRESHOLD_PCT),
        }
    }
}

/// Computes per-row derived fields, portfolio totals, and the
/// winner/loser and alert partitions.
pub struct HoldingsService {
    options: HoldingsOptions,
}

impl HoldingsService {
    pub fn new() -> Self {
        Self::with_options(HoldingsOptions::default())
    }

    pub fn with_options(options: HoldingsOptions) -> Self {
        Self { options }
    }

    /// Values holdings using only the prices the statement carried.
    pub fn value_holdings(&self, inputs: Vec<HoldingInput>) -> PortfolioValuation {
        let rows: Vec<HoldingRow> = inputs.into_iter().map(derive_row).collect();
        self.assemble(rows)
    }

    /// Values holdings, filling missing prices and sectors from the
    /// quote service. Lookups run serially and a failed lookup leaves
    /// that row's derived fields missing.
    pub async fn value_with_quotes(
        &self,
        inputs: Vec<HoldingInput>,
        quotes: &QuoteService,
    ) -> PortfolioValuation {
        let mut enriched = Vec::with_capacity(inputs.len());
        for mut input in inputs {
            if input.market_price.is_none() || input.sector.is_none() {
                let lookup = quotes.lookup(&input.symbol).await;
                if input.market_price.is_none() {
                    input.market_price = lookup.close;
                }
                if input.sector.is_none() {
                    input.sector = lookup.sector;
                }
            }
            enriched.push(derive_row(input));
        }
        self.assemble(enriched)
    }

    fn assemble(&self, rows: Vec<HoldingRow>) -> PortfolioValuation {
        let summary = summarize(&rows);
        debug!(
            "valued {} holdings: cost {}, value {}, gain {}",
            summary.holdings_count, summary.total_cost, summary.total_value, summary.total_gain_loss
        );

        let mut winners: Vec<HoldingRow> = rows.iter().filter(|r| r.is_winner()).cloned().collect();
        winners.sort_by(|a, b| b.gain_loss.cmp(&a.gain_loss));

        let mut losers: Vec<HoldingRow> = rows.iter().filter(|r| r.is_loser()).cloned().collect();
        losers.sort_by(|a, b| a.gain_loss.cmp(&b.gain_loss));

        let threshold = self.options.alert_threshold_pct;
        let alert_gainers: Vec<HoldingRow> = rows
            .iter()
            .filter(|r| matches!(r.return_pct, Some(p) if p >= threshold))
            .cloned()
            .collect();
        let alert_losers: Vec<HoldingRow> = rows
            .iter()
            .filter(|r| matches!(r.return_pct, Some(p) if p <= -threshold))
            .cloned()
            .collect();

        PortfolioValuation {
            rows,
            summary,
            winners,
            losers,
            alert_gainers,
            alert_losers,
        }
    }
}

impl Default for HoldingsService {
    fn default() -> Self {
        Self::new()
    }
}

/// Derives the P&L fields for one holding.
fn derive_row(input: HoldingInput) -> HoldingRow {
    let cost_basis = match (input.quantity, input.average_cost) {
        (Some(quantity), Some(cost)) => Some(quantity * cost),
        _ => None,
    };
    let market_value = match (input.quantity, input.market_price) {
        (Some(quantity), Some(price)) => Some(quantity * price),
        _ => None,
    };
    let gain_loss = match (market_value, cost_basis) {
        (Some(value), Some(cost)) => Some(value - cost),
        _ => None,
    };
    let return_pct = match (gain_loss, cost_basis) {
        (Some(_), Some(cost)) if cost.is_zero() => Some(Decimal::ZERO),
        (Some(gain), Some(cost)) => {
            Some((gain / cost * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION))
        }
        _ => None,
    };

    HoldingRow {
        symbol: input.symbol,
        company: input.company,
        sector: input.sector,
        quantity: input.quantity,
        average_cost: input.average_cost,
        market_price: input.market_price,
        cost_basis,
        market_value,
        gain_loss,
        return_pct,
    }
}

/// Sums each derived field over the rows where it is present.
fn summarize(rows: &[HoldingRow]) -> PortfolioSummary {
    let total_cost: Decimal = rows.iter().filter_map(|r| r.cost_basis).sum();
    let total_value: Decimal = rows.iter().filter_map(|r| r.market_value).sum();
    let total_gain_loss: Decimal = rows.iter().filter_map(|r| r.gain_loss).sum();

    let total_return_pct = if total_cost.is_zero() {
        Decimal::ZERO
    } else {
        (total_gain_loss / total_cost * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION)
    };

    PortfolioSummary {
        total_cost,
        total_value,
        total_gain_loss,
        total_return_pct,
        holdings_count: rows.len(),
    }
}
