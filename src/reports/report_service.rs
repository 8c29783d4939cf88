//! Builds the portfolio summary report and its plain-text rendering.

use std::fmt::Write as _;

use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::portfolio::holdings_model::PortfolioValuation;

use super::report_model::{PortfolioReport, ReportRow};

#[derive(Debug, Default)]
pub struct ReportService;

impl ReportService {
    pub fn new() -> Self {
        Self
    }

    /// Snapshots a valuation into the report shape.
    pub fn build_report(&self, valuation: &PortfolioValuation) -> PortfolioReport {
        let rows = valuation
            .rows
            .iter()
            .map(|row| ReportRow {
                symbol: row.symbol.clone(),
                company: row.company.clone(),
                sector: row.sector.clone(),
                quantity: row.quantity,
                average_cost: row.average_cost,
                market_price: row.market_price,
                market_value: row.market_value,
                gain_loss: row.gain_loss,
                return_pct: row.return_pct,
            })
            .collect();

        debug!("built report over {} holdings", valuation.rows.len());

        PortfolioReport {
            generated_at: Utc::now(),
            summary: valuation.summary.clone(),
            rows,
        }
    }

    /// Renders the report as a fixed-width text table.
    ///
    /// Missing values render blank; amounts carry thousands separators.
    pub fn render_text(&self, report: &PortfolioReport) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Portfolio Summary Report");
        let _ = writeln!(
            out,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M UTC")
        );
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Holdings: {}   Cost: {}   Value: {}   Gain/Loss: {}   Return: {}%",
            report.summary.holdings_count,
            format_amount(report.summary.total_cost),
            format_amount(report.summary.total_value),
            format_amount(report.summary.total_gain_loss),
            report.summary.total_return_pct
        );
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{:<10} {:>12} {:>12} {:>12} {:>14} {:>12} {:>9}",
            "Symbol", "Quantity", "Avg Cost", "Price", "Value", "Gain/Loss", "Return%"
        );
        let _ = writeln!(out, "{}", "-".repeat(86));

        for row in &report.rows {
            let _ = writeln!(
                out,
                "{:<10} {:>12} {:>12} {:>12} {:>14} {:>12} {:>9}",
                row.symbol,
                opt_amount(row.quantity),
                opt_amount(row.average_cost),
                opt_amount(row.market_price),
                opt_amount(row.market_value),
                opt_amount(row.gain_loss),
                row.return_pct.map(|p| p.to_string()).unwrap_or_default(),
            );
        }

        out
    }
}

/// Formats an amount with thousands separators, rounded for display.
fn format_amount(value: Decimal) -> String {
    let rendered = value.round_dp(DISPLAY_DECIMAL_PRECISION).to_string();
    let (number, fraction) = match rendered.split_once('.') {
        Some((int, frac)) => (int.to_string(), Some(frac.to_string())),
        None => (rendered, None),
    };
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match fraction {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

fn opt_amount(value: Option<Decimal>) -> String {
    value.map(format_amount).unwrap_or_default()
}
