use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::holdings_model::PortfolioSummary;

/// One holding line of the summary report.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub symbol: String,
    pub company: Option<String>,
    pub sector: Option<String>,
    pub quantity: Option<Decimal>,
    pub average_cost: Option<Decimal>,
    pub market_price: Option<Decimal>,
    pub market_value: Option<Decimal>,
    pub gain_loss: Option<Decimal>,
    pub return_pct: Option<Decimal>,
}

/// Structured summary handed to the document-generation collaborator.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReport {
    pub generated_at: DateTime<Utc>,
    pub summary: PortfolioSummary,
    pub rows: Vec<ReportRow>,
}
