//! Turns raw statement bytes into validated holding inputs.

use log::{debug, warn};

use crate::errors::Result;

use super::columns::{StatementField, StatementProfile};
use super::csv_parser::parse_csv;
use super::statement_model::{parse_decimal_cell, HoldingInput};
use super::StatementError;

/// Result of importing one statement upload.
#[derive(Debug, Clone)]
pub struct ImportedStatement {
    pub profile: StatementProfile,
    pub holdings: Vec<HoldingInput>,
}

#[derive(Debug, Default)]
pub struct StatementImportService;

impl StatementImportService {
    pub fn new() -> Self {
        Self
    }

    /// Parses, validates, and maps a statement file.
    ///
    /// Fails before any mapping when required columns are absent; rows
    /// without a symbol are skipped, and unparseable numeric cells map to
    /// missing values.
    pub fn import(&self, content: &[u8]) -> Result<ImportedStatement> {
        let parsed = parse_csv(content)?;

        let profile = StatementProfile::detect(&parsed.headers);
        profile.validate(&parsed.headers)?;
        debug!("importing statement with {:?} layout, {} rows", profile, parsed.rows.len());

        let indexes = profile.field_indexes(&parsed.headers);
        let cell = |row: &[String], field: StatementField| -> Option<String> {
            indexes
                .get(&field)
                .and_then(|idx| row.get(*idx))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut holdings = Vec::with_capacity(parsed.rows.len());
        for (idx, row) in parsed.rows.iter().enumerate() {
            let Some(symbol) = cell(row, StatementField::Symbol) else {
                warn!("skipping statement row {} without a symbol", idx + 2);
                continue;
            };

            let numeric =
                |field: StatementField| cell(row, field).and_then(|v| parse_decimal_cell(&v));

            holdings.push(HoldingInput {
                symbol,
                company: cell(row, StatementField::Company),
                sector: None,
                quantity: numeric(StatementField::Quantity),
                average_cost: numeric(StatementField::AverageCost),
                market_price: numeric(StatementField::MarketPrice),
                pledged: numeric(StatementField::Pledged),
                unsettled_buy: numeric(StatementField::UnsettledBuy),
                unsettled_sell: numeric(StatementField::UnsettledSell),
                closing_price: numeric(StatementField::ClosingPrice),
            });
        }

        if holdings.is_empty() {
            return Err(StatementError::Empty.into());
        }

        Ok(ImportedStatement { profile, holdings })
    }
}
