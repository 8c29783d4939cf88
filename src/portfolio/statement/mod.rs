pub mod columns;
pub mod csv_parser;
pub mod import_service;
pub mod statement_model;

// Re-export the main public entry points and types
pub use columns::{StatementField, StatementProfile};
pub use csv_parser::{parse_csv, ParsedStatement};
pub use import_service::{ImportedStatement, StatementImportService};
pub use statement_model::{parse_decimal_cell, HoldingInput};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatementError {
    /// The statement lacks required columns; lists exactly the absent headers.
    #[error("Statement is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Statement file is empty or contains no data rows")]
    Empty,
}
