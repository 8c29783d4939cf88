pub mod allocation;
pub mod holdings_model;
pub mod holdings_service;
pub mod statement;

// Re-export the main public entry points and types
pub use allocation::{AllocationService, GroupBy, PortfolioDistribution};
pub use holdings_model::{HoldingRow, PortfolioSummary, PortfolioValuation};
pub use holdings_service::{HoldingsOptions, HoldingsService};
pub use statement::{HoldingInput, StatementImportService};
