//! Tadawul Insight Core - market sentiment scoring and portfolio analysis.
//!
//! This crate contains the computation core behind the Saudi-market
//! dashboards: the fear index (market and per-sector sentiment scores)
//! and the portfolio analyzer (brokerage-statement import, P&L
//! aggregation, sector distribution, summary reports).
//!
//! Presentation concerns (gauges, tables, pie charts, PDF rendering)
//! live outside this crate; it produces the values those collaborators
//! render.

pub mod constants;
pub mod errors;
pub mod market;
pub mod portfolio;
pub mod quotes;
pub mod reports;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

// Re-export the main public entry points
pub use market::{FearIndexService, MarketSnapshot, SectorSnapshot, Sentiment};
pub use portfolio::{HoldingsService, PortfolioValuation, StatementImportService};
