pub mod report_model;
pub mod report_service;

// Re-export the main public entry points and types
pub use report_model::{PortfolioReport, ReportRow};
pub use report_service::ReportService;
