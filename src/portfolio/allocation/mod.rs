pub mod allocation_model;
pub mod allocation_service;

pub use allocation_model::{GroupAllocation, PortfolioDistribution};
pub use allocation_service::{AllocationService, GroupBy};
