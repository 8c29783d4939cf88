pub mod fear_service;
pub mod market_model;
pub mod noise;
pub mod sample;

// Re-export the main public entry points and types
pub use fear_service::FearIndexService;
pub use market_model::{MarketFearScore, MarketSnapshot, SectorFearScore, SectorSnapshot, Sentiment};
pub use noise::{FixedNoise, NoiseSource, SeededNoise, ThreadRngNoise};

#[cfg(test)]
mod fear_service_tests;
