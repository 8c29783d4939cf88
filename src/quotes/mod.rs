pub mod quote_cache;
pub mod quotes_errors;
pub mod quotes_model;
pub mod quotes_service;
pub mod quotes_traits;
pub mod yahoo_provider;

// Re-export the public interface
pub use quote_cache::TtlCache;
pub use quotes_errors::MarketDataError;
pub use quotes_model::{AssetProfile, Quote, SymbolLookup};
pub use quotes_service::QuoteService;
pub use quotes_traits::QuoteProvider;
pub use yahoo_provider::YahooProvider;
