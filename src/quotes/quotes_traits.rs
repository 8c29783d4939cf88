use async_trait::async_trait;

use super::quotes_errors::MarketDataError;
use super::quotes_model::{AssetProfile, Quote};

/// Seam to the external market-data provider.
///
/// Implementations fetch one symbol per call; the service layer decides
/// about caching and per-row degradation on failure.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;
    async fn asset_profile(&self, symbol: &str) -> Result<AssetProfile, MarketDataError>;
}
