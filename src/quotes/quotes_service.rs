//! Cached quote and profile lookups.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};

use crate::constants::DEFAULT_QUOTE_TTL_SECS;

use super::quote_cache::TtlCache;
use super::quotes_errors::MarketDataError;
use super::quotes_model::{AssetProfile, Quote, SymbolLookup};
use super::quotes_traits::QuoteProvider;

/// Provider plus TTL caches, with refresh-on-miss-or-expiry.
///
/// Lookups are issued serially, one call per symbol, and a failure for
/// one symbol degrades that symbol's result instead of failing the batch.
pub struct QuoteService {
    provider: Arc<dyn QuoteProvider>,
    quotes: TtlCache<Quote>,
    profiles: TtlCache<AssetProfile>,
}

impl QuoteService {
    pub fn new(provider: Arc<dyn QuoteProvider>) -> Self {
        Self::with_ttl(provider, DEFAULT_QUOTE_TTL_SECS)
    }

    pub fn with_ttl(provider: Arc<dyn QuoteProvider>, ttl_secs: u64) -> Self {
        Self {
            provider,
            quotes: TtlCache::new(ttl_secs),
            profiles: TtlCache::new(ttl_secs),
        }
    }

    /// Latest quote for a symbol, served from cache while fresh.
    pub async fn latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        if let Some(quote) = self.quotes.get(symbol) {
            debug!("quote cache hit for {}", symbol);
            return Ok(quote);
        }

        let quote = self.provider.latest_quote(symbol).await?;
        self.quotes.insert(symbol, quote.clone());
        Ok(quote)
    }

    /// Asset profile for a symbol, served from cache while fresh.
    pub async fn asset_profile(&self, symbol: &str) -> Result<AssetProfile, MarketDataError> {
        if let Some(profile) = self.profiles.get(symbol) {
            debug!("profile cache hit for {}", symbol);
            return Ok(profile);
        }

        let profile = self.provider.asset_profile(symbol).await?;
        self.profiles.insert(symbol, profile.clone());
        Ok(profile)
    }

    /// Degraded lookup of close price and sector for one symbol.
    pub async fn lookup(&self, symbol: &str) -> SymbolLookup {
        let close = match self.latest_quote(symbol).await {
            Ok(quote) => Some(quote.close),
            Err(e) => {
                warn!("no price for {}: {}", symbol, e);
                None
            }
        };

        let sector = match self.asset_profile(symbol).await {
            Ok(profile) => profile.sector,
            Err(e) => {
                warn!("no profile for {}: {}", symbol, e);
                None
            }
        };

        SymbolLookup { close, sector }
    }

    /// Serial lookup over a batch of symbols.
    pub async fn lookup_all(&self, symbols: &[String]) -> HashMap<String, SymbolLookup> {
        let mut results = HashMap::with_capacity(symbols.len());
        for symbol in symbols {
            let lookup = self.lookup(symbol).await;
            results.insert(symbol.clone(), lookup);
        }
        results
    }
}
