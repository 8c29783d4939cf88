use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use log::debug;
use reqwest::{header, Client};
use rust_decimal::Decimal;
use yahoo_finance_api as yahoo;

use super::quotes_errors::MarketDataError;
use super::quotes_model::{AssetProfile, Quote};
use super::quotes_traits::QuoteProvider;

const QUOTE_SUMMARY_URL: &str = "https://query1.finance.yahoo.com/v10/finance/quoteSummary";
const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko)";

/// Yahoo Finance implementation of [`QuoteProvider`].
///
/// Quotes go through the `yahoo_finance_api` connector; the sector comes
/// from the quoteSummary endpoint's `summaryProfile` module.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
    client: Client,
}

impl YahooProvider {
    pub fn new() -> Result<Self, MarketDataError> {
        let connector = yahoo::YahooConnector::new()?;
        Ok(Self {
            connector,
            client: Client::new(),
        })
    }
}

#[async_trait]
impl QuoteProvider for YahooProvider {
    async fn latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let response = self.connector.get_latest_quotes(symbol, "1d").await?;
        let yahoo_quote = response
            .last_quote()
            .map_err(|_| MarketDataError::NotFound(symbol.to_string()))?;

        let timestamp: DateTime<Utc> = Utc
            .timestamp_opt(yahoo_quote.timestamp as i64, 0)
            .single()
            .unwrap_or_default();

        let close = Decimal::from_f64_retain(yahoo_quote.close).ok_or_else(|| {
            MarketDataError::ParsingError(format!(
                "Close price {} for {} is not a finite number",
                yahoo_quote.close, symbol
            ))
        })?;

        debug!("yahoo quote for {}: close {} at {}", symbol, close, timestamp);

        Ok(Quote {
            symbol: symbol.to_string(),
            timestamp,
            close,
            currency: "SAR".to_string(),
        })
    }

    async fn asset_profile(&self, symbol: &str) -> Result<AssetProfile, MarketDataError> {
        let url = format!("{}/{}?modules=summaryProfile,price", QUOTE_SUMMARY_URL, symbol);

        let body: serde_json::Value = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let result = body
            .pointer("/quoteSummary/result/0")
            .ok_or_else(|| MarketDataError::NotFound(symbol.to_string()))?;

        let sector = result
            .pointer("/summaryProfile/sector")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let name = result
            .pointer("/price/longName")
            .or_else(|| result.pointer("/price/shortName"))
            .and_then(|v| v.as_str())
            .map(str::to_string);

        Ok(AssetProfile {
            symbol: symbol.to_string(),
            name,
            sector,
        })
    }
}
