//! Yahoo Finance data fetcher
//!
//! Fetches the latest close for an underlying and the Treasury yield indices
//! backing the maturity buckets. Uses Yahoo Finance's unofficial API.
//!
//! Note: Yahoo Finance data is delayed ~15 minutes and intended for
//! personal/research use.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{PricingError, PricingResult};
use crate::data::MaturityBucket;

/// Read-only market data the pricing core consumes.
///
/// The spot lookup has no fallback: without an underlying price there is
/// nothing to price, so failures propagate. Yield lookups are wrapped by
/// [`crate::data::resolve_rate`], which degrades to a default on error.
pub trait MarketData {
    /// Latest close for an underlying symbol
    fn latest_close(&self, symbol: &str) -> PricingResult<SpotQuote>;

    /// Latest yield for a maturity bucket, as a percentage (e.g. 4.35)
    fn latest_yield(&self, bucket: MaturityBucket) -> PricingResult<f64>;
}

/// Latest observed price for a symbol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotQuote {
    pub symbol: String,
    pub price: f64,
    pub timestamp: DateTime<Utc>,
}

/// Yahoo Finance API client
pub struct YahooClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl YahooClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: "https://query1.finance.yahoo.com/v7/finance".to_string(),
        }
    }

    fn fetch_quote(&self, symbol: &str) -> PricingResult<SpotQuote> {
        let url = format!("{}/quote?symbols={}", self.base_url, symbol);

        let response: YahooQuoteResponse = self
            .client
            .get(&url)
            .send()
            .map_err(|e| PricingError::Network(e.to_string()))?
            .json()
            .map_err(|e| PricingError::Data(format!("Failed to parse quote: {}", e)))?;

        let result = response
            .quote_response
            .result
            .into_iter()
            .next()
            .ok_or_else(|| PricingError::data(format!("No quote data for {}", symbol)))?;

        let timestamp = result
            .regular_market_time
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .unwrap_or_else(Utc::now);

        Ok(SpotQuote {
            symbol: symbol.to_string(),
            price: result.regular_market_price,
            timestamp,
        })
    }
}

impl MarketData for YahooClient {
    fn latest_close(&self, symbol: &str) -> PricingResult<SpotQuote> {
        self.fetch_quote(symbol)
    }

    fn latest_yield(&self, bucket: MaturityBucket) -> PricingResult<f64> {
        self.fetch_quote(bucket.symbol()).map(|q| q.price)
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

// Yahoo Finance API response structures

#[derive(Debug, Deserialize)]
struct YahooQuoteResponse {
    #[serde(rename = "quoteResponse")]
    quote_response: YahooQuoteResult,
}

#[derive(Debug, Deserialize)]
struct YahooQuoteResult {
    result: Vec<YahooQuoteData>,
}

#[derive(Debug, Deserialize)]
struct YahooQuoteData {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: f64,
    #[serde(rename = "regularMarketTime")]
    regular_market_time: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore] // Requires network
    fn test_latest_close() {
        let client = YahooClient::new();
        let quote = client.latest_close("AAPL").unwrap();

        assert!(quote.price > 0.0);
        println!("AAPL close: {}", quote.price);
    }

    #[test]
    #[ignore] // Requires network
    fn test_latest_yield() {
        let client = YahooClient::new();
        let pct = client.latest_yield(MaturityBucket::TenYear).unwrap();

        // Sanity band for the 10Y yield in percent
        assert!(pct > 0.0 && pct < 20.0);
        println!("^TNX yield: {}%", pct);
    }
}
