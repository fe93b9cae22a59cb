//! Option contract identity
//!
//! A [`ContractSpec`] names *what* is being priced (ticker, expiry, optional
//! manual rate override) and is read-only after construction. Everything
//! numeric lives in [`crate::core::PricingInputs`], which is recomputed per
//! pricing request.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::error::{PricingError, PricingResult};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

/// Immutable contract identity for a pricing session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractSpec {
    /// Underlying ticker, normalized to uppercase
    pub ticker: String,
    /// Expiration date
    pub expiry: NaiveDate,
    /// Manual risk-free rate override (annual, decimal). When set, the
    /// maturity-bucket rate lookup is bypassed entirely.
    pub rate_override: Option<f64>,
}

impl ContractSpec {
    /// Create a contract spec, normalizing the ticker.
    pub fn new(
        ticker: impl Into<String>,
        expiry: NaiveDate,
        rate_override: Option<f64>,
    ) -> PricingResult<Self> {
        let ticker = ticker.into().trim().to_uppercase();
        if ticker.is_empty() {
            return Err(PricingError::invalid_input("Ticker must be non-empty"));
        }

        Ok(Self {
            ticker,
            expiry,
            rate_override,
        })
    }

    /// Create a contract spec from an ISO `YYYY-MM-DD` expiry string.
    pub fn parse(
        ticker: impl Into<String>,
        expiry: &str,
        rate_override: Option<f64>,
    ) -> PricingResult<Self> {
        let expiry = expiry
            .trim()
            .parse::<NaiveDate>()
            .map_err(|e| PricingError::invalid_input(format!("Bad expiry '{}': {}", expiry, e)))?;
        Self::new(ticker, expiry, rate_override)
    }

    /// Time to expiry in years from the given date, as whole days / 365.
    ///
    /// Zero or negative values are valid returns (expired or same-day
    /// contract); callers must reject non-positive T before pricing.
    pub fn time_to_expiry(&self, as_of: NaiveDate) -> f64 {
        let days = (self.expiry - as_of).num_days();
        days as f64 / 365.0
    }

    /// Time to expiry from today (UTC)
    pub fn time_to_expiry_now(&self) -> f64 {
        self.time_to_expiry(Utc::now().date_naive())
    }
}
