//! Risk-free rate selection
//!
//! Maps a time-to-expiry onto a Treasury yield index of comparable maturity
//! and resolves the rate through a [`MarketData`] provider. A manual override
//! on the contract bypasses the lookup entirely; a failed or empty lookup
//! degrades to [`DEFAULT_RATE`] rather than failing the pricing session.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::ContractSpec;
use crate::data::MarketData;

/// Fallback annual rate when no live yield is available
pub const DEFAULT_RATE: f64 = 0.02;

/// Treasury maturity bucket keyed by time-to-expiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaturityBucket {
    /// 13-week bill (T <= 0.25y)
    ThirteenWeek,
    /// 5-year note (0.25y < T <= 2y)
    FiveYear,
    /// 10-year note (2y < T <= 10y)
    TenYear,
    /// 30-year bond (T > 10y)
    ThirtyYear,
}

impl MaturityBucket {
    /// Bucket for a time-to-expiry in years
    pub fn for_tenor(time_to_expiry: f64) -> Self {
        if time_to_expiry <= 0.25 {
            Self::ThirteenWeek
        } else if time_to_expiry <= 2.0 {
            Self::FiveYear
        } else if time_to_expiry <= 10.0 {
            Self::TenYear
        } else {
            Self::ThirtyYear
        }
    }

    /// Yahoo Finance index symbol for this bucket
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::ThirteenWeek => "^IRX",
            Self::FiveYear => "^FVX",
            Self::TenYear => "^TNX",
            Self::ThirtyYear => "^TYX",
        }
    }
}

/// Resolve the annual risk-free rate for a contract.
///
/// Order of precedence: manual override on the spec, then the live yield for
/// the maturity bucket (quoted as a percentage, divided by 100), then
/// [`DEFAULT_RATE`].
pub fn resolve_rate(provider: &impl MarketData, spec: &ContractSpec, time_to_expiry: f64) -> f64 {
    if let Some(rate) = spec.rate_override {
        return rate;
    }

    let bucket = MaturityBucket::for_tenor(time_to_expiry);
    match provider.latest_yield(bucket) {
        Ok(percent) => percent / 100.0,
        Err(e) => {
            warn!(
                symbol = bucket.symbol(),
                error = %e,
                "no live yield, falling back to default rate"
            );
            DEFAULT_RATE
        }
    }
}
