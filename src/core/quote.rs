//! Pricing inputs and the quote record
//!
//! [`PricingInputs`] is the (S, K, T, r, sigma) tuple every model operation
//! consumes; [`Quote`] bundles inputs, theoretical prices and Greeks into a
//! single immutable record for presentation layers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{PricingError, PricingResult};

/// Numeric inputs for a single pricing request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingInputs {
    /// Underlying price S
    pub spot: f64,
    /// Strike K
    pub strike: f64,
    /// Time to expiry T in years
    pub time_to_expiry: f64,
    /// Risk-free rate r (annual, decimal)
    pub rate: f64,
    /// Volatility sigma (annual, decimal)
    pub vol: f64,
}

impl PricingInputs {
    pub fn new(spot: f64, strike: f64, time_to_expiry: f64, rate: f64, vol: f64) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry,
            rate,
            vol,
        }
    }

    /// Reject inputs outside the Black-Scholes domain.
    ///
    /// S, K, T and sigma must all be strictly positive (they appear inside
    /// logs and denominators); the rate may be any real. Expired contracts
    /// (T <= 0) are rejected here rather than clamped.
    pub fn validate(&self) -> PricingResult<()> {
        if !self.spot.is_finite() || self.spot <= 0.0 {
            return Err(PricingError::invalid_input(format!(
                "Spot must be positive, got {}",
                self.spot
            )));
        }
        if !self.strike.is_finite() || self.strike <= 0.0 {
            return Err(PricingError::invalid_input(format!(
                "Strike must be positive, got {}",
                self.strike
            )));
        }
        if !self.time_to_expiry.is_finite() || self.time_to_expiry <= 0.0 {
            return Err(PricingError::invalid_input(format!(
                "Time to expiry must be positive, got {}",
                self.time_to_expiry
            )));
        }
        if !self.rate.is_finite() {
            return Err(PricingError::invalid_input("Rate must be finite"));
        }
        if !self.vol.is_finite() || self.vol <= 0.0 {
            return Err(PricingError::invalid_input(format!(
                "Volatility must be positive, got {}",
                self.vol
            )));
        }
        Ok(())
    }

    /// Copy with a different volatility (used by the implied-vol solver)
    pub fn with_vol(&self, vol: f64) -> Self {
        Self { vol, ..*self }
    }
}

/// Theoretical call and put prices for one set of inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionPrices {
    pub call: f64,
    pub put: f64,
}

/// Option Greeks (per-unit sensitivities)
///
/// No display rescaling is applied: vega is per unit of sigma, theta per
/// year, rho per unit of rate. Callers rescale for presentation if needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// dV/dS (sensitivity to spot)
    pub delta: f64,
    /// d2V/dS2 (sensitivity of delta to spot)
    pub gamma: f64,
    /// dV/dsigma (sensitivity to volatility)
    pub vega: f64,
    /// dV/dt (time decay, per year)
    pub theta: f64,
    /// dV/dr (sensitivity to interest rate)
    pub rho: f64,
}

/// Greeks for both sides of the contract
///
/// Gamma and vega are identical for call and put under Black-Scholes; the
/// pair is kept anyway so each side reads as a complete record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairGreeks {
    pub call: Greeks,
    pub put: Greeks,
}

/// A fully priced quote, immutable once built
///
/// Echoes the contract identity and the exact inputs used, so a consumer can
/// always tell which (S, K, T, r, sigma) produced the numbers it is reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Underlying ticker
    pub ticker: String,
    /// Expiration date
    pub expiry: NaiveDate,
    /// Inputs this quote was priced at
    pub inputs: PricingInputs,
    /// Theoretical prices
    pub prices: OptionPrices,
    /// Greeks for call and put
    pub greeks: PairGreeks,
}
