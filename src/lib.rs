//! # Vanilla Options - Black-Scholes Quoting Engine
//!
//! Prices European call/put options and their sensitivities under the
//! Black-Scholes model, and inverts market prices back into an implied
//! volatility via Newton-Raphson.
//!
//! ## Key Components
//!
//! - **Contract**: Immutable contract identity (ticker, expiry, optional
//!   manual rate override) with calendar time-to-expiry
//! - **Black-Scholes**: d1/d2, closed-form call/put prices, full Greeks
//! - **Implied Vol**: Newton-Raphson solver with an explicit terminal-state
//!   enum (converged / budget exhausted / diverged)
//! - **Market Data**: Yahoo Finance spot quotes and Treasury yields, with a
//!   maturity-bucket rate selector and a degrade-gracefully default rate
//!
//! ## Usage
//!
//! ```rust
//! use vanilla_options::prelude::*;
//!
//! let spec = ContractSpec::parse("AAPL", "2026-12-18", None).unwrap();
//! let inputs = PricingInputs::new(200.0, 200.0, 0.5, 0.02, 0.25);
//!
//! // Price and Greeks bundled into a quote
//! let quote = build_quote(&spec, &inputs).unwrap();
//! assert!(quote.prices.call > 0.0);
//!
//! // Invert the call price back into a volatility
//! let sol = solve_implied_vol(
//!     OptionType::Call,
//!     quote.prices.call,
//!     inputs.spot,
//!     inputs.strike,
//!     inputs.time_to_expiry,
//!     inputs.rate,
//!     &IvParams::default(),
//! )
//! .unwrap();
//! assert!(sol.is_converged());
//! ```
//!
//! ## What This Crate Does NOT Do
//!
//! - American early exercise (European only)
//! - Dividend adjustments
//! - Volatility-surface modelling or calibration
//! - Persistence or concurrent multi-contract pricing

pub mod core;
pub mod data;
pub mod models;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        ContractSpec, Greeks, OptionPrices, OptionType, PairGreeks, PricingError, PricingInputs,
        PricingResult, Quote,
    };

    // Market data
    pub use crate::data::{
        resolve_rate, MarketData, MaturityBucket, SpotQuote, YahooClient, DEFAULT_RATE,
    };

    // Models
    pub use crate::models::{
        // Black-Scholes
        build_quote,
        d1d2,
        greeks as bs_greeks,
        norm_cdf,
        norm_pdf,
        price as bs_price,

        // Implied vol solver
        solve_implied_vol,
        IvParams,
        IvSolution,
        SolverStatus,
    };
}

// Re-export main types at crate root
pub use crate::core::{PricingError, PricingResult};
pub use crate::models::{IvSolution, SolverStatus};
