//! Pricing models
//!
//! Implements:
//! - Black-Scholes (closed-form prices, Greeks, quote assembly)
//! - Implied volatility (Newton-Raphson with explicit terminal states)

pub mod black_scholes;
pub mod implied_vol;

pub use black_scholes::*;
pub use implied_vol::*;
