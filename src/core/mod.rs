//! Core data types for the quoting engine
//!
//! Defines fundamental types:
//! - ContractSpec: Ticker, expiry, optional manual rate override
//! - PricingInputs: The (S, K, T, r, sigma) value tuple
//! - Quote: Prices and Greeks bundled with the inputs that produced them
//! - PricingError: Error taxonomy for the whole crate

pub mod contract;
pub mod error;
pub mod quote;

pub use contract::*;
pub use error::*;
pub use quote::*;
