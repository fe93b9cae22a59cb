//! Market data access
//!
//! Handles:
//! - Yahoo Finance quotes for the underlying and Treasury yield indices
//! - Maturity-bucket selection for the risk-free rate, with a fixed
//!   default when live data is unavailable

pub mod rates;
pub mod yahoo;

pub use rates::*;
pub use yahoo::*;
