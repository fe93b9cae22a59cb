//! Error types for the quoting engine

use thiserror::Error;

/// Errors surfaced by pricing, solving and market-data access.
///
/// Solver divergence and budget exhaustion are deliberately *not* errors;
/// they are terminal states on [`crate::models::IvSolution`] so that callers
/// can branch on them without unwinding.
#[derive(Error, Debug)]
pub enum PricingError {
    /// Domain violation on a pricing input (S, K, T or sigma out of range,
    /// malformed ticker or expiry). Never recovered internally.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The market-data collaborator returned nothing usable.
    #[error("Data error: {0}")]
    Data(String),

    /// Transport failure talking to the market-data collaborator.
    #[error("Network error: {0}")]
    Network(String),
}

pub type PricingResult<T> = Result<T, PricingError>;

impl PricingError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }
}
