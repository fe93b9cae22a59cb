//! Implied volatility solver
//!
//! Newton-Raphson on sigma with vega as the derivative. Each iteration
//! reprices through the Black-Scholes engine at the current guess; the loop
//! is bounded, synchronous and pure, so market data must be resolved *before*
//! calling in and held fixed for the duration.
//!
//! Termination is an explicit state, not a convention: a result is either
//! [`SolverStatus::Converged`], ran out of budget
//! ([`SolverStatus::MaxIterationsExceeded`]), or left the feasible region
//! ([`SolverStatus::Diverged`]). Callers must branch on the status rather
//! than trusting the returned sigma unconditionally.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{OptionType, PricingError, PricingInputs, PricingResult};
use crate::models::black_scholes;

/// Vega magnitudes below this make the Newton step meaningless.
const MIN_VEGA: f64 = 1e-12;

/// Solver tuning parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IvParams {
    /// Starting volatility guess
    pub initial_guess: f64,
    /// Convergence tolerance, applied to both the sigma step and the price
    /// residual
    pub tolerance: f64,
    /// Iteration budget
    pub max_iterations: usize,
}

impl Default for IvParams {
    fn default() -> Self {
        Self {
            initial_guess: 0.2,
            tolerance: 1e-8,
            max_iterations: 100,
        }
    }
}

/// Terminal state of a solve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverStatus {
    /// The sigma step or the price residual fell below tolerance
    Converged,
    /// Iteration budget exhausted; the sigma carried alongside is the last
    /// guess, not a validated answer
    MaxIterationsExceeded,
    /// Vega vanished or the next guess left (0, inf); Newton cannot proceed
    Diverged,
}

/// Outcome of an implied-volatility solve
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IvSolution {
    /// Last computed volatility. Only meaningful when `status` is
    /// [`SolverStatus::Converged`].
    pub vol: f64,
    pub status: SolverStatus,
    /// Newton iterations performed
    pub iterations: usize,
}

impl IvSolution {
    pub fn is_converged(&self) -> bool {
        self.status == SolverStatus::Converged
    }
}

/// Solve for the volatility that reprices `market_price`.
///
/// Input violations (non-positive market price or guess, out-of-domain
/// pricing inputs) are errors; divergence and budget exhaustion are reported
/// through the returned [`IvSolution`] so the caller can branch on them.
pub fn solve_implied_vol(
    option_type: OptionType,
    market_price: f64,
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    rate: f64,
    params: &IvParams,
) -> PricingResult<IvSolution> {
    if !market_price.is_finite() || market_price <= 0.0 {
        return Err(PricingError::invalid_input(format!(
            "Market price must be positive, got {}",
            market_price
        )));
    }
    if !params.initial_guess.is_finite() || params.initial_guess <= 0.0 {
        return Err(PricingError::invalid_input(format!(
            "Initial guess must be positive, got {}",
            params.initial_guess
        )));
    }

    let base = PricingInputs::new(spot, strike, time_to_expiry, rate, params.initial_guess);
    base.validate()?;

    let mut vol = params.initial_guess;

    for i in 1..=params.max_iterations {
        let inputs = base.with_vol(vol);
        let prices = black_scholes::price(&inputs)?;
        let pair = black_scholes::greeks(&inputs)?;

        let theoretical = match option_type {
            OptionType::Call => prices.call,
            OptionType::Put => prices.put,
        };
        // Vega is shared by call and put
        let vega = pair.call.vega;

        if !vega.is_finite() || vega.abs() < MIN_VEGA {
            debug!(vol, vega, iteration = i, "vega collapsed, aborting solve");
            return Ok(IvSolution {
                vol,
                status: SolverStatus::Diverged,
                iterations: i,
            });
        }

        let residual = theoretical - market_price;
        let next_vol = vol - residual / vega;

        if !next_vol.is_finite() || next_vol <= 0.0 {
            debug!(
                vol,
                next_vol,
                iteration = i,
                "Newton step left the feasible region"
            );
            return Ok(IvSolution {
                vol,
                status: SolverStatus::Diverged,
                iterations: i,
            });
        }

        let repriced = black_scholes::price(&base.with_vol(next_vol))?;
        let repriced = match option_type {
            OptionType::Call => repriced.call,
            OptionType::Put => repriced.put,
        };

        if (vol - next_vol).abs() < params.tolerance
            || (repriced - market_price).abs() < params.tolerance
        {
            debug!(vol = next_vol, iterations = i, "implied vol converged");
            return Ok(IvSolution {
                vol: next_vol,
                status: SolverStatus::Converged,
                iterations: i,
            });
        }

        vol = next_vol;
    }

    Ok(IvSolution {
        vol,
        status: SolverStatus::MaxIterationsExceeded,
        iterations: params.max_iterations,
    })
}
