//! Black-Scholes Model
//!
//! Provides:
//! - d1/d2 intermediate terms
//! - Closed-form European call/put prices
//! - Full Greeks (delta, gamma, vega, theta, rho) for both sides
//! - Quote assembly bundling inputs, prices and Greeks
//!
//! Every operation is a pure function of its [`PricingInputs`]; domain
//! violations surface as `InvalidInput`, never as NaN or a silent clamp.
//! The normal CDF goes through `statrs` (erf-based): implied-vol
//! round-trips need its accuracy, a coarse polynomial approximation
//! would break their convergence.

use statrs::distribution::{ContinuousCDF, Normal};
use std::f64::consts::PI;

use crate::core::{
    ContractSpec, Greeks, OptionPrices, PairGreeks, PricingInputs, PricingResult, Quote,
};

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes d1 and d2 terms
///
/// d1 = (ln(S/K) + (r + sigma^2/2) T) / (sigma sqrt(T)), d2 = d1 - sigma sqrt(T).
pub fn d1d2(inputs: &PricingInputs) -> PricingResult<(f64, f64)> {
    inputs.validate()?;

    let sqrt_t = inputs.time_to_expiry.sqrt();
    let d1 = ((inputs.spot / inputs.strike).ln()
        + (inputs.rate + 0.5 * inputs.vol * inputs.vol) * inputs.time_to_expiry)
        / (inputs.vol * sqrt_t);
    let d2 = d1 - inputs.vol * sqrt_t;

    Ok((d1, d2))
}

/// Black-Scholes European call and put prices
pub fn price(inputs: &PricingInputs) -> PricingResult<OptionPrices> {
    let (d1, d2) = d1d2(inputs)?;
    let df = (-inputs.rate * inputs.time_to_expiry).exp();

    let call = inputs.spot * norm_cdf(d1) - inputs.strike * df * norm_cdf(d2);
    let put = inputs.strike * df * norm_cdf(-d2) - inputs.spot * norm_cdf(-d1);

    Ok(OptionPrices { call, put })
}

/// Black-Scholes Greeks for both call and put
///
/// Gamma and vega are shared by the two sides; delta, theta and rho differ.
/// All values are per-unit sensitivities (vega per unit sigma, theta per
/// year, rho per unit rate).
pub fn greeks(inputs: &PricingInputs) -> PricingResult<PairGreeks> {
    let (d1, d2) = d1d2(inputs)?;
    let df = (-inputs.rate * inputs.time_to_expiry).exp();
    let sqrt_t = inputs.time_to_expiry.sqrt();
    let pdf_d1 = norm_pdf(d1);

    let delta_call = norm_cdf(d1);
    let delta_put = -norm_cdf(-d1);

    // Shared between call and put
    let gamma = pdf_d1 / (inputs.spot * inputs.vol * sqrt_t);
    let vega = inputs.spot * pdf_d1 * sqrt_t;

    let decay = -(inputs.spot * pdf_d1 * inputs.vol) / (2.0 * sqrt_t);
    let theta_call = decay - inputs.rate * inputs.strike * df * norm_cdf(d2);
    let theta_put = decay + inputs.rate * inputs.strike * df * norm_cdf(-d2);

    let rho_call = inputs.strike * inputs.time_to_expiry * df * norm_cdf(d2);
    let rho_put = -inputs.strike * inputs.time_to_expiry * df * norm_cdf(-d2);

    Ok(PairGreeks {
        call: Greeks {
            delta: delta_call,
            gamma,
            vega,
            theta: theta_call,
            rho: rho_call,
        },
        put: Greeks {
            delta: delta_put,
            gamma,
            vega,
            theta: theta_put,
            rho: rho_put,
        },
    })
}

/// Assemble a full quote: prices plus Greeks, tagged with the contract
/// identity and the inputs used.
///
/// Pure composition of [`price`] and [`greeks`]; domain errors from either
/// propagate unchanged.
pub fn build_quote(spec: &ContractSpec, inputs: &PricingInputs) -> PricingResult<Quote> {
    let prices = price(inputs)?;
    let greeks = greeks(inputs)?;

    Ok(Quote {
        ticker: spec.ticker.clone(),
        expiry: spec.expiry,
        inputs: *inputs,
        prices,
        greeks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PricingError;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn reference_inputs() -> PricingInputs {
        PricingInputs::new(200.0, 200.0, 0.5, 0.02, 0.25)
    }

    #[test]
    fn test_norm_cdf() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-10);
        assert!((norm_cdf(1.96) - 0.975).abs() < 0.001);
        assert!((norm_cdf(-1.96) - 0.025).abs() < 0.001);
        // Symmetry
        assert!((norm_cdf(0.7) + norm_cdf(-0.7) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_d1d2() {
        let (d1, d2) = d1d2(&reference_inputs()).unwrap();
        // (0 + (0.02 + 0.03125) * 0.5) / (0.25 * sqrt(0.5))
        assert_relative_eq!(d1, 0.144_956_9, epsilon = 1e-6);
        assert_relative_eq!(d2, d1 - 0.25 * 0.5_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_reference_prices() {
        let prices = price(&reference_inputs()).unwrap();

        // Exact values from the closed form at S=K=200, T=0.5, r=2%, vol=25%
        assert_relative_eq!(prices.call, 15.0337, epsilon = 1e-3);
        assert_relative_eq!(prices.put, 13.0437, epsilon = 1e-3);
    }

    #[test]
    fn test_known_atm_benchmark() {
        // Classic textbook fixture: S=K=100, r=5%, vol=20%, T=1 -> 10.4506
        let inputs = PricingInputs::new(100.0, 100.0, 1.0, 0.05, 0.20);
        let prices = price(&inputs).unwrap();
        assert_relative_eq!(prices.call, 10.4506, epsilon = 1e-4);
        assert_relative_eq!(prices.put, 5.5735, epsilon = 1e-4);
    }

    #[test]
    fn test_put_call_parity() {
        let cases = [
            (200.0, 200.0, 0.5, 0.02, 0.25),
            (100.0, 110.0, 0.25, 0.05, 0.40),
            (50.0, 45.0, 2.0, -0.01, 0.15),
            (500.0, 480.0, 1.5, 0.03, 0.60),
        ];

        for (s, k, t, r, vol) in cases {
            let inputs = PricingInputs::new(s, k, t, r, vol);
            let prices = price(&inputs).unwrap();
            let forward_value = s - k * (-r * t).exp();
            assert!(
                (prices.call - prices.put - forward_value).abs() < 1e-6,
                "parity violated at {:?}",
                inputs
            );
        }
    }

    #[test]
    fn test_no_arbitrage_bounds() {
        let cases = [
            (200.0, 200.0, 0.5, 0.02, 0.25),
            (100.0, 150.0, 0.1, 0.04, 0.80),
            (300.0, 100.0, 3.0, 0.01, 0.10),
        ];

        for (s, k, t, r, vol) in cases {
            let inputs = PricingInputs::new(s, k, t, r, vol);
            let prices = price(&inputs).unwrap();
            let df_strike = k * (-r * t).exp();

            assert!(prices.call >= (s - df_strike).max(0.0) - 1e-12);
            assert!(prices.call <= s);
            assert!(prices.put >= (df_strike - s).max(0.0) - 1e-12);
            assert!(prices.put <= df_strike);
        }
    }

    #[test]
    fn test_reference_greeks() {
        let pair = greeks(&reference_inputs()).unwrap();

        assert_relative_eq!(pair.call.delta, 0.557_63, epsilon = 1e-4);
        assert_relative_eq!(pair.call.gamma, 0.011_166, epsilon = 1e-5);
        assert_relative_eq!(pair.call.vega, 55.830, epsilon = 1e-2);
        assert_relative_eq!(pair.call.theta, -15.887, epsilon = 1e-2);
        assert_relative_eq!(pair.call.rho, 48.246, epsilon = 1e-2);
    }

    #[test]
    fn test_delta_parity_and_shared_sensitivities() {
        let cases = [
            (200.0, 200.0, 0.5, 0.02, 0.25),
            (100.0, 80.0, 1.0, 0.05, 0.35),
            (75.0, 90.0, 0.3, 0.00, 0.50),
        ];

        for (s, k, t, r, vol) in cases {
            let pair = greeks(&PricingInputs::new(s, k, t, r, vol)).unwrap();

            // delta_call - delta_put = 1 everywhere
            assert!((pair.call.delta - pair.put.delta - 1.0).abs() < 1e-12);

            // Gamma and vega are bit-identical across the pair
            assert_eq!(pair.call.gamma.to_bits(), pair.put.gamma.to_bits());
            assert_eq!(pair.call.vega.to_bits(), pair.put.vega.to_bits());

            assert!(pair.call.gamma > 0.0);
            assert!(pair.call.vega > 0.0);
        }
    }

    #[test]
    fn test_call_price_monotone_in_vol() {
        // Vega > 0, so the call price must be strictly increasing in sigma
        let base = reference_inputs();
        let mut last = f64::NEG_INFINITY;

        for i in 1..=40 {
            let vol = 0.05 * i as f64;
            let prices = price(&base.with_vol(vol)).unwrap();
            assert!(
                prices.call > last,
                "call price not increasing at vol={}",
                vol
            );
            last = prices.call;
        }
    }

    #[test]
    fn test_domain_errors_surface() {
        let base = reference_inputs();

        let expired = PricingInputs {
            time_to_expiry: 0.0,
            ..base
        };
        assert!(matches!(
            price(&expired),
            Err(PricingError::InvalidInput(_))
        ));
        assert!(matches!(d1d2(&expired), Err(PricingError::InvalidInput(_))));

        let zero_vol = PricingInputs { vol: 0.0, ..base };
        assert!(matches!(
            greeks(&zero_vol),
            Err(PricingError::InvalidInput(_))
        ));

        let negative_spot = PricingInputs { spot: -5.0, ..base };
        assert!(matches!(
            price(&negative_spot),
            Err(PricingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_build_quote_echoes_identity() {
        let spec = ContractSpec::new(
            "AAPL",
            NaiveDate::from_ymd_opt(2026, 12, 18).unwrap(),
            None,
        )
        .unwrap();
        let inputs = reference_inputs();

        let quote = build_quote(&spec, &inputs).unwrap();
        assert_eq!(quote.ticker, "AAPL");
        assert_eq!(quote.expiry, spec.expiry);
        assert_eq!(quote.inputs, inputs);

        // Quote numbers match the standalone operations
        assert_eq!(quote.prices, price(&inputs).unwrap());
        assert_eq!(quote.greeks, greeks(&inputs).unwrap());

        // Determinism: same inputs, same quote
        let again = build_quote(&spec, &inputs).unwrap();
        assert_eq!(quote.prices, again.prices);
        assert_eq!(quote.greeks, again.greeks);
    }
}
