//! Vanilla Options CLI
//!
//! Command-line walkthrough of the pricing engine: quote a reference
//! contract, recover its volatility from the price, then attempt a live
//! quote from Yahoo Finance.

use vanilla_options::models::{black_scholes, implied_vol};
use vanilla_options::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("Vanilla Options Pricing Engine");
    println!("==============================\n");

    let spec = match ContractSpec::parse("AAPL", "2026-12-18", None) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Bad contract: {}", e);
            return;
        }
    };

    // Reference inputs, manual mode
    let inputs = PricingInputs::new(200.0, 200.0, 0.5, 0.02, 0.25);

    println!("Contract: {} European (expiry {})", spec.ticker, spec.expiry);
    println!("  Spot: ${:.2}", inputs.spot);
    println!("  Strike: ${:.2}", inputs.strike);
    println!("  Time: {:.2} years", inputs.time_to_expiry);
    println!("  Rate: {:.2}%", inputs.rate * 100.0);
    println!("  Vol: {:.2}%\n", inputs.vol * 100.0);

    let quote = match black_scholes::build_quote(&spec, &inputs) {
        Ok(q) => q,
        Err(e) => {
            eprintln!("Pricing failed: {}", e);
            return;
        }
    };

    println!("Option Prices:");
    println!("  Call: ${:.4}", quote.prices.call);
    println!("  Put: ${:.4}", quote.prices.put);

    println!("\nGreeks (call / put):");
    println!(
        "  Delta: {:.4} / {:.4}",
        quote.greeks.call.delta, quote.greeks.put.delta
    );
    println!(
        "  Gamma: {:.6} / {:.6}",
        quote.greeks.call.gamma, quote.greeks.put.gamma
    );
    println!(
        "  Vega:  {:.4} / {:.4}",
        quote.greeks.call.vega, quote.greeks.put.vega
    );
    println!(
        "  Theta: {:.4} / {:.4}",
        quote.greeks.call.theta, quote.greeks.put.theta
    );
    println!(
        "  Rho:   {:.4} / {:.4}",
        quote.greeks.call.rho, quote.greeks.put.rho
    );

    // Round-trip the call price through the solver
    println!("\nImplied Volatility (Newton-Raphson):");
    let params = IvParams {
        initial_guess: 0.30,
        ..IvParams::default()
    };
    match implied_vol::solve_implied_vol(
        OptionType::Call,
        quote.prices.call,
        inputs.spot,
        inputs.strike,
        inputs.time_to_expiry,
        inputs.rate,
        &params,
    ) {
        Ok(sol) => match sol.status {
            SolverStatus::Converged => println!(
                "  Recovered IV: {:.4}% in {} iterations (expected {:.4}%)",
                sol.vol * 100.0,
                sol.iterations,
                inputs.vol * 100.0
            ),
            SolverStatus::MaxIterationsExceeded => println!(
                "  Did not converge within budget; last guess {:.4}%",
                sol.vol * 100.0
            ),
            SolverStatus::Diverged => println!("  Solver diverged; no implied vol for this price"),
        },
        Err(e) => println!("  IV solve failed: {}", e),
    }

    // Try pricing off live data
    println!("\n--- Live Data ---");
    println!("Attempting to fetch {} from Yahoo Finance...\n", spec.ticker);

    let yahoo = YahooClient::new();
    let t = spec.time_to_expiry_now();

    if t <= 0.0 {
        println!("Contract expiry {} is not in the future, skipping live quote", spec.expiry);
        return;
    }

    match yahoo.latest_close(&spec.ticker) {
        Ok(close) => {
            let rate = resolve_rate(&yahoo, &spec, t);
            println!("{} close: ${:.2} (as of {})", close.symbol, close.price, close.timestamp);
            println!(
                "Rate for T={:.3}y via {}: {:.3}%",
                t,
                MaturityBucket::for_tenor(t).symbol(),
                rate * 100.0
            );

            let live = PricingInputs::new(close.price, inputs.strike, t, rate, inputs.vol);
            match black_scholes::build_quote(&spec, &live) {
                Ok(q) => println!(
                    "Live quote at {:.0}% vol: call ${:.2}, put ${:.2}",
                    live.vol * 100.0,
                    q.prices.call,
                    q.prices.put
                ),
                Err(e) => println!("Live pricing failed: {}", e),
            }
        }
        Err(e) => {
            println!("Could not fetch {}: {}", spec.ticker, e);
            println!("(This is expected if you're offline or Yahoo API is unavailable)");
        }
    }

    println!("\n--- Done ---");
}
