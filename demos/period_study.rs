//! Period of the quartic-potential anharmonic oscillator.
//!
//! Certifies the period at amplitude 2 by step-doubling a Gauss-Legendre
//! rule, cross-checks against adaptive and Romberg quadrature, and prints
//! a period-vs-amplitude table.
//!
//! Run with: cargo run --example period_study

use quadr::oscillator::{minimum_nodes, period, period_romberg, period_sweep};
use quadr::quadrature::RombergOptions;
use quadr::QuadError;

fn main() -> Result<(), QuadError> {
    env_logger::init();

    let a = 2.0;

    println!("Gauss-Legendre step-doubling for amplitude {}:", a);
    let refinement = minimum_nodes(a, 1e-4, 12)?;
    for step in &refinement.history {
        println!(
            "  N = {:>4}   T = {:.6}   error = {:.6e}",
            step.n, step.value, step.error
        );
    }
    println!("Minimum N for error < 1e-4: {}", refinement.n);
    println!("Period estimate: {:.10}", refinement.value);

    let adaptive = period(a)?;
    println!(
        "\nAdaptive quadrature: T = {:.10} (reported error {:.3e})",
        adaptive.value, adaptive.error
    );

    let rom = period_romberg(a, &RombergOptions::default())?;
    println!(
        "Romberg:             T = {:.10} (reported error {:.3e})",
        rom.value, rom.error
    );

    println!("\nPeriod vs amplitude:");
    let amplitudes: Vec<f64> = (0..=10).map(|i| i as f64 / 5.0).collect();
    let periods = period_sweep(&amplitudes)?;
    for (a, t) in amplitudes.iter().zip(&periods) {
        println!("  a = {:.1}   T = {:.6}", a, t);
    }

    Ok(())
}
