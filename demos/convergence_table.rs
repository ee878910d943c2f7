//! Convergence of the quadrature rules on monomials x^k over [0, 1].
//!
//! Prints, for each rule, the k × N matrix of symmetric relative errors
//! that a heatmap frontend would render.
//!
//! Run with: cargo run --example convergence_table

use quadr::convergence::{error_matrix, Rule};
use quadr::QuadError;

fn main() -> Result<(), QuadError> {
    env_logger::init();

    let k_values: Vec<f64> = (0..=10).map(|k| k as f64).collect();
    let n_values: Vec<usize> = (1..=5).map(|e| 10usize.pow(e)).collect();

    for rule in [
        Rule::Midpoint,
        Rule::Trapezoid,
        Rule::Simpson,
        Rule::GaussLegendre,
    ] {
        let matrix = error_matrix(
            rule,
            0.0,
            1.0,
            &k_values,
            &n_values,
            |x, k| x.powf(k),
            |k| 1.0 / (k + 1.0),
        )?;

        println!("\nRelative error, {} rule:", rule.name());
        let header: Vec<String> = n_values.iter().map(|n| format!("{:>10}", n)).collect();
        println!("  k \\ N {}", header.join(" "));
        for (k, row) in k_values.iter().zip(&matrix) {
            let cells: Vec<String> = row.iter().map(|e| format!("{:>10.2e}", e)).collect();
            println!("  {:>5} {}", k, cells.join(" "));
        }
    }

    Ok(())
}
