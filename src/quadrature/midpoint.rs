//! Midpoint rule for numerical integration.
//!
//! The midpoint rule samples each subinterval at its center. It is an open
//! rule (the endpoints are never evaluated) with O(h²) accuracy.

use crate::error::{QuadError, QuadResult};

/// Integrate using the composite midpoint rule.
///
/// Partitions `[a, b]` into `n` equal subintervals, evaluates `f` at the
/// center of each, and scales the sum by the step size `h = (b - a) / n`.
///
/// Because the endpoints are never sampled, this rule tolerates integrands
/// that are undefined at `a` or `b`.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound of integration
/// * `b` - Upper bound of integration
/// * `n` - Number of subintervals (must be >= 1)
///
/// # Errors
///
/// Returns an error if `a >= b` or `n == 0`.
///
/// # Example
///
/// ```
/// use quadr::quadrature::midpoint;
///
/// // Integrate x^2 from 0 to 1 (exact = 1/3)
/// let result = midpoint(|x| x * x, 0.0, 1.0, 1000).unwrap();
/// assert!((result - 1.0 / 3.0).abs() < 1e-6);
/// ```
pub fn midpoint<F>(f: F, a: f64, b: f64, n: usize) -> QuadResult<f64>
where
    F: Fn(f64) -> f64,
{
    if a >= b {
        return Err(QuadError::InvalidInterval {
            a,
            b,
            context: "midpoint".to_string(),
        });
    }

    if n == 0 {
        return Err(QuadError::InvalidParameter {
            parameter: "n".to_string(),
            message: "need at least 1 subinterval".to_string(),
        });
    }

    let h = (b - a) / n as f64;

    let mut sum = 0.0;
    for i in 0..n {
        let x_mid = a + (i as f64 + 0.5) * h;
        sum += f(x_mid);
    }

    Ok(h * sum)
}
