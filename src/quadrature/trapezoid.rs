//! Trapezoidal rule for numerical integration.
//!
//! The trapezoidal rule approximates the integral by summing trapezoid areas.
//! It has O(h²) accuracy for smooth functions.

use crate::error::{QuadError, QuadResult};

/// Integrate using the composite trapezoidal rule.
///
/// Evaluates `f` at `n + 1` equally spaced nodes; the endpoints carry
/// weight 1, interior nodes weight 2, and the sum is scaled by `h / 2`
/// with `h = (b - a) / n`.
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
/// use quadr::quadrature::trapezoid;
///
/// // Integrate x^2 from 0 to 1 (exact = 1/3)
/// let result = trapezoid(|x| x * x, 0.0, 1.0, 1000).unwrap();
/// assert!((result - 1.0 / 3.0).abs() < 1e-6);
/// ```
pub fn trapezoid<F>(f: F, a: f64, b: f64, n: usize) -> QuadResult<f64>
where
    F: Fn(f64) -> f64,
{
    if a >= b {
        return Err(QuadError::InvalidInterval {
            a,
            b,
            context: "trapezoid".to_string(),
        });
    }

    if n == 0 {
        return Err(QuadError::InvalidParameter {
            parameter: "n".to_string(),
            message: "need at least 1 subinterval".to_string(),
        });
    }

    let h = (b - a) / n as f64;

    let mut sum = 0.5 * (f(a) + f(b));
    for i in 1..n {
        sum += f(a + i as f64 * h);
    }

    Ok(h * sum)
}
