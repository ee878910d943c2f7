//! Simpson's rule for numerical integration.
//!
//! Simpson's rule fits a parabola through each pair of adjacent subintervals,
//! achieving O(h⁴) accuracy for smooth functions. It is exact for polynomials
//! up to degree 3.

use crate::error::{QuadError, QuadResult};

/// Integrate using the composite Simpson's 1/3 rule.
///
/// Evaluates `f` at `n + 1` equally spaced nodes. The endpoints carry
/// weight 1, odd-indexed interior nodes weight 4, even-indexed interior
/// nodes weight 2, and the sum is scaled by `h / 3`.
///
/// The subdivision count `n` must be even: each parabolic segment spans two
/// subintervals. An odd `n` is rejected rather than silently adjusted, so a
/// caller always gets the rule it asked for.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound of integration
/// * `b` - Upper bound of integration
/// * `n` - Number of subintervals (must be even and >= 2)
///
/// # Errors
///
/// Returns an error if `a >= b`, or if `n` is odd or less than 2.
///
/// # Example
///
/// ```
/// use quadr::quadrature::simpson;
///
/// // Integrate x^3 from 0 to 1 (exact = 1/4, Simpson is exact for cubics)
/// let result = simpson(|x| x * x * x, 0.0, 1.0, 2).unwrap();
/// assert!((result - 0.25).abs() < 1e-14);
/// ```
pub fn simpson<F>(f: F, a: f64, b: f64, n: usize) -> QuadResult<f64>
where
    F: Fn(f64) -> f64,
{
    if a >= b {
        return Err(QuadError::InvalidInterval {
            a,
            b,
            context: "simpson".to_string(),
        });
    }

    if n < 2 || n % 2 != 0 {
        return Err(QuadError::InvalidParameter {
            parameter: "n".to_string(),
            message: format!("Simpson's rule requires an even number of subintervals (got {})", n),
        });
    }

    let h = (b - a) / n as f64;

    let mut sum = f(a) + f(b);

    // Odd-indexed interior nodes, weight 4
    for i in (1..n).step_by(2) {
        sum += 4.0 * f(a + i as f64 * h);
    }

    // Even-indexed interior nodes, weight 2
    for i in (2..n).step_by(2) {
        sum += 2.0 * f(a + i as f64 * h);
    }

    Ok(h * sum / 3.0)
}
