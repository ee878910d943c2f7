//! Romberg integration.
//!
//! Builds trapezoidal estimates at successively halved step sizes and
//! cancels their leading error terms with repeated Richardson
//! extrapolation. For smooth integrands the diagonal of the Romberg table
//! converges very quickly.

use log::debug;

use crate::error::{QuadError, QuadResult};
use crate::quadrature::Estimate;

/// Options for Romberg integration.
#[derive(Debug, Clone)]
pub struct RombergOptions {
    /// Relative tolerance (default: 1e-8)
    pub rtol: f64,
    /// Absolute tolerance (default: 1e-8)
    pub atol: f64,
    /// Maximum number of step-halving levels (default: 20).
    ///
    /// Values above 30 are clamped to 30: level k uses 2^k intervals,
    /// and 2^30 is already about a billion samples.
    pub max_levels: usize,
}

impl Default for RombergOptions {
    fn default() -> Self {
        Self {
            rtol: 1e-8,
            atol: 1e-8,
            max_levels: 20,
        }
    }
}

/// Romberg integration via Richardson extrapolation.
///
/// Level `k` holds the trapezoidal estimate `T[k][0]` at step size
/// `h / 2^k`, computed from the previous level by adding only the new
/// midpoint samples. Extrapolation then fills the row with
/// `T[k][j] = (4^j T[k][j-1] - T[k-1][j-1]) / (4^j - 1)`, and the loop
/// stops once successive diagonal entries agree within
/// `atol + rtol * |value|`.
///
/// # Arguments
///
/// * `f` - Function to integrate (must be evaluable at both endpoints)
/// * `a` - Lower bound
/// * `b` - Upper bound
/// * `options` - Tolerances and maximum refinement depth
///
/// # Returns
///
/// An [`Estimate`]. If `max_levels` is exhausted before the diagonal
/// settles, the deepest entry is returned with `converged: false`.
///
/// # Errors
///
/// Returns an error if `a >= b` or `options.max_levels == 0`.
///
/// # Example
///
/// ```
/// use quadr::quadrature::{romberg, RombergOptions};
///
/// // Integrate exp(x) from 0 to 1 (exact = e - 1)
/// let est = romberg(|x: f64| x.exp(), 0.0, 1.0, &RombergOptions::default()).unwrap();
/// assert!((est.value - (std::f64::consts::E - 1.0)).abs() < 1e-10);
/// assert!(est.converged);
/// ```
pub fn romberg<F>(f: F, a: f64, b: f64, options: &RombergOptions) -> QuadResult<Estimate>
where
    F: Fn(f64) -> f64,
{
    if a >= b {
        return Err(QuadError::InvalidInterval {
            a,
            b,
            context: "romberg".to_string(),
        });
    }

    if options.max_levels == 0 {
        return Err(QuadError::InvalidParameter {
            parameter: "max_levels".to_string(),
            message: "must be at least 1".to_string(),
        });
    }

    // 2^k intervals at level k; cap the depth so the shifts cannot overflow
    let max_levels = options.max_levels.min(30);

    let width = b - a;
    let mut neval = 0;

    // Only the previous and current rows of the triangular table are kept
    let mut prev = vec![0.0; max_levels];
    let mut curr = vec![0.0; max_levels];

    prev[0] = width * (f(a) + f(b)) / 2.0;
    neval += 2;

    for k in 1..max_levels {
        let intervals: u64 = 1 << k;
        let h = width / intervals as f64;

        // Only the midpoints new to this level need sampling
        let new_points = 1u64 << (k - 1);
        let mut sum = 0.0;
        for i in 0..new_points {
            sum += f(a + (2 * i + 1) as f64 * h);
        }
        neval += new_points as usize;

        curr[0] = prev[0] / 2.0 + h * sum;

        for j in 1..=k {
            let factor = 4.0_f64.powi(j as i32);
            curr[j] = (factor * curr[j - 1] - prev[j - 1]) / (factor - 1.0);
        }

        let error = (curr[k] - prev[k - 1]).abs();
        debug!(
            "romberg: level {} ({} intervals), diagonal {:.12}, error {:.3e}",
            k, intervals, curr[k], error
        );

        let tolerance = options.atol + options.rtol * curr[k].abs();
        if error <= tolerance {
            return Ok(Estimate {
                value: curr[k],
                error,
                neval,
                converged: true,
            });
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    // Tolerance not reached; report the deepest diagonal entry
    let k = max_levels - 1;
    let error = if k > 0 {
        (prev[k] - prev[k - 1]).abs()
    } else {
        f64::INFINITY
    };

    Ok(Estimate {
        value: prev[k],
        error,
        neval,
        converged: false,
    })
}
