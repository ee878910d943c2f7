//! Step-doubling refinement.
//!
//! Certifies a target accuracy for any quadrature estimator by doubling its
//! sample count until two successive estimates agree. The difference
//! |E(2N) − E(N)| serves as the error proxy; no per-subinterval adaptivity
//! is involved.

use log::debug;

use crate::error::{QuadError, QuadResult};

/// Options for step-doubling refinement.
#[derive(Debug, Clone)]
pub struct RefineOptions {
    /// Absolute tolerance on the step-doubling error proxy (default: 1e-8)
    pub tol: f64,
    /// Maximum number of doublings before giving up (default: 20)
    pub max_doublings: usize,
}

impl Default for RefineOptions {
    fn default() -> Self {
        Self {
            tol: 1e-8,
            max_doublings: 20,
        }
    }
}

/// One row of the refinement history.
#[derive(Debug, Clone, Copy)]
pub struct RefineStep {
    /// Sample count of the coarser estimate
    pub n: usize,
    /// Estimate at `n` samples
    pub value: f64,
    /// Error proxy |E(2n) − E(n)|
    pub error: f64,
}

/// Outcome of step-doubling refinement.
#[derive(Debug, Clone)]
pub struct Refinement {
    /// Finest estimate computed
    pub value: f64,
    /// Last error proxy
    pub error: f64,
    /// First sample count whose doubling changed the estimate by less than
    /// the tolerance (the certified count), or the last count tried
    pub n: usize,
    /// Whether the tolerance was reached
    pub converged: bool,
    /// Every (n, estimate, proxy) row visited, coarsest first
    pub history: Vec<RefineStep>,
}

/// Refine an estimator by step-doubling until two successive estimates agree.
///
/// Evaluates `estimate` at `n0`, `2·n0`, `4·n0`, ... and stops at the first
/// count `n` for which `|estimate(2n) − estimate(n)| < options.tol`. Each
/// doubled estimate is reused as the coarse one of the next round, so the
/// estimator runs once per row.
///
/// # Arguments
///
/// * `estimate` - Maps a sample count to an integral estimate
/// * `n0` - Initial sample count (must be >= 1)
/// * `options` - Tolerance and doubling limit
///
/// # Returns
///
/// A [`Refinement`] with the certified count, the finest estimate, and the
/// full convergence history. If the proxy never drops below the tolerance,
/// the last estimate is returned with `converged: false`.
///
/// # Errors
///
/// Returns an error if `n0 == 0` or `options.max_doublings == 0`, or if the
/// estimator itself fails.
///
/// # Example
///
/// ```
/// use quadr::quadrature::{step_doubling, trapezoid, RefineOptions};
///
/// let options = RefineOptions { tol: 1e-6, ..Default::default() };
/// let refinement = step_doubling(
///     |n| trapezoid(|x: f64| x.exp(), 0.0, 1.0, n),
///     2,
///     &options,
/// ).unwrap();
/// assert!(refinement.converged);
/// assert!((refinement.value - (std::f64::consts::E - 1.0)).abs() < 1e-5);
/// ```
pub fn step_doubling<E>(
    mut estimate: E,
    n0: usize,
    options: &RefineOptions,
) -> QuadResult<Refinement>
where
    E: FnMut(usize) -> QuadResult<f64>,
{
    if n0 == 0 {
        return Err(QuadError::InvalidParameter {
            parameter: "n0".to_string(),
            message: "need at least 1 sample".to_string(),
        });
    }

    if options.max_doublings == 0 {
        return Err(QuadError::InvalidParameter {
            parameter: "max_doublings".to_string(),
            message: "must be at least 1".to_string(),
        });
    }

    let mut n = n0;
    let mut coarse = estimate(n)?;
    let mut history = Vec::with_capacity(options.max_doublings);

    for _ in 0..options.max_doublings {
        let fine = estimate(2 * n)?;
        let error = (fine - coarse).abs();

        debug!(
            "step_doubling: n = {}, estimate = {:.12}, proxy = {:.3e}",
            n, coarse, error
        );
        history.push(RefineStep {
            n,
            value: coarse,
            error,
        });

        if error < options.tol {
            return Ok(Refinement {
                value: fine,
                error,
                n,
                converged: true,
                history,
            });
        }

        coarse = fine;
        n *= 2;
    }

    let last = history.last().copied();
    Ok(Refinement {
        value: coarse,
        error: last.map_or(f64::INFINITY, |step| step.error),
        n,
        converged: false,
        history,
    })
}
